//! Time zone handling for date formatting/parsing.
//!
//! Zones are explicit: a parser/formatter is constructed for a zone and
//! converts between UTC instants and that zone's wall-clock time. Named
//! IANA zones require the `chrono-tz` cargo feature; without it only UTC
//! and fixed offsets resolve.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

use specfmt_common::BuildError;

#[derive(Clone, Debug)]
pub enum TimeZoneSpec {
    Utc,
    Fixed(FixedOffset),
    /// IANA zone (e.g. "Europe/Berlin").
    #[cfg(feature = "chrono-tz")]
    Named(chrono_tz::Tz),
}

impl Default for TimeZoneSpec {
    fn default() -> Self {
        TimeZoneSpec::Utc
    }
}

impl TimeZoneSpec {
    /// Resolve an optional zone name. `None` means UTC.
    pub fn resolve(name: Option<&str>) -> Result<Self, BuildError> {
        let Some(name) = name else {
            return Ok(TimeZoneSpec::Utc);
        };
        if name.eq_ignore_ascii_case("utc") || name == "Z" {
            return Ok(TimeZoneSpec::Utc);
        }
        if let Ok(offset) = name.parse::<FixedOffset>() {
            return Ok(TimeZoneSpec::Fixed(offset));
        }
        #[cfg(feature = "chrono-tz")]
        if let Ok(tz) = name.parse::<chrono_tz::Tz>() {
            return Ok(TimeZoneSpec::Named(tz));
        }
        Err(BuildError::UnknownTimeZone {
            name: name.to_string(),
        })
    }

    /// Wall-clock time in this zone for a UTC instant.
    pub fn to_wall(&self, instant: &DateTime<Utc>) -> NaiveDateTime {
        match self {
            TimeZoneSpec::Utc => instant.naive_utc(),
            TimeZoneSpec::Fixed(offset) => instant.with_timezone(offset).naive_local(),
            #[cfg(feature = "chrono-tz")]
            TimeZoneSpec::Named(tz) => instant.with_timezone(tz).naive_local(),
        }
    }

    /// UTC instant for a wall-clock time in this zone. Ambiguous local
    /// times (DST folds) resolve to the earlier instant; nonexistent
    /// local times yield `None`.
    pub fn to_utc(&self, wall: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            TimeZoneSpec::Utc => Some(Utc.from_utc_datetime(&wall)),
            TimeZoneSpec::Fixed(offset) => offset
                .from_local_datetime(&wall)
                .earliest()
                .map(|d| d.with_timezone(&Utc)),
            #[cfg(feature = "chrono-tz")]
            TimeZoneSpec::Named(tz) => tz
                .from_local_datetime(&wall)
                .earliest()
                .map(|d| d.with_timezone(&Utc)),
        }
    }
}
