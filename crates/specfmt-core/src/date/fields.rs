//! Field matcher construction.
//!
//! The engine is probed across synthetic calendars — twelve months on a
//! fixed day, the seven weekdays of one known week, one instant either
//! side of noon — to learn the exact tokens this (locale, options) pair
//! renders for each named field. A field whose probe tokens are pure
//! digit runs is numeric for this configuration and gets a digit matcher
//! instead. An engine that cannot supply an expected field is a
//! configuration fault, reported at construction time.

use chrono::{NaiveDate, NaiveDateTime};

use specfmt_common::{BuildError, DateOptions, DatePartKind, LocaleEngine};

/// Which slot of the draft date a numeric run fills.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum DateSlot {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

/// One step of the ordered field walk the parsing driver executes.
#[derive(Debug, Clone)]
pub(crate) enum FieldStep {
    /// Fixed punctuation; matched loosely at the cursor.
    Literal(String),
    /// A run of locale digit glyphs into a date slot.
    Numeric(DateSlot),
    /// Month name tokens in month order; first match commits.
    MonthNames(Vec<String>),
    /// Weekday name tokens; matched and discarded.
    WeekdayNames(Vec<String>),
    DayPeriod { am: String, pm: String },
}

/// Fixed probe instant used to capture the locale's field sequence and
/// literal punctuation. Field order is value-independent for a fixed
/// (locale, options), so any instant works; a fixed one keeps
/// construction deterministic.
pub(crate) fn structure_probe() -> NaiveDateTime {
    probe_instant(2001, 2, 3, 14, 5, 6)
}

fn probe_instant(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, min, sec))
        .expect("probe instant is a valid date")
}

pub(crate) fn build_steps(
    engine: &dyn LocaleEngine,
    locale: &str,
    options: &DateOptions,
    digit_glyphs: &[String; 10],
) -> Result<Vec<FieldStep>, BuildError> {
    let parts = engine.format_date_parts(locale, options, &structure_probe());

    let mut steps = Vec::with_capacity(parts.len());
    for part in &parts {
        let step = match part.kind {
            DatePartKind::Year => FieldStep::Numeric(DateSlot::Year),
            DatePartKind::Day => FieldStep::Numeric(DateSlot::Day),
            DatePartKind::Hour => FieldStep::Numeric(DateSlot::Hour),
            DatePartKind::Minute => FieldStep::Numeric(DateSlot::Minute),
            DatePartKind::Second => FieldStep::Numeric(DateSlot::Second),
            DatePartKind::FractionalSecond => FieldStep::Numeric(DateSlot::Millisecond),
            DatePartKind::Month => {
                if crate::normalize::is_digit_run(&part.text, digit_glyphs) {
                    FieldStep::Numeric(DateSlot::Month)
                } else {
                    FieldStep::MonthNames(probe_month_names(engine, locale, options)?)
                }
            }
            DatePartKind::Weekday => {
                FieldStep::WeekdayNames(probe_weekday_names(engine, locale, options)?)
            }
            DatePartKind::DayPeriod => {
                let (am, pm) = probe_day_periods(engine, locale, options)?;
                FieldStep::DayPeriod { am, pm }
            }
            DatePartKind::Literal | DatePartKind::Era | DatePartKind::TimeZoneName => {
                FieldStep::Literal(part.text.clone())
            }
        };
        steps.push(step);
    }
    Ok(steps)
}

fn extract(parts: &[specfmt_common::DatePart], kind: DatePartKind) -> String {
    parts
        .iter()
        .filter(|p| p.kind == kind)
        .map(|p| p.text.as_str())
        .collect()
}

/// Twelve probes, one per month on a fixed day. 2007 keeps the probe
/// year stable across calendars the engine may be configured with.
fn probe_month_names(
    engine: &dyn LocaleEngine,
    locale: &str,
    options: &DateOptions,
) -> Result<Vec<String>, BuildError> {
    (1..=12)
        .map(|month| {
            let probe = probe_instant(2007, month, 21, 14, 5, 6);
            let token = extract(&engine.format_date_parts(locale, options, &probe), DatePartKind::Month);
            if token.is_empty() {
                Err(BuildError::MissingField {
                    locale: locale.to_string(),
                    field: "month",
                })
            } else {
                Ok(token)
            }
        })
        .collect()
}

/// Seven probes over the week starting Sunday 2000-01-02.
fn probe_weekday_names(
    engine: &dyn LocaleEngine,
    locale: &str,
    options: &DateOptions,
) -> Result<Vec<String>, BuildError> {
    (0..7)
        .map(|offset| {
            let probe = probe_instant(2000, 1, 2 + offset, 14, 5, 6);
            let token =
                extract(&engine.format_date_parts(locale, options, &probe), DatePartKind::Weekday);
            if token.is_empty() {
                Err(BuildError::MissingField {
                    locale: locale.to_string(),
                    field: "weekday",
                })
            } else {
                Ok(token)
            }
        })
        .collect()
}

/// Two probes, one clearly before and one clearly after local noon.
fn probe_day_periods(
    engine: &dyn LocaleEngine,
    locale: &str,
    options: &DateOptions,
) -> Result<(String, String), BuildError> {
    let am_probe = probe_instant(2001, 2, 3, 9, 0, 0);
    let pm_probe = probe_instant(2001, 2, 3, 15, 0, 0);
    let am = extract(
        &engine.format_date_parts(locale, options, &am_probe),
        DatePartKind::DayPeriod,
    );
    let pm = extract(
        &engine.format_date_parts(locale, options, &pm_probe),
        DatePartKind::DayPeriod,
    );
    if am.is_empty() || pm.is_empty() {
        return Err(BuildError::MissingField {
            locale: locale.to_string(),
            field: "dayPeriod",
        });
    }
    Ok((am, pm))
}
