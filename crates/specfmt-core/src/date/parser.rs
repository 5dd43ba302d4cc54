//! The date parsing driver.
//!
//! A driven parser walks the ordered field list captured at construction
//! and, in that order, runs the matching field matcher or literal match at
//! the cursor. Any mismatch anywhere fails the whole parse; so does
//! unconsumed trailing input. Locale-independent families bypass the
//! driver entirely and use fixed anchored patterns.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::date::fields::{DateSlot, FieldStep};
use crate::date::timezone::TimeZoneSpec;
use crate::normalize::{compare_token_at, digit_at, loose_unify_spaces, skip_ignorable};

static ISO_EXTENDED_RX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2})(?:\.(\d{1,7}))?$")
        .expect("static regex")
});
static ISO_SECONDS_RX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2})$").expect("static regex")
});
static ISO_UTC_SPACE_RX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2}) (\d{2}):(\d{2}):(\d{2})Z$").expect("static regex")
});

/// A constructed parsing function: `&str -> Option<DateTime<Utc>>`.
/// Parse failures are `None`, never errors.
pub struct DateParser {
    kind: DateParserKind,
}

enum DateParserKind {
    Driven {
        steps: Vec<FieldStep>,
        digits: Arc<[String; 10]>,
        zone: TimeZoneSpec,
    },
    /// `o` — ISO 8601 with optional fractional seconds.
    IsoExtended,
    /// `s` — ISO 8601, whole seconds.
    IsoSeconds,
    /// `u` — universal sortable, space-separated, trailing `Z`.
    IsoUtcSpace,
    /// `r` — RFC 1123.
    Rfc1123,
}

impl DateParser {
    pub(crate) fn driven(steps: Vec<FieldStep>, digits: Arc<[String; 10]>, zone: TimeZoneSpec) -> Self {
        Self {
            kind: DateParserKind::Driven { steps, digits, zone },
        }
    }

    pub(crate) fn locale_independent(family: char) -> Self {
        let kind = match family {
            'o' => DateParserKind::IsoExtended,
            's' => DateParserKind::IsoSeconds,
            'u' => DateParserKind::IsoUtcSpace,
            _ => DateParserKind::Rfc1123,
        };
        Self { kind }
    }

    /// Parse a formatted date string into a UTC instant.
    pub fn parse(&self, input: &str) -> Option<DateTime<Utc>> {
        match &self.kind {
            DateParserKind::Driven { steps, digits, zone } => {
                parse_driven(steps, digits, zone, input)
            }
            DateParserKind::IsoExtended => parse_iso(&ISO_EXTENDED_RX, input),
            DateParserKind::IsoSeconds => parse_iso(&ISO_SECONDS_RX, input),
            DateParserKind::IsoUtcSpace => parse_iso(&ISO_UTC_SPACE_RX, input),
            DateParserKind::Rfc1123 => DateTime::parse_from_rfc2822(input)
                .ok()
                .map(|d| d.with_timezone(&Utc)),
        }
    }
}

#[derive(Debug)]
struct DraftDate {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
    am: bool,
    pm: bool,
}

impl Default for DraftDate {
    fn default() -> Self {
        Self {
            year: 1970,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
            am: false,
            pm: false,
        }
    }
}

fn parse_driven(
    steps: &[FieldStep],
    digits: &[String; 10],
    zone: &TimeZoneSpec,
    input: &str,
) -> Option<DateTime<Utc>> {
    let input = loose_unify_spaces(input);
    let mut index = 0usize;
    let mut draft = DraftDate::default();

    for step in steps {
        match step {
            FieldStep::Literal(text) => {
                index = compare_token_at(text, &input, index)?;
            }
            FieldStep::Numeric(slot) => {
                let start = skip_ignorable(&input, index);
                let (next, text) = consume_digit_run(digits, &input, start)?;
                index = next;
                assign_slot(&mut draft, *slot, &text)?;
            }
            FieldStep::MonthNames(tokens) => {
                let (month, next) = tokens.iter().enumerate().find_map(|(i, token)| {
                    compare_token_at(token, &input, index).map(|next| (i, next))
                })?;
                draft.month = month as u32 + 1;
                index = next;
            }
            FieldStep::WeekdayNames(tokens) => {
                index = tokens
                    .iter()
                    .find_map(|token| compare_token_at(token, &input, index))?;
            }
            FieldStep::DayPeriod { am, pm } => {
                if let Some(next) = compare_token_at(am, &input, index) {
                    draft.am = true;
                    index = next;
                } else if let Some(next) = compare_token_at(pm, &input, index) {
                    draft.pm = true;
                    index = next;
                } else {
                    return None;
                }
            }
        }
    }

    // Trailing unconsumed input (beyond ignorable spacing) fails the parse.
    if skip_ignorable(&input, index) != input.len() {
        return None;
    }

    if draft.pm && (1..=11).contains(&draft.hour) {
        draft.hour += 12;
    }
    if draft.am && draft.hour == 12 {
        draft.hour = 0;
    }

    let date = NaiveDate::from_ymd_opt(draft.year, draft.month, draft.day)?;
    let time = NaiveTime::from_hms_milli_opt(draft.hour, draft.minute, draft.second, draft.millisecond)?;
    zone.to_utc(date.and_time(time))
}

/// Consume a run of locale digit glyphs, returning its canonical ASCII
/// digit string. Empty runs and absurdly long runs both fail.
fn consume_digit_run(digits: &[String; 10], input: &str, index: usize) -> Option<(usize, String)> {
    let mut i = index;
    let mut out = String::new();
    while let Some((next, value)) = digit_at(digits, input, i) {
        i = next;
        out.push((b'0' + value) as char);
        if out.len() > 9 {
            return None;
        }
    }
    if out.is_empty() { None } else { Some((i, out)) }
}

fn assign_slot(draft: &mut DraftDate, slot: DateSlot, text: &str) -> Option<()> {
    let value: u32 = text.parse().ok()?;
    match slot {
        DateSlot::Year => draft.year = value as i32,
        DateSlot::Month => draft.month = value,
        DateSlot::Day => draft.day = value,
        DateSlot::Hour => draft.hour = value,
        DateSlot::Minute => draft.minute = value,
        DateSlot::Second => draft.second = value,
        DateSlot::Millisecond => draft.millisecond = scale_millis(text)?,
    }
    Some(())
}

/// Fractional-second digits scale by their width: "6" is 600 ms,
/// "6789" truncates to 678.
fn scale_millis(text: &str) -> Option<u32> {
    let mut padded = text.to_string();
    while padded.len() < 3 {
        padded.push('0');
    }
    padded[..3].parse().ok()
}

fn parse_iso(rx: &Regex, input: &str) -> Option<DateTime<Utc>> {
    let caps = rx.captures(input)?;
    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, field(2)?, field(3)?)?;
    let millis = caps
        .get(7)
        .map(|m| scale_millis(m.as_str()))
        .unwrap_or(Some(0))?;
    let time = NaiveTime::from_hms_milli_opt(field(4)?, field(5)?, field(6)?, millis)?;
    Some(Utc.from_utc_datetime(&date.and_time(time)))
}
