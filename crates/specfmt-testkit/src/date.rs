//! Date rendering for the fixture engine: a small CLDR-style pattern
//! interpreter. Patterns come from the per-locale tables; `'...'` quotes
//! literal text, letter runs select fields and widths, everything else is
//! literal punctuation.

use chrono::{Datelike, NaiveDateTime, Timelike};

use specfmt_common::{DateOptions, DatePart, DatePartKind, DateStyle, MonthStyle, TimeStyle};

use crate::data::LocaleData;
use crate::number::map_digits;

pub(crate) fn format_parts(d: &LocaleData, opts: &DateOptions, t: &NaiveDateTime) -> Vec<DatePart> {
    let pattern = pattern_for(d, opts);
    render_pattern(d, &pattern, t)
}

fn pattern_for(d: &LocaleData, opts: &DateOptions) -> String {
    if opts.date_style.is_some() || opts.time_style.is_some() {
        let date_pat = opts.date_style.map(|s| match s {
            DateStyle::Short | DateStyle::Medium => d.date_short,
            DateStyle::Long | DateStyle::Full => d.date_full,
        });
        let time_pat = opts.time_style.map(|s| match s {
            TimeStyle::Short => d.time_short,
            _ => d.time_medium,
        });
        return match (date_pat, time_pat) {
            (Some(dp), Some(tp)) => {
                let full = matches!(opts.date_style, Some(DateStyle::Long | DateStyle::Full));
                let glue = if full { d.glue_full } else { d.glue_short };
                format!("{dp}{glue}{tp}")
            }
            (Some(dp), None) => dp.to_string(),
            (None, time_pat) => time_pat.unwrap_or_default().to_string(),
        };
    }

    if opts.month.is_some() && opts.day.is_some() {
        return d.month_day.to_string();
    }
    if opts.year.is_some() && opts.month.is_some() {
        return d.year_month.to_string();
    }
    if let Some(style) = opts.month {
        return match style {
            MonthStyle::Numeric => "M",
            MonthStyle::TwoDigit => "MM",
            MonthStyle::Short | MonthStyle::Narrow => "MMM",
            MonthStyle::Long => "MMMM",
        }
        .to_string();
    }
    if let Some(width) = opts.weekday {
        return match width {
            specfmt_common::TextWidth::Long => "EEEE",
            _ => "EEE",
        }
        .to_string();
    }
    if opts.hour.is_some() {
        if opts.second.is_some() {
            return d.time_medium.to_string();
        }
        return d.time_short.to_string();
    }
    if opts.year.is_some() {
        return "yyyy".to_string();
    }
    if opts.day.is_some() {
        return "d".to_string();
    }
    String::new()
}

fn render_pattern(d: &LocaleData, pattern: &str, t: &NaiveDateTime) -> Vec<DatePart> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i];
        if c == '\'' {
            // Quoted literal text; '' is an escaped quote.
            if chars.get(i + 1) == Some(&'\'') {
                literal.push('\'');
                i += 2;
                continue;
            }
            let mut j = i + 1;
            while j < chars.len() && chars[j] != '\'' {
                literal.push(chars[j]);
                j += 1;
            }
            i = j + 1;
            continue;
        }
        if matches!(c, 'y' | 'M' | 'd' | 'E' | 'H' | 'h' | 'm' | 's' | 'a') {
            if !literal.is_empty() {
                parts.push(DatePart::new(DatePartKind::Literal, std::mem::take(&mut literal)));
            }
            let mut run = 1usize;
            while i + run < chars.len() && chars[i + run] == c {
                run += 1;
            }
            parts.push(field_part(d, c, run, t));
            i += run;
            continue;
        }
        literal.push(c);
        i += 1;
    }
    if !literal.is_empty() {
        parts.push(DatePart::new(DatePartKind::Literal, literal));
    }
    parts
}

fn field_part(d: &LocaleData, token: char, run: usize, t: &NaiveDateTime) -> DatePart {
    let pad = |value: u32, width: usize| {
        let text = format!("{value:0width$}");
        map_digits(d, &text)
    };
    match token {
        'y' => {
            let text = if run == 2 {
                format!("{:02}", t.year().rem_euclid(100))
            } else {
                format!("{:04}", t.year())
            };
            DatePart::new(DatePartKind::Year, map_digits(d, &text))
        }
        'M' => match run {
            1 | 2 => DatePart::new(DatePartKind::Month, pad(t.month(), run)),
            3 => DatePart::new(
                DatePartKind::Month,
                d.months_short[t.month0() as usize],
            ),
            _ => DatePart::new(DatePartKind::Month, d.months_long[t.month0() as usize]),
        },
        'd' => DatePart::new(DatePartKind::Day, pad(t.day(), run)),
        'E' => {
            let weekday = t.weekday().num_days_from_sunday() as usize;
            let name = if run >= 4 {
                d.weekdays_long[weekday]
            } else {
                d.weekdays_short[weekday]
            };
            DatePart::new(DatePartKind::Weekday, name)
        }
        'H' => DatePart::new(DatePartKind::Hour, pad(t.hour(), run)),
        'h' => {
            let hour12 = match t.hour() % 12 {
                0 => 12,
                h => h,
            };
            DatePart::new(DatePartKind::Hour, pad(hour12, run))
        }
        'm' => DatePart::new(DatePartKind::Minute, pad(t.minute(), run)),
        's' => DatePart::new(DatePartKind::Second, pad(t.second(), run)),
        // 'a'
        _ => {
            let period = if t.hour() < 12 {
                d.day_periods.0
            } else {
                d.day_periods.1
            };
            DatePart::new(DatePartKind::DayPeriod, period)
        }
    }
}
