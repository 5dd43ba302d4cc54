//! Specifier-driven date formatting.
//!
//! Engine-backed families delegate to the locale engine's part
//! decomposition, with one transformation: a year the engine renders with
//! two digits is re-rendered as the full four-digit year, including the
//! unusual correction some calendars need around the 99/00 century
//! boundary; see [`resolve_two_digit_year`].

use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};

use specfmt_common::{DateOptions, DatePartKind, LocaleEngine};

use crate::date::timezone::TimeZoneSpec;
use crate::number::{NumberFormatter, NumberParser};

/// A constructed formatting function: `&DateTime<Utc> -> String`.
pub struct DateFormatter {
    kind: DateFormatterKind,
}

enum DateFormatterKind {
    Engine {
        engine: Arc<dyn LocaleEngine>,
        locale: String,
        options: DateOptions,
        zone: TimeZoneSpec,
        year_parser: Arc<NumberParser>,
        year_formatter: Arc<NumberFormatter>,
    },
    /// `o` — ISO 8601 with seven fractional digits.
    IsoExtended,
    /// `s` — ISO 8601, whole seconds.
    IsoSeconds,
    /// `u` — universal sortable.
    IsoUtcSpace,
    /// `r` — RFC 1123.
    Rfc1123,
}

impl DateFormatter {
    pub(crate) fn engine_backed(
        engine: Arc<dyn LocaleEngine>,
        locale: &str,
        options: DateOptions,
        zone: TimeZoneSpec,
        year_parser: Arc<NumberParser>,
        year_formatter: Arc<NumberFormatter>,
    ) -> Self {
        Self {
            kind: DateFormatterKind::Engine {
                engine,
                locale: locale.to_string(),
                options,
                zone,
                year_parser,
                year_formatter,
            },
        }
    }

    pub(crate) fn locale_independent(family: char) -> Self {
        let kind = match family {
            'o' => DateFormatterKind::IsoExtended,
            's' => DateFormatterKind::IsoSeconds,
            'u' => DateFormatterKind::IsoUtcSpace,
            _ => DateFormatterKind::Rfc1123,
        };
        Self { kind }
    }

    pub fn format(&self, value: &DateTime<Utc>) -> String {
        match &self.kind {
            DateFormatterKind::Engine {
                engine,
                locale,
                options,
                zone,
                year_parser,
                year_formatter,
            } => {
                let wall = zone.to_wall(value);
                let mut out = String::new();
                for part in engine.format_date_parts(locale, options, &wall) {
                    if part.kind == DatePartKind::Year {
                        if let Some(full) =
                            widen_year(&part.text, wall.year(), year_parser, year_formatter)
                        {
                            out.push_str(&full);
                            continue;
                        }
                    }
                    out.push_str(&part.text);
                }
                out
            }
            DateFormatterKind::IsoExtended => {
                format!("{}0000", value.format("%Y-%m-%dT%H:%M:%S%.3f"))
            }
            DateFormatterKind::IsoSeconds => value.format("%Y-%m-%dT%H:%M:%S").to_string(),
            DateFormatterKind::IsoUtcSpace => value.format("%Y-%m-%d %H:%M:%SZ").to_string(),
            DateFormatterKind::Rfc1123 => value.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        }
    }
}

/// If the engine rendered a two-digit year, re-render the actual year in
/// full; otherwise keep the engine's text.
fn widen_year(
    rendered: &str,
    actual_year: i32,
    year_parser: &NumberParser,
    year_formatter: &NumberFormatter,
) -> Option<String> {
    let parsed = year_parser.parse(rendered)?;
    if !(0.0..100.0).contains(&parsed) {
        return None;
    }
    let full = resolve_two_digit_year(actual_year, parsed as i32);
    year_formatter.format(full as f64).ok()
}

/// Century correction for two-digit years. Around a century boundary some
/// calendars render the neighbouring year: a "99" against an actual year
/// divisible by 100 means the year before it, and a "00" against an
/// actual 'NN99 year means the year after.
pub(crate) fn resolve_two_digit_year(actual: i32, rendered: i32) -> i32 {
    if actual % 100 == 0 && rendered == 99 {
        actual - 1
    } else if actual % 100 == 99 && rendered == 0 {
        actual + 1
    } else {
        actual
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_two_digit_year;

    #[test]
    fn century_boundary_corrections() {
        assert_eq!(resolve_two_digit_year(2008, 8), 2008);
        assert_eq!(resolve_two_digit_year(2000, 0), 2000);
        assert_eq!(resolve_two_digit_year(2000, 99), 1999);
        assert_eq!(resolve_two_digit_year(1999, 0), 2000);
        assert_eq!(resolve_two_digit_year(1999, 99), 1999);
    }
}
