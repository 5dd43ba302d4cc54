//! A deterministic in-memory [`LocaleEngine`] for tests and examples.
//!
//! `FixtureEngine` carries embedded data for en-US, de-DE, fr-FR, ar-EG
//! and sv-SE, and renders numbers/dates with the same structural texture a
//! real ICU-backed engine produces: grouped digits, accounting
//! parentheses, Arabic-Indic glyphs, bidi-marked affixes, no-break-space
//! separators. Unknown locales fall back to en-US, and unknown currency
//! codes render as the code itself, so probing never fails.

mod data;
mod date;
mod number;

use std::sync::Arc;

use chrono::NaiveDateTime;

use specfmt_common::{
    DateOptions, DatePart, DisplayNameKind, LocaleEngine, NumberOptions, NumberPart,
};

use crate::data::locale_data;

#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEngine;

impl FixtureEngine {
    pub fn new() -> Self {
        Self
    }

    /// Convenience for the common test setup.
    pub fn shared() -> Arc<dyn LocaleEngine> {
        Arc::new(Self)
    }
}

impl LocaleEngine for FixtureEngine {
    fn format_number_parts(
        &self,
        locale: &str,
        options: &NumberOptions,
        value: f64,
    ) -> Vec<NumberPart> {
        number::format_parts(locale_data(locale), options, value)
    }

    fn digit_glyphs(&self, locale: &str) -> [String; 10] {
        let d = locale_data(locale);
        std::array::from_fn(|i| d.digits[i].to_string())
    }

    fn format_date_parts(
        &self,
        locale: &str,
        options: &DateOptions,
        value: &NaiveDateTime,
    ) -> Vec<DatePart> {
        date::format_parts(locale_data(locale), options, value)
    }

    fn display_name(&self, locale: &str, kind: DisplayNameKind, code: &str) -> Option<String> {
        let primary = locale.split('-').next().unwrap_or(locale);
        data::display_name(primary, kind, code).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use specfmt_common::{DateStyle, NumberStyle};

    fn probe_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2008, 7, 31)
            .and_then(|d| d.and_hms_opt(15, 30, 45))
            .expect("valid date")
    }

    #[test]
    fn en_us_grouping_and_decimal() {
        let engine = FixtureEngine::new();
        let text = engine.format_number(
            "en-US",
            &NumberOptions {
                minimum_fraction_digits: Some(2),
                maximum_fraction_digits: Some(2),
                ..NumberOptions::default()
            },
            1234567.89,
        );
        assert_eq!(text, "1,234,567.89");
    }

    #[test]
    fn de_de_swaps_separators() {
        let engine = FixtureEngine::new();
        let text = engine.format_number(
            "de-DE",
            &NumberOptions {
                minimum_fraction_digits: Some(2),
                maximum_fraction_digits: Some(2),
                ..NumberOptions::default()
            },
            1234567.89,
        );
        assert_eq!(text, "1.234.567,89");
    }

    #[test]
    fn ar_eg_uses_arabic_indic_digits() {
        let engine = FixtureEngine::new();
        let text = engine.format_number(
            "ar-EG",
            &NumberOptions {
                minimum_fraction_digits: Some(2),
                maximum_fraction_digits: Some(2),
                ..NumberOptions::default()
            },
            1234567.89,
        );
        assert_eq!(text, "١٬٢٣٤٬٥٦٧٫٨٩");
    }

    #[test]
    fn percent_scales_by_one_hundred() {
        let engine = FixtureEngine::new();
        let text = engine.format_number(
            "en-US",
            &NumberOptions {
                style: NumberStyle::Percent,
                minimum_fraction_digits: Some(2),
                maximum_fraction_digits: Some(2),
                ..NumberOptions::default()
            },
            0.1234,
        );
        assert_eq!(text, "12.34%");
    }

    #[test]
    fn short_dates_follow_locale_field_order() {
        let engine = FixtureEngine::new();
        let options = DateOptions {
            date_style: Some(DateStyle::Short),
            ..DateOptions::default()
        };
        assert_eq!(engine.format_date("en-US", &options, &probe_date()), "7/31/2008");
        assert_eq!(engine.format_date("de-DE", &options, &probe_date()), "31.07.08");
        assert_eq!(engine.format_date("sv-SE", &options, &probe_date()), "2008-07-31");
    }

    #[test]
    fn full_date_with_time_uses_glue_words() {
        let engine = FixtureEngine::new();
        let options = DateOptions {
            date_style: Some(DateStyle::Full),
            time_style: Some(specfmt_common::TimeStyle::Short),
            ..DateOptions::default()
        };
        assert_eq!(
            engine.format_date("de-DE", &options, &probe_date()),
            "Donnerstag, 31. Juli 2008 um 15:30"
        );
        assert_eq!(
            engine.format_date("en-US", &options, &probe_date()),
            "Thursday, July 31, 2008 at 3:30 PM"
        );
    }
}
