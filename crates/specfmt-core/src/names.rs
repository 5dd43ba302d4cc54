//! Name and symbol lookups derived by probing the engine: month and
//! weekday names, language/region display names, and the locale's
//! time/decimal separators and signs. All cached on the context.

use std::sync::Arc;

use chrono::NaiveDate;

use specfmt_common::{
    BuildError, DateOptions, DatePartKind, DisplayNameKind, MonthStyle, NumberOptions,
    NumberPartKind, NumericWidth, SignDisplay, TextWidth,
};

use crate::context::FormatContext;

impl FormatContext {
    /// Localized month name. `month` is zero-based (0 = January).
    pub fn month_name(
        &self,
        locale: &str,
        month: usize,
        width: TextWidth,
        calendar: Option<&str>,
    ) -> Result<String, BuildError> {
        let key = format!("month/{locale}/{width:?}/{}", calendar.unwrap_or("gregory"));
        let names = if let Some(cached) = self.name_tables.get(&key) {
            cached.clone()
        } else {
            let built = Arc::new(self.probe_month_names(locale, width, calendar)?);
            self.name_tables.entry(key).or_insert(built).clone()
        };
        names.get(month).cloned().ok_or_else(|| BuildError::MissingField {
            locale: locale.to_string(),
            field: "month",
        })
    }

    /// Localized weekday name. `day` is zero-based (0 = Sunday).
    pub fn weekday_name(
        &self,
        locale: &str,
        day: usize,
        width: TextWidth,
    ) -> Result<String, BuildError> {
        let key = format!("weekday/{locale}/{width:?}");
        let names = if let Some(cached) = self.name_tables.get(&key) {
            cached.clone()
        } else {
            let built = Arc::new(self.probe_weekday_names(locale, width)?);
            self.name_tables.entry(key).or_insert(built).clone()
        };
        names.get(day).cloned().ok_or_else(|| BuildError::MissingField {
            locale: locale.to_string(),
            field: "weekday",
        })
    }

    /// Localized language name, or the code itself when the engine has
    /// no name for it.
    pub fn language_name(&self, locale: &str, code: &str) -> String {
        self.engine()
            .display_name(locale, DisplayNameKind::Language, code)
            .unwrap_or_else(|| code.to_string())
    }

    /// Localized region/country name, or the code itself when the engine
    /// has no name for it.
    pub fn region_name(&self, locale: &str, code: &str) -> String {
        self.engine()
            .display_name(locale, DisplayNameKind::Region, code)
            .unwrap_or_else(|| code.to_string())
    }

    /// The locale's time separator, probed from an hour:minute rendering.
    pub fn time_separator(&self, locale: &str) -> String {
        let options = DateOptions {
            hour: Some(NumericWidth::Numeric),
            minute: Some(NumericWidth::Numeric),
            ..DateOptions::default()
        };
        let probe = crate::date::fields::structure_probe();
        self.engine()
            .format_date_parts(locale, &options, &probe)
            .into_iter()
            .find(|p| p.kind == DatePartKind::Literal)
            .map(|p| p.text)
            .unwrap_or_else(|| ":".to_string())
    }

    /// The locale's decimal separator, probed from a fractional number.
    pub fn decimal_separator(&self, locale: &str) -> String {
        self.engine()
            .format_number_parts(locale, &NumberOptions::default(), 1.1)
            .into_iter()
            .find(|p| p.kind == NumberPartKind::Decimal)
            .map(|p| p.text)
            .unwrap_or_else(|| ".".to_string())
    }

    pub fn plus_sign(&self, locale: &str) -> String {
        self.probe_sign(locale, 1.0, NumberPartKind::PlusSign, "+")
    }

    pub fn minus_sign(&self, locale: &str) -> String {
        self.probe_sign(locale, -1.0, NumberPartKind::MinusSign, "-")
    }

    fn probe_sign(&self, locale: &str, value: f64, kind: NumberPartKind, fallback: &str) -> String {
        let options = NumberOptions {
            sign_display: SignDisplay::Always,
            ..NumberOptions::default()
        };
        self.engine()
            .format_number_parts(locale, &options, value)
            .into_iter()
            .find(|p| p.kind == kind)
            .map(|p| p.text)
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Twelve probes on the 21st of each month of 2007: a day on which
    /// month numbers coincide across the calendars the engine supports.
    fn probe_month_names(
        &self,
        locale: &str,
        width: TextWidth,
        calendar: Option<&str>,
    ) -> Result<Vec<String>, BuildError> {
        let options = DateOptions {
            month: Some(match width {
                TextWidth::Narrow => MonthStyle::Narrow,
                TextWidth::Short => MonthStyle::Short,
                TextWidth::Long => MonthStyle::Long,
            }),
            calendar: calendar.map(str::to_string),
            ..DateOptions::default()
        };
        (1..=12)
            .map(|month| {
                let probe = NaiveDate::from_ymd_opt(2007, month, 21)
                    .and_then(|d| d.and_hms_opt(12, 0, 0))
                    .expect("probe instant is a valid date");
                let token: String = self
                    .engine()
                    .format_date_parts(locale, &options, &probe)
                    .iter()
                    .filter(|p| p.kind == DatePartKind::Month)
                    .map(|p| p.text.as_str())
                    .collect();
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
        &self,
        locale: &str,
        width: TextWidth,
    ) -> Result<Vec<String>, BuildError> {
        let options = DateOptions {
            weekday: Some(width),
            ..DateOptions::default()
        };
        (0..7)
            .map(|offset| {
                let probe = NaiveDate::from_ymd_opt(2000, 1, 2 + offset)
                    .and_then(|d| d.and_hms_opt(12, 0, 0))
                    .expect("probe instant is a valid date");
                let token: String = self
                    .engine()
                    .format_date_parts(locale, &options, &probe)
                    .iter()
                    .filter(|p| p.kind == DatePartKind::Weekday)
                    .map(|p| p.text.as_str())
                    .collect();
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
}
