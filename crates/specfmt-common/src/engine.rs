//! The locale engine contract.
//!
//! Everything locale-specific — digit glyphs, separator symbols, month and
//! weekday names, affix placement — comes from an implementation of
//! [`LocaleEngine`]. The rest of the stack treats the engine strictly as an
//! oracle: it formats representative values, decomposes them into tagged
//! parts, and reverse-engineers a parsing grammar from what it sees. The
//! trait is deliberately narrow so that any ICU-equivalent backend can be
//! dropped in.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::error::SpecifierError;

/// An ISO 4217 currency code: exactly three uppercase ASCII letters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    pub fn as_str(&self) -> &str {
        // Invariant: constructed only from uppercase ASCII.
        std::str::from_utf8(&self.0).expect("currency code is ASCII")
    }
}

impl FromStr for CurrencyCode {
    type Err = SpecifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() == 3 && bytes.iter().all(|b| b.is_ascii_uppercase()) {
            Ok(CurrencyCode([bytes[0], bytes[1], bytes[2]]))
        } else {
            Err(SpecifierError::InvalidCurrency {
                specifier: s.to_string(),
            })
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag for one segment of a formatted number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NumberPartKind {
    Literal,
    Integer,
    Fraction,
    Group,
    Decimal,
    ExponentSeparator,
    ExponentInteger,
    ExponentMinusSign,
    MinusSign,
    PlusSign,
    Currency,
    PercentSign,
    Nan,
    Infinity,
}

impl NumberPartKind {
    /// Whether this part belongs to the numeral itself, as opposed to the
    /// literal prefix/suffix text around it.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Integer
                | Self::Fraction
                | Self::Group
                | Self::Decimal
                | Self::ExponentSeparator
                | Self::ExponentInteger
                | Self::ExponentMinusSign
                | Self::Nan
                | Self::Infinity
        )
    }

    pub fn is_special_token(self) -> bool {
        matches!(self, Self::Nan | Self::Infinity)
    }
}

/// One tagged segment of a formatted number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPart {
    pub kind: NumberPartKind,
    pub text: String,
}

impl NumberPart {
    pub fn new(kind: NumberPartKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberStyle {
    #[default]
    Decimal,
    Percent,
    Currency,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberNotation {
    #[default]
    Standard,
    Scientific,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurrencySign {
    #[default]
    Standard,
    Accounting,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignDisplay {
    #[default]
    Auto,
    Always,
}

/// Resolved number formatting options, modeled on the option bag an
/// ICU-style engine accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberOptions {
    pub style: NumberStyle,
    pub notation: NumberNotation,
    pub currency: Option<CurrencyCode>,
    pub currency_sign: CurrencySign,
    pub sign_display: SignDisplay,
    pub use_grouping: bool,
    pub minimum_integer_digits: Option<u8>,
    pub minimum_fraction_digits: Option<u8>,
    pub maximum_fraction_digits: Option<u8>,
    pub maximum_significant_digits: Option<u8>,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            style: NumberStyle::Decimal,
            notation: NumberNotation::Standard,
            currency: None,
            currency_sign: CurrencySign::Standard,
            sign_display: SignDisplay::Auto,
            use_grouping: true,
            minimum_integer_digits: None,
            minimum_fraction_digits: None,
            maximum_fraction_digits: None,
            maximum_significant_digits: None,
        }
    }
}

/// Tag for one segment of a formatted date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DatePartKind {
    Literal,
    Era,
    Year,
    Month,
    Day,
    Weekday,
    Hour,
    Minute,
    Second,
    FractionalSecond,
    DayPeriod,
    TimeZoneName,
}

/// One tagged segment of a formatted date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePart {
    pub kind: DatePartKind,
    pub text: String,
}

impl DatePart {
    pub fn new(kind: DatePartKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateStyle {
    Short,
    Medium,
    Long,
    Full,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeStyle {
    Short,
    Medium,
    Long,
    Full,
}

/// Width of a numeric date field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericWidth {
    Numeric,
    TwoDigit,
}

/// Width of a named text field (weekday, day period, standalone names).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextWidth {
    Narrow,
    Short,
    Long,
}

/// Month rendering: numeric widths or names.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MonthStyle {
    Numeric,
    TwoDigit,
    Narrow,
    Short,
    Long,
}

/// Resolved date formatting options, modeled on the option bag an
/// ICU-style engine accepts. Either the style pair or the individual
/// field widths are set, not both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateOptions {
    pub date_style: Option<DateStyle>,
    pub time_style: Option<TimeStyle>,
    pub year: Option<NumericWidth>,
    pub month: Option<MonthStyle>,
    pub day: Option<NumericWidth>,
    pub weekday: Option<TextWidth>,
    pub hour: Option<NumericWidth>,
    pub minute: Option<NumericWidth>,
    pub second: Option<NumericWidth>,
    pub calendar: Option<String>,
    pub time_zone: Option<String>,
}

/// What kind of code a display-name lookup resolves.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DisplayNameKind {
    Language,
    Region,
}

/// An ICU-equivalent locale formatting backend.
///
/// Implementations must be deterministic for a fixed
/// (locale, options, value) triple; the parser derivation relies on it.
pub trait LocaleEngine: Send + Sync {
    /// Decompose a formatted number into tagged parts, in output order.
    fn format_number_parts(
        &self,
        locale: &str,
        options: &NumberOptions,
        value: f64,
    ) -> Vec<NumberPart>;

    /// The locale's rendering of the digits 0 through 9, in order.
    fn digit_glyphs(&self, locale: &str) -> [String; 10];

    /// Decompose a formatted date into tagged parts, in output order.
    /// The value is wall-clock time; any zone conversion happens before
    /// this call.
    fn format_date_parts(
        &self,
        locale: &str,
        options: &DateOptions,
        value: &NaiveDateTime,
    ) -> Vec<DatePart>;

    /// Localized display name of a language or region code, if the engine
    /// has one.
    fn display_name(&self, locale: &str, kind: DisplayNameKind, code: &str) -> Option<String>;

    /// Format a number to a plain string. The default concatenates
    /// [`LocaleEngine::format_number_parts`].
    fn format_number(&self, locale: &str, options: &NumberOptions, value: f64) -> String {
        self.format_number_parts(locale, options, value)
            .iter()
            .map(|p| p.text.as_str())
            .collect()
    }

    /// Format a date to a plain string. The default concatenates
    /// [`LocaleEngine::format_date_parts`].
    fn format_date(&self, locale: &str, options: &DateOptions, value: &NaiveDateTime) -> String {
        self.format_date_parts(locale, options, value)
            .iter()
            .map(|p| p.text.as_str())
            .collect()
    }
}
