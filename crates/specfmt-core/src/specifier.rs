//! Specifier-string grammar.
//!
//! A specifier is a short code selecting a format/parse family and an
//! optional precision: `n2`, `cUSD`, `d6`, `X`. The first character picks
//! the family; the currency family carries exactly three uppercase letters
//! after it; any remaining characters are a non-negative precision.
//! Malformed specifiers fail here, at construction time, never at
//! parse/format time.

use specfmt_common::{
    CurrencyCode, CurrencySign, DateOptions, DateStyle, MonthStyle, NumberNotation, NumberOptions,
    NumberStyle, NumericWidth, SpecifierError, TimeStyle,
};

const NUMBER_FAMILIES: &str = "dDeEfFnNgGpPcCbBxXrR";
const NUMBER_LOCALE_INDEPENDENT: &str = "bBxXrR";
const DATE_FAMILIES: &str = "dDfFgGmMtTUY";
const DATE_LOCALE_INDEPENDENT: &str = "oOrRsSu";
const MAX_PRECISION: u32 = 100;

/// Parsed number specifier: family letter, optional currency code,
/// optional precision, and the cache key the built parser/formatter is
/// stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberSpecifier {
    pub family: char,
    pub currency: Option<CurrencyCode>,
    pub precision: Option<u8>,
    pub locale_independent: bool,
    pub key: String,
}

impl NumberSpecifier {
    pub fn parse(specifier: &str, locale: &str) -> Result<Self, SpecifierError> {
        let invalid = || SpecifierError::InvalidSpecifier {
            specifier: specifier.to_string(),
        };
        let family = specifier.chars().next().ok_or_else(invalid)?;
        if !NUMBER_FAMILIES.contains(family) {
            return Err(invalid());
        }
        let mut rest = &specifier[family.len_utf8()..];

        let currency = if matches!(family, 'c' | 'C') {
            let code = rest.get(..3).ok_or_else(|| SpecifierError::InvalidCurrency {
                specifier: specifier.to_string(),
            })?;
            let code: CurrencyCode = code.parse().map_err(|_| SpecifierError::InvalidCurrency {
                specifier: specifier.to_string(),
            })?;
            rest = &rest[3..];
            Some(code)
        } else {
            None
        };

        let precision = if rest.is_empty() {
            None
        } else {
            let digits: u32 = rest.parse().map_err(|_| invalid())?;
            if digits > MAX_PRECISION || matches!(family, 'r' | 'R') {
                return Err(invalid());
            }
            Some(digits as u8)
        };

        let locale_independent = NUMBER_LOCALE_INDEPENDENT.contains(family);
        // Locale-independent keys fold case, except that upper-hex must
        // stay distinct from lower-hex.
        let key = if locale_independent {
            if family == 'X' {
                specifier.to_string()
            } else {
                specifier.to_lowercase()
            }
        } else {
            format!("{locale}/{}", specifier.to_lowercase())
        };

        Ok(Self {
            family,
            currency,
            precision,
            locale_independent,
            key,
        })
    }

    /// Engine option bag for the locale-dependent families. The `g/G`
    /// family is composed from two option bags instead; see
    /// [`NumberSpecifier::general_options`].
    pub(crate) fn engine_options(&self) -> NumberOptions {
        let p = self.precision;
        match self.family.to_ascii_lowercase() {
            'c' => NumberOptions {
                style: NumberStyle::Currency,
                currency_sign: CurrencySign::Accounting,
                currency: self.currency,
                minimum_fraction_digits: p,
                maximum_fraction_digits: p,
                ..NumberOptions::default()
            },
            'd' => NumberOptions {
                use_grouping: false,
                minimum_integer_digits: p,
                minimum_fraction_digits: Some(0),
                maximum_fraction_digits: Some(0),
                ..NumberOptions::default()
            },
            'e' => NumberOptions {
                notation: NumberNotation::Scientific,
                use_grouping: false,
                minimum_fraction_digits: p,
                maximum_fraction_digits: Some(p.unwrap_or(6)),
                ..NumberOptions::default()
            },
            'f' => NumberOptions {
                use_grouping: false,
                minimum_fraction_digits: Some(p.unwrap_or(2)),
                maximum_fraction_digits: Some(p.unwrap_or(2)),
                ..NumberOptions::default()
            },
            'n' => NumberOptions {
                use_grouping: true,
                minimum_fraction_digits: p,
                maximum_fraction_digits: p,
                ..NumberOptions::default()
            },
            'p' => NumberOptions {
                style: NumberStyle::Percent,
                use_grouping: true,
                minimum_fraction_digits: Some(p.unwrap_or(2)),
                maximum_fraction_digits: Some(p.unwrap_or(2)),
                ..NumberOptions::default()
            },
            _ => NumberOptions::default(),
        }
    }

    /// The fixed/scientific option pair the `g/G` family is built from.
    pub(crate) fn general_options(&self) -> (NumberOptions, NumberOptions) {
        let fixed = NumberOptions {
            use_grouping: false,
            maximum_significant_digits: self.precision,
            maximum_fraction_digits: Some(100),
            ..NumberOptions::default()
        };
        let scientific = NumberOptions {
            notation: NumberNotation::Scientific,
            ..fixed.clone()
        };
        (fixed, scientific)
    }
}

/// Parsed date specifier. Date families carry no precision; cache keys
/// preserve case (`d` and `D` are different formats) and embed the time
/// zone when one is supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateSpecifier {
    pub family: char,
    pub locale_independent: bool,
    pub key: String,
}

impl DateSpecifier {
    pub fn parse(
        specifier: &str,
        locale: &str,
        time_zone: Option<&str>,
    ) -> Result<Self, SpecifierError> {
        let invalid = || SpecifierError::InvalidSpecifier {
            specifier: specifier.to_string(),
        };
        let mut chars = specifier.chars();
        let family = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }

        if DATE_LOCALE_INDEPENDENT.contains(family) {
            return Ok(Self {
                family: family.to_ascii_lowercase(),
                locale_independent: true,
                key: family.to_ascii_lowercase().to_string(),
            });
        }
        if !DATE_FAMILIES.contains(family) {
            return Err(invalid());
        }
        let key = match time_zone {
            Some(tz) => format!("{locale}/{family}/{tz}"),
            None => format!("{locale}/{family}"),
        };
        Ok(Self {
            family,
            locale_independent: false,
            key,
        })
    }

    pub(crate) fn engine_options(&self) -> DateOptions {
        match self.family {
            'd' => DateOptions {
                date_style: Some(DateStyle::Short),
                ..DateOptions::default()
            },
            'D' => DateOptions {
                date_style: Some(DateStyle::Full),
                ..DateOptions::default()
            },
            'f' => DateOptions {
                date_style: Some(DateStyle::Full),
                time_style: Some(TimeStyle::Short),
                ..DateOptions::default()
            },
            'F' | 'U' => DateOptions {
                date_style: Some(DateStyle::Full),
                time_style: Some(TimeStyle::Medium),
                ..DateOptions::default()
            },
            'g' => DateOptions {
                date_style: Some(DateStyle::Short),
                time_style: Some(TimeStyle::Short),
                ..DateOptions::default()
            },
            'G' => DateOptions {
                date_style: Some(DateStyle::Short),
                time_style: Some(TimeStyle::Medium),
                ..DateOptions::default()
            },
            'M' | 'm' => DateOptions {
                month: Some(MonthStyle::Long),
                day: Some(NumericWidth::Numeric),
                ..DateOptions::default()
            },
            'T' => DateOptions {
                time_style: Some(TimeStyle::Medium),
                ..DateOptions::default()
            },
            't' => DateOptions {
                time_style: Some(TimeStyle::Short),
                ..DateOptions::default()
            },
            // 'Y'
            _ => DateOptions {
                year: Some(NumericWidth::Numeric),
                month: Some(MonthStyle::Long),
                ..DateOptions::default()
            },
        }
    }
}
