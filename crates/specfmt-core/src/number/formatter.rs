//! Specifier-driven number formatting.
//!
//! Formatting is a thin delegation to the locale engine; the work here is
//! the family dispatch and the call-time domain checks. Integer-only
//! families reject fractional input, and the fixed-width binary/hex
//! encodings reject values outside their representable range — both are
//! caller misuse, reported as hard errors rather than mangled output.

use std::sync::Arc;

use specfmt_common::{FormatError, LocaleEngine, NumberOptions};

/// A constructed formatting function: `f64 -> Result<String, FormatError>`.
pub struct NumberFormatter {
    kind: FormatterKind,
}

enum FormatterKind {
    Engine {
        engine: Arc<dyn LocaleEngine>,
        locale: String,
        options: NumberOptions,
        integer_only: bool,
    },
    /// The `g/G` family renders both ways and keeps the shorter text.
    General {
        engine: Arc<dyn LocaleEngine>,
        locale: String,
        fixed: NumberOptions,
        scientific: NumberOptions,
    },
    Binary {
        width: Option<u8>,
    },
    Hex {
        upper: bool,
        width: Option<u8>,
    },
    RoundTrip,
}

impl NumberFormatter {
    pub(crate) fn engine_backed(
        engine: Arc<dyn LocaleEngine>,
        locale: &str,
        options: NumberOptions,
        integer_only: bool,
    ) -> Self {
        Self {
            kind: FormatterKind::Engine {
                engine,
                locale: locale.to_string(),
                options,
                integer_only,
            },
        }
    }

    pub(crate) fn general(
        engine: Arc<dyn LocaleEngine>,
        locale: &str,
        fixed: NumberOptions,
        scientific: NumberOptions,
    ) -> Self {
        Self {
            kind: FormatterKind::General {
                engine,
                locale: locale.to_string(),
                fixed,
                scientific,
            },
        }
    }

    pub(crate) fn binary(width: Option<u8>) -> Self {
        Self {
            kind: FormatterKind::Binary { width },
        }
    }

    pub(crate) fn hex(upper: bool, width: Option<u8>) -> Self {
        Self {
            kind: FormatterKind::Hex { upper, width },
        }
    }

    pub(crate) fn round_trip() -> Self {
        Self {
            kind: FormatterKind::RoundTrip,
        }
    }

    pub fn format(&self, value: f64) -> Result<String, FormatError> {
        match &self.kind {
            FormatterKind::Engine {
                engine,
                locale,
                options,
                integer_only,
            } => {
                if *integer_only && value.is_finite() && value.fract() != 0.0 {
                    return Err(FormatError::NotAnInteger { value });
                }
                Ok(engine.format_number(locale, options, value))
            }
            FormatterKind::General {
                engine,
                locale,
                fixed,
                scientific,
            } => {
                let plain = engine.format_number(locale, fixed, value);
                let exp = engine.format_number(locale, scientific, value);
                Ok(if plain.chars().count() <= exp.chars().count() {
                    plain
                } else {
                    exp
                })
            }
            FormatterKind::Binary { width } => {
                let n = to_unsigned(value, 'b')?;
                Ok(pad_left(format!("{n:b}"), *width))
            }
            FormatterKind::Hex { upper, width } => {
                let n = to_unsigned(value, 'x')?;
                let text = if *upper {
                    format!("{n:X}")
                } else {
                    format!("{n:x}")
                };
                Ok(pad_left(text, *width))
            }
            FormatterKind::RoundTrip => Ok(value.to_string()),
        }
    }
}

fn to_unsigned(value: f64, family: char) -> Result<u64, FormatError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(FormatError::NotAnInteger { value });
    }
    if value < 0.0 || value > u64::MAX as f64 {
        return Err(FormatError::OutOfRange { value, family });
    }
    Ok(value as u64)
}

fn pad_left(text: String, width: Option<u8>) -> String {
    match width {
        Some(w) if text.len() < w as usize => {
            let mut padded = "0".repeat(w as usize - text.len());
            padded.push_str(&text);
            padded
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_and_hex_pad_to_width() {
        assert_eq!(NumberFormatter::binary(None).format(123.0).ok(), Some("1111011".into()));
        assert_eq!(
            NumberFormatter::binary(Some(10)).format(123.0).ok(),
            Some("0001111011".into())
        );
        assert_eq!(NumberFormatter::hex(true, None).format(26.0).ok(), Some("1A".into()));
        assert_eq!(
            NumberFormatter::hex(false, Some(4)).format(26.0).ok(),
            Some("001a".into())
        );
    }

    #[test]
    fn fixed_width_families_reject_out_of_domain_values() {
        assert!(matches!(
            NumberFormatter::binary(None).format(1.5),
            Err(FormatError::NotAnInteger { .. })
        ));
        assert!(matches!(
            NumberFormatter::hex(false, None).format(-1.0),
            Err(FormatError::OutOfRange { .. })
        ));
    }

    #[test]
    fn round_trip_renders_shortest_form() {
        assert_eq!(NumberFormatter::round_trip().format(12.25).ok(), Some("12.25".into()));
    }
}
