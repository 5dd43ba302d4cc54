//! Duration formatting: a `[-][d:]h:mm[:ss[.FFF]]` pattern mini-language.
//!
//! Pattern tokens: `d`/`h`/`m`/`s` runs select a field and its minimum
//! width; `f` renders that many fractional-second digits, `F` the same
//! with trailing zeros trimmed; `[...]` is an optional sub-pattern emitted
//! only when some field inside rendered non-zero; `'...'`/`"..."` quote
//! literal text and `\` escapes one character; `+`/`-` emit the locale
//! sign; `:` and `.` emit the locale time/decimal separators. Malformed
//! patterns fail at compile time.

use std::sync::Arc;

use specfmt_common::{BuildError, FormatError};

use crate::context::FormatContext;
use crate::number::NumberFormatter;

const MS_PER_DAY: f64 = 86_400_000.0;
const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_MINUTE: f64 = 60_000.0;

/// Named presets; anything else is treated as a pattern itself.
pub(crate) fn resolve_pattern(format: Option<&str>) -> &str {
    match format {
        None | Some("short") => "[-][d:]h:mm[:ss[.FFF]]",
        Some("constant") => "[-]d:hh:mm:ss.fff",
        Some("long") => "[-][d:]hh:mm:ss[.fff]",
        Some("racing") => "[-][d:][h:]mm:ss.fff",
        Some(other) => other,
    }
}

/// A compiled duration formatter: `f64 milliseconds -> text`.
/// NaN renders as the empty string; infinities are caller misuse.
pub struct DurationFormatter {
    parts: Vec<DurationPart>,
}

struct DurationFields {
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
    milliseconds: u64,
    negative: bool,
}

enum DurationPart {
    Days(Arc<NumberFormatter>),
    Hours(Arc<NumberFormatter>),
    Minutes(Arc<NumberFormatter>),
    Seconds(Arc<NumberFormatter>),
    /// `f`: fixed count of fractional-second digits.
    Fraction { scale: u32, fmt: Arc<NumberFormatter> },
    /// `F`: like `f` with trailing zero glyphs trimmed.
    FractionTrimmed {
        scale: u32,
        fmt: Arc<NumberFormatter>,
        zero: String,
    },
    Literal(String),
    Sign { plus: String, minus: String },
    Optional(Vec<DurationPart>),
}

impl DurationFormatter {
    pub(crate) fn compile(
        ctx: &FormatContext,
        locale: &str,
        pattern: &str,
    ) -> Result<Self, BuildError> {
        let parts = compile_parts(ctx, locale, pattern)?;
        Ok(Self { parts })
    }

    pub fn format(&self, duration_ms: f64) -> Result<String, FormatError> {
        if duration_ms.is_nan() {
            return Ok(String::new());
        }
        if !duration_ms.is_finite() {
            return Err(FormatError::NonFiniteDuration);
        }

        let negative = duration_ms < 0.0;
        let mut ms = duration_ms.abs();
        let days = (ms / MS_PER_DAY).floor();
        ms %= MS_PER_DAY;
        let hours = (ms / MS_PER_HOUR).floor();
        ms %= MS_PER_HOUR;
        let minutes = (ms / MS_PER_MINUTE).floor();
        ms %= MS_PER_MINUTE;
        let seconds = (ms / 1000.0).floor();
        let milliseconds = (ms % 1000.0).round();

        let fields = DurationFields {
            days: days as u64,
            hours: hours as u64,
            minutes: minutes as u64,
            seconds: seconds as u64,
            milliseconds: milliseconds as u64,
            negative,
        };
        let (_, text) = render_parts(&self.parts, &fields)?;
        Ok(text)
    }
}

fn render_parts(
    parts: &[DurationPart],
    fields: &DurationFields,
) -> Result<(bool, String), FormatError> {
    let mut has_value = false;
    let mut out = String::new();
    for part in parts {
        let (has, text) = part.render(fields)?;
        has_value |= has;
        out.push_str(&text);
    }
    Ok((has_value, out))
}

impl DurationPart {
    fn render(&self, fields: &DurationFields) -> Result<(bool, String), FormatError> {
        match self {
            Self::Days(fmt) => Ok((fields.days != 0, fmt.format(fields.days as f64)?)),
            Self::Hours(fmt) => Ok((fields.hours != 0, fmt.format(fields.hours as f64)?)),
            Self::Minutes(fmt) => Ok((fields.minutes != 0, fmt.format(fields.minutes as f64)?)),
            Self::Seconds(fmt) => Ok((fields.seconds != 0, fmt.format(fields.seconds as f64)?)),
            Self::Fraction { scale, fmt } => {
                let scaled = scaled_fraction(fields.milliseconds, *scale);
                Ok((scaled != 0, fmt.format(scaled as f64)?))
            }
            Self::FractionTrimmed { scale, fmt, zero } => {
                let scaled = scaled_fraction(fields.milliseconds, *scale);
                let mut text = fmt.format(scaled as f64)?;
                while let Some(stripped) = text.strip_suffix(zero.as_str()) {
                    text = stripped.to_string();
                }
                Ok((!text.is_empty(), text))
            }
            Self::Literal(text) => Ok((false, text.clone())),
            Self::Sign { plus, minus } => Ok((
                fields.negative,
                if fields.negative {
                    minus.clone()
                } else {
                    plus.clone()
                },
            )),
            Self::Optional(parts) => {
                let (has, text) = render_parts(parts, fields)?;
                Ok(if has { (true, text) } else { (false, String::new()) })
            }
        }
    }
}

fn scaled_fraction(milliseconds: u64, scale: u32) -> u64 {
    let pow = 10u64.pow(scale);
    ((milliseconds as f64 / 1000.0) * pow as f64).round() as u64
}

fn count_repeat(pattern: &str, index: usize) -> usize {
    let bytes = pattern.as_bytes();
    let lead = bytes[index];
    bytes[index..].iter().take_while(|&&b| b == lead).count()
}

fn find_quote_end(pattern: &str, index: usize) -> Option<usize> {
    let quote = pattern.as_bytes()[index];
    pattern.as_bytes()[index + 1..]
        .iter()
        .position(|&b| b == quote)
        .map(|offset| index + 1 + offset + 1)
}

fn find_bracket_end(pattern: &str, index: usize) -> Option<usize> {
    let mut nesting = 1usize;
    for (offset, byte) in pattern.as_bytes()[index + 1..].iter().enumerate() {
        match byte {
            b'[' => nesting += 1,
            b']' => {
                nesting -= 1;
                if nesting == 0 {
                    return Some(index + 1 + offset + 1);
                }
            }
            _ => {}
        }
    }
    None
}

fn compile_parts(
    ctx: &FormatContext,
    locale: &str,
    pattern: &str,
) -> Result<Vec<DurationPart>, BuildError> {
    let bad = |reason: &str| BuildError::InvalidDurationPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    };
    let field_formatter = |width: usize| {
        ctx.number_formatter(locale, &format!("d{width}"))
            .map_err(BuildError::from)
    };

    let mut parts = Vec::new();
    let mut i = 0usize;
    while i < pattern.len() {
        let c = pattern.as_bytes()[i];
        let token_len = match c {
            b'd' => {
                let len = count_repeat(pattern, i);
                if len > 8 {
                    return Err(bad("day field is at most 8 digits wide"));
                }
                parts.push(DurationPart::Days(field_formatter(len)?));
                len
            }
            b'h' => {
                let len = count_repeat(pattern, i);
                if len > 2 {
                    return Err(bad("hour field is at most 2 digits wide"));
                }
                parts.push(DurationPart::Hours(field_formatter(len)?));
                len
            }
            b'm' => {
                let len = count_repeat(pattern, i);
                if len > 2 {
                    return Err(bad("minute field is at most 2 digits wide"));
                }
                parts.push(DurationPart::Minutes(field_formatter(len)?));
                len
            }
            b's' => {
                let len = count_repeat(pattern, i);
                if len > 2 {
                    return Err(bad("second field is at most 2 digits wide"));
                }
                parts.push(DurationPart::Seconds(field_formatter(len)?));
                len
            }
            b'f' => {
                let len = count_repeat(pattern, i);
                if len > 3 {
                    return Err(bad("fraction field is at most 3 digits wide"));
                }
                parts.push(DurationPart::Fraction {
                    scale: len as u32,
                    fmt: field_formatter(len)?,
                });
                len
            }
            b'F' => {
                let len = count_repeat(pattern, i);
                if len > 3 {
                    return Err(bad("fraction field is at most 3 digits wide"));
                }
                parts.push(DurationPart::FractionTrimmed {
                    scale: len as u32,
                    fmt: field_formatter(len)?,
                    zero: ctx.digit_glyphs(locale)[0].clone(),
                });
                len
            }
            b'\'' | b'"' => {
                let end = find_quote_end(pattern, i).ok_or_else(|| bad("unterminated quote"))?;
                parts.push(DurationPart::Literal(pattern[i + 1..end - 1].to_string()));
                end - i
            }
            b'\\' => {
                let escaped = pattern[i + 1..]
                    .chars()
                    .next()
                    .ok_or_else(|| bad("dangling escape"))?;
                parts.push(DurationPart::Literal(escaped.to_string()));
                1 + escaped.len_utf8()
            }
            b'[' => {
                let end = find_bracket_end(pattern, i).ok_or_else(|| bad("unmatched bracket"))?;
                let inner = compile_parts(ctx, locale, &pattern[i + 1..end - 1])?;
                parts.push(DurationPart::Optional(inner));
                end - i
            }
            b'+' | b'-' => {
                parts.push(DurationPart::Sign {
                    plus: ctx.plus_sign(locale),
                    minus: ctx.minus_sign(locale),
                });
                1
            }
            b':' => {
                parts.push(DurationPart::Literal(ctx.time_separator(locale)));
                1
            }
            b'.' => {
                parts.push(DurationPart::Literal(ctx.decimal_separator(locale)));
                1
            }
            _ => return Err(bad("unexpected character")),
        };
        i += token_len;
    }
    Ok(parts)
}
