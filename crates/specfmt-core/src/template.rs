//! `.NET string.Format`-style template interpolation.
//!
//! Placeholders are `{index}` or `{index:specifier}`. Each argument is a
//! tagged [`FormatValue`]; the tag picks the formatter, the specifier (if
//! any) configures it. Missing arguments render as empty text; a
//! non-numeric index or a bad specifier is a hard error.

use once_cell::sync::Lazy;
use regex::Regex;

use specfmt_common::{FormatError, FormatValue, SpecifierError};

use crate::context::FormatContext;

static PLACEHOLDER_RX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^}:]+)(?::([^}]+))?\}").expect("static regex"));

pub(crate) fn format_template(
    ctx: &FormatContext,
    locale: &str,
    template: &str,
    args: &[FormatValue],
) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0usize;
    for caps in PLACEHOLDER_RX.captures_iter(template) {
        let whole = caps.get(0).expect("match has a whole-capture");
        out.push_str(&template[last..whole.start()]);

        let key = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let specifier = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        let index: usize = key.trim().parse().map_err(|_| {
            FormatError::Specifier(SpecifierError::InvalidSpecifier {
                specifier: key.to_string(),
            })
        })?;
        if let Some(value) = args.get(index) {
            out.push_str(&format_value(ctx, locale, value, specifier)?);
        }

        last = whole.end();
    }
    out.push_str(&template[last..]);
    Ok(out)
}

fn format_value(
    ctx: &FormatContext,
    locale: &str,
    value: &FormatValue,
    specifier: &str,
) -> Result<String, FormatError> {
    match value {
        FormatValue::Text(text) => Ok(text.clone()),
        FormatValue::Number(n) => Ok(ctx.number_formatter(locale, specifier)?.format(*n)?),
        FormatValue::Bool(b) => Ok(ctx.boolean_formatter(locale).format(*b).to_string()),
        FormatValue::Date(d) => Ok(ctx.date_formatter(locale, specifier, None)?.format(d)),
    }
}
