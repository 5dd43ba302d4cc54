//! Number rendering for the fixture engine: decimal/percent/currency
//! styles, standard and scientific notation, grouping, significant-digit
//! and fraction-digit rounding, locale digit glyphs.

use specfmt_common::{
    CurrencySign, NumberOptions, NumberPart, NumberPartKind, NumberStyle, SignDisplay,
};

use crate::data::{LocaleData, currency_symbol};

pub(crate) fn format_parts(d: &LocaleData, opts: &NumberOptions, value: f64) -> Vec<NumberPart> {
    let negative = value < 0.0;

    let core = if value.is_nan() {
        vec![NumberPart::new(NumberPartKind::Nan, d.nan)]
    } else if value.is_infinite() {
        vec![NumberPart::new(NumberPartKind::Infinity, d.infinity)]
    } else {
        let mut magnitude = value.abs();
        if opts.style == NumberStyle::Percent {
            magnitude *= 100.0;
        }
        match opts.notation {
            specfmt_common::NumberNotation::Standard => standard_parts(d, opts, magnitude),
            specfmt_common::NumberNotation::Scientific => scientific_parts(d, opts, magnitude),
        }
    };

    wrap_parts(d, opts, negative, core)
}

fn wrap_parts(
    d: &LocaleData,
    opts: &NumberOptions,
    negative: bool,
    core: Vec<NumberPart>,
) -> Vec<NumberPart> {
    let mut parts = Vec::with_capacity(core.len() + 4);
    match opts.style {
        NumberStyle::Decimal => {
            push_sign(d, opts, negative, &mut parts);
            parts.extend(core);
        }
        NumberStyle::Percent => {
            push_sign(d, opts, negative, &mut parts);
            parts.extend(core);
            parts.push(NumberPart::new(NumberPartKind::PercentSign, d.percent_suffix));
        }
        NumberStyle::Currency => {
            let code = opts.currency.map(|c| c.to_string());
            let symbol = code
                .as_deref()
                .and_then(currency_symbol)
                .map(str::to_string)
                .or(code)
                .unwrap_or_else(|| "¤".to_string());

            let parens =
                negative && opts.currency_sign == CurrencySign::Accounting && d.accounting_parens;
            if parens {
                parts.push(NumberPart::new(NumberPartKind::Literal, "("));
            } else {
                push_sign(d, opts, negative, &mut parts);
            }
            if d.currency_prefixed {
                parts.push(NumberPart::new(
                    NumberPartKind::Currency,
                    format!("{symbol}{}", d.currency_gap),
                ));
                parts.extend(core);
            } else {
                parts.extend(core);
                parts.push(NumberPart::new(
                    NumberPartKind::Currency,
                    format!("{}{symbol}", d.currency_gap),
                ));
            }
            if parens {
                parts.push(NumberPart::new(NumberPartKind::Literal, ")"));
            }
        }
    }
    parts
}

fn push_sign(d: &LocaleData, opts: &NumberOptions, negative: bool, parts: &mut Vec<NumberPart>) {
    if negative {
        parts.push(NumberPart::new(NumberPartKind::MinusSign, d.minus));
    } else if opts.sign_display == SignDisplay::Always {
        parts.push(NumberPart::new(NumberPartKind::PlusSign, d.plus));
    }
}

fn standard_parts(d: &LocaleData, opts: &NumberOptions, v: f64) -> Vec<NumberPart> {
    let (int_digits, frac_digits) = decimal_digits(opts, v);
    let mut parts = Vec::new();

    if opts.use_grouping && int_digits.len() > 3 {
        let lead = (int_digits.len() - 1) % 3 + 1;
        parts.push(NumberPart::new(
            NumberPartKind::Integer,
            map_digits(d, &int_digits[..lead]),
        ));
        let mut i = lead;
        while i < int_digits.len() {
            parts.push(NumberPart::new(NumberPartKind::Group, d.group));
            parts.push(NumberPart::new(
                NumberPartKind::Integer,
                map_digits(d, &int_digits[i..i + 3]),
            ));
            i += 3;
        }
    } else {
        parts.push(NumberPart::new(NumberPartKind::Integer, map_digits(d, &int_digits)));
    }

    if !frac_digits.is_empty() {
        parts.push(NumberPart::new(NumberPartKind::Decimal, d.decimal));
        parts.push(NumberPart::new(
            NumberPartKind::Fraction,
            map_digits(d, &frac_digits),
        ));
    }
    parts
}

fn scientific_parts(d: &LocaleData, opts: &NumberOptions, v: f64) -> Vec<NumberPart> {
    let min_frac = opts.minimum_fraction_digits.unwrap_or(0) as usize;
    let max_frac = match opts.maximum_significant_digits {
        Some(sig) => (sig as usize).saturating_sub(1).max(min_frac),
        None => (opts.maximum_fraction_digits.unwrap_or(6) as usize).max(min_frac),
    };

    let (mut mantissa, mut exp) = split_scientific(v);
    let mut text = mantissa_text(mantissa, max_frac);
    // Rounding can carry the mantissa to 10.x; renormalize.
    while text.split('.').next().map(str::len).unwrap_or(0) > 1 {
        mantissa /= 10.0;
        exp += 1;
        text = mantissa_text(mantissa, max_frac);
    }

    let (int_digits, frac_raw) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (text, String::new()),
    };
    let frac_digits = trim_fraction(frac_raw, min_frac);

    let mut parts = vec![NumberPart::new(NumberPartKind::Integer, map_digits(d, &int_digits))];
    if !frac_digits.is_empty() {
        parts.push(NumberPart::new(NumberPartKind::Decimal, d.decimal));
        parts.push(NumberPart::new(
            NumberPartKind::Fraction,
            map_digits(d, &frac_digits),
        ));
    }
    parts.push(NumberPart::new(NumberPartKind::ExponentSeparator, d.exponent));
    if exp < 0 {
        parts.push(NumberPart::new(NumberPartKind::ExponentMinusSign, d.exponent_minus));
    }
    parts.push(NumberPart::new(
        NumberPartKind::ExponentInteger,
        map_digits(d, &exp.abs().to_string()),
    ));
    parts
}

fn split_scientific(v: f64) -> (f64, i32) {
    if v == 0.0 {
        return (0.0, 0);
    }
    let mut exp = v.log10().floor() as i32;
    let mut mantissa = v / 10f64.powi(exp);
    if mantissa >= 10.0 {
        mantissa /= 10.0;
        exp += 1;
    }
    if mantissa < 1.0 {
        mantissa *= 10.0;
        exp -= 1;
    }
    (mantissa, exp)
}

fn mantissa_text(mantissa: f64, max_frac: usize) -> String {
    if max_frac >= 18 {
        // Effectively unbounded: shortest round-trip rendering.
        format!("{mantissa}")
    } else {
        format!("{mantissa:.max_frac$}")
    }
}

/// Integer and fraction digit strings after rounding, before glyph
/// mapping and grouping.
fn decimal_digits(opts: &NumberOptions, v: f64) -> (String, String) {
    let min_frac = opts.minimum_fraction_digits.unwrap_or(0) as usize;

    let (int_raw, frac_raw) = if let Some(sig) = opts.maximum_significant_digits {
        significant_digits(v, sig as usize)
    } else {
        let style_default = match opts.style {
            NumberStyle::Currency => 2,
            NumberStyle::Percent => 0,
            NumberStyle::Decimal => 3,
        };
        let max_frac = (opts.maximum_fraction_digits.map(|m| m as usize))
            .unwrap_or(style_default)
            .max(min_frac);
        let text = if max_frac >= 18 {
            // f64 Display is the shortest round-trip rendering and never
            // uses exponent notation.
            format!("{v}")
        } else {
            format!("{v:.max_frac$}")
        };
        match text.split_once('.') {
            Some((i, f)) => (i.to_string(), f.to_string()),
            None => (text, String::new()),
        }
    };

    let frac = trim_fraction(frac_raw, min_frac);
    let int_digits = pad_integer(int_raw, opts.minimum_integer_digits);
    (int_digits, frac)
}

/// Round to `sig` significant digits and expand back to plain notation.
fn significant_digits(v: f64, sig: usize) -> (String, String) {
    if v == 0.0 {
        return ("0".to_string(), String::new());
    }
    let sig = sig.max(1);
    let text = format!("{:.*e}", sig - 1, v);
    let (mantissa, exp_text) = match text.split_once('e') {
        Some(pair) => pair,
        None => (text.as_str(), "0"),
    };
    let exp: i32 = exp_text.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();

    if exp >= digits.len() as i32 - 1 {
        let mut int = digits;
        int.push_str(&"0".repeat((exp + 1) as usize - int.len()));
        (int, String::new())
    } else if exp >= 0 {
        let split = (exp + 1) as usize;
        let frac = digits[split..].trim_end_matches('0').to_string();
        (digits[..split].to_string(), frac)
    } else {
        let mut frac = "0".repeat((-exp - 1) as usize);
        frac.push_str(&digits);
        ("0".to_string(), frac.trim_end_matches('0').to_string())
    }
}

fn trim_fraction(mut frac: String, min_frac: usize) -> String {
    while frac.len() > min_frac && frac.ends_with('0') {
        frac.pop();
    }
    frac
}

fn pad_integer(mut int_digits: String, minimum: Option<u8>) -> String {
    if let Some(min) = minimum {
        let min = min as usize;
        if int_digits.len() < min {
            let mut padded = "0".repeat(min - int_digits.len());
            padded.push_str(&int_digits);
            int_digits = padded;
        }
    }
    int_digits
}

pub(crate) fn map_digits(d: &LocaleData, ascii: &str) -> String {
    ascii
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(n) => d.digits[n as usize].to_string(),
            None => c.to_string(),
        })
        .collect()
}
