//! The number parsing state machine.
//!
//! A parser holds the nine derived rules for its configuration and tries
//! them in derivation order against loosely-normalized input. The first
//! rule whose prefix, suffix and digit grammar all succeed wins; this is a
//! fixed policy, so ambiguous inputs (a plain decimal is also a degenerate
//! scientific string) resolve deterministically by probe-category
//! priority.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use specfmt_common::{LocaleEngine, NumberOptions};

use crate::normalize::{digit_at, loose_normalize, symbol_at};
use crate::number::rules::{Rule, derive_rules};

static BINARY_RX: Lazy<Regex> = Lazy::new(|| Regex::new("^[01]+$").expect("static regex"));
static HEX_RX: Lazy<Regex> = Lazy::new(|| Regex::new("^[0-9A-Fa-f]+$").expect("static regex"));
static ROUND_TRIP_RX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?\s*$").expect("static regex")
});

/// A constructed parsing function: `&str -> Option<f64>`. Parse failures
/// are `None`, never errors.
pub struct NumberParser {
    kind: ParserKind,
}

enum ParserKind {
    /// Rules derived by probing the engine for one (locale, options) pair.
    Derived {
        rules: SmallVec<[Rule; 9]>,
        digits: Arc<[String; 10]>,
    },
    /// The `g/G` family: fixed rendering first, scientific as fallback.
    General {
        fixed: Box<NumberParser>,
        scientific: Box<NumberParser>,
    },
    Binary,
    Hex,
    RoundTrip,
}

impl NumberParser {
    pub(crate) fn from_options(
        engine: &dyn LocaleEngine,
        locale: &str,
        options: &NumberOptions,
        digits: Arc<[String; 10]>,
    ) -> Self {
        let rules = derive_rules(engine, locale, options);
        Self {
            kind: ParserKind::Derived { rules, digits },
        }
    }

    pub(crate) fn general(fixed: NumberParser, scientific: NumberParser) -> Self {
        Self {
            kind: ParserKind::General {
                fixed: Box::new(fixed),
                scientific: Box::new(scientific),
            },
        }
    }

    pub(crate) fn binary() -> Self {
        Self {
            kind: ParserKind::Binary,
        }
    }

    pub(crate) fn hex() -> Self {
        Self {
            kind: ParserKind::Hex,
        }
    }

    pub(crate) fn round_trip() -> Self {
        Self {
            kind: ParserKind::RoundTrip,
        }
    }

    /// Parse a locale-formatted string into a number.
    pub fn parse(&self, input: &str) -> Option<f64> {
        match &self.kind {
            ParserKind::Derived { rules, digits } => {
                let normalized = loose_normalize(input);
                rules
                    .iter()
                    .find_map(|rule| parse_with_rule(&normalized, rule, digits))
            }
            ParserKind::General { fixed, scientific } => {
                fixed.parse(input).or_else(|| scientific.parse(input))
            }
            ParserKind::Binary => {
                if !BINARY_RX.is_match(input) {
                    return None;
                }
                u64::from_str_radix(input, 2).ok().map(|n| n as f64)
            }
            ParserKind::Hex => {
                if !HEX_RX.is_match(input) {
                    return None;
                }
                u64::from_str_radix(input, 16).ok().map(|n| n as f64)
            }
            ParserKind::RoundTrip => {
                if !ROUND_TRIP_RX.is_match(input) {
                    return None;
                }
                input.trim().parse::<f64>().ok()
            }
        }
    }
}

fn parse_with_rule(input: &str, rule: &Rule, digits: &[String; 10]) -> Option<f64> {
    let mut middle = input;
    if !rule.prefix.is_empty() {
        middle = middle.strip_prefix(rule.prefix.as_str())?;
    }
    if !rule.suffix.is_empty() {
        middle = middle.strip_suffix(rule.suffix.as_str())?;
    }

    // NaN/Infinity rules match their token in full; no grammar runs.
    if let Some(literal) = &rule.literal {
        if middle != literal {
            return None;
        }
        if rule.nan {
            return Some(f64::NAN);
        }
        if rule.infinite {
            return Some(if rule.negative {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            });
        }
        return None;
    }

    run_grammar(middle, rule, digits)
}

struct Cursor<'a> {
    input: &'a str,
    index: usize,
    /// Canonical ASCII accumulator: digits 0-9, `.`, `e`, `-`.
    out: String,
    last_digit: bool,
    last_group: bool,
    has_decimal: bool,
    has_exponent: bool,
    has_exponent_sign: bool,
}

fn run_grammar(input: &str, rule: &Rule, digits: &[String; 10]) -> Option<f64> {
    let mut cur = Cursor {
        input,
        index: 0,
        out: String::with_capacity(input.len()),
        last_digit: false,
        last_group: false,
        has_decimal: false,
        has_exponent: false,
        has_exponent_sign: false,
    };

    while cur.index < cur.input.len() {
        if consume_digit(&mut cur, digits) {
            continue;
        }
        // A group separator must be immediately followed by a digit.
        if cur.last_group {
            return None;
        }
        if cur.has_exponent {
            // Only the sign may follow the exponent marker, once.
            if cur.has_exponent_sign {
                return None;
            }
            if consume_symbol(&mut cur, rule.exponent_sign.as_deref(), "-") {
                cur.has_exponent_sign = true;
                continue;
            }
            return None;
        }
        // Exponent marker: once, only after a digit.
        if cur.last_digit && consume_symbol(&mut cur, rule.exponent.as_deref(), "e") {
            cur.has_exponent = true;
            continue;
        }
        if cur.has_decimal {
            return None;
        }
        if cur.last_digit && consume_symbol(&mut cur, rule.group.as_deref(), "") {
            cur.last_group = true;
            continue;
        }
        if (cur.last_digit || cur.index == 0)
            && consume_symbol(&mut cur, rule.decimal.as_deref(), ".")
        {
            cur.has_decimal = true;
            continue;
        }
        return None;
    }

    // Dangling group separator at end of input.
    if cur.last_group {
        return None;
    }

    let mut n: f64 = cur.out.parse().ok()?;
    if rule.percent {
        n /= 100.0;
    }
    if rule.negative {
        n = -n;
    }
    Some(n)
}

fn consume_digit(cur: &mut Cursor<'_>, digits: &[String; 10]) -> bool {
    match digit_at(digits, cur.input, cur.index) {
        Some((next, value)) => {
            cur.index = next;
            cur.out.push((b'0' + value) as char);
            cur.last_digit = true;
            cur.last_group = false;
            true
        }
        None => false,
    }
}

fn consume_symbol(cur: &mut Cursor<'_>, symbol: Option<&str>, canonical: &str) -> bool {
    let Some(symbol) = symbol else {
        return false;
    };
    if symbol.is_empty() {
        return false;
    }
    match symbol_at(symbol, cur.input, cur.index) {
        Some(next) => {
            cur.index = next;
            cur.out.push_str(canonical);
            cur.last_digit = false;
            cur.last_group = false;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii_digits() -> [String; 10] {
        std::array::from_fn(|i| i.to_string())
    }

    fn grouped_rule() -> Rule {
        Rule {
            group: Some(",".to_string()),
            decimal: Some(".".to_string()),
            ..Rule::default()
        }
    }

    #[test]
    fn grouped_decimal_parses() {
        let digits = ascii_digits();
        assert_eq!(
            run_grammar("1,234,567.89", &grouped_rule(), &digits),
            Some(1234567.89)
        );
    }

    #[test]
    fn group_separator_requires_following_digit() {
        let digits = ascii_digits();
        assert_eq!(run_grammar("1,,234", &grouped_rule(), &digits), None);
        assert_eq!(run_grammar("1,234,", &grouped_rule(), &digits), None);
        assert_eq!(run_grammar("1,.5", &grouped_rule(), &digits), None);
    }

    #[test]
    fn decimal_separator_appears_at_most_once() {
        let digits = ascii_digits();
        assert_eq!(run_grammar("1.2.3", &grouped_rule(), &digits), None);
        assert_eq!(run_grammar(".5", &grouped_rule(), &digits), Some(0.5));
    }

    #[test]
    fn group_separator_is_rejected_in_the_fraction() {
        let digits = ascii_digits();
        assert_eq!(run_grammar("1.2,3", &grouped_rule(), &digits), None);
    }

    #[test]
    fn exponent_requires_marker_and_single_sign() {
        let digits = ascii_digits();
        let rule = Rule {
            decimal: Some(".".to_string()),
            exponent: Some("E".to_string()),
            exponent_sign: Some("-".to_string()),
            ..Rule::default()
        };
        assert_eq!(run_grammar("1.5e3", &rule, &digits), Some(1500.0));
        assert_eq!(run_grammar("1.5e-3", &rule, &digits), Some(0.0015));
        assert_eq!(run_grammar("1.5e--3", &rule, &digits), None);
        assert_eq!(run_grammar("e3", &rule, &digits), None);
        assert_eq!(run_grammar("1.5e", &rule, &digits), None);
    }

    #[test]
    fn unknown_characters_reject_the_rule() {
        let digits = ascii_digits();
        assert_eq!(run_grammar("12x4", &grouped_rule(), &digits), None);
    }
}
