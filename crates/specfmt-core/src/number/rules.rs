//! Rule derivation: probing the locale engine with nine representative
//! values and decomposing each rendering into a structural rule.
//!
//! The engine exposes no grammar, only example output. Nine probes cover
//! every structurally distinct rendering a number configuration can
//! produce: a large finite decimal and its negation, a huge-magnitude pair
//! (forces exponent rendering in scientific families), a tiny-magnitude
//! pair, NaN, and both infinities. Each probe's tagged decomposition
//! yields one [`Rule`]: literal prefix/suffix around the numeral, and
//! either the NaN/Infinity token or the separator symbols the locale
//! actually used.

use smallvec::SmallVec;

use specfmt_common::{LocaleEngine, NumberOptions, NumberStyle};

use crate::normalize::loose_normalize;

/// Structural description of one numeric rendering category. Exactly one
/// of `literal` (NaN/Infinity token) or the symbol set is populated.
#[derive(Debug, Clone, Default)]
pub(crate) struct Rule {
    pub prefix: String,
    pub suffix: String,
    pub literal: Option<String>,
    pub group: Option<String>,
    pub decimal: Option<String>,
    pub exponent: Option<String>,
    pub exponent_sign: Option<String>,
    pub negative: bool,
    pub nan: bool,
    pub infinite: bool,
    pub percent: bool,
}

/// Probe order is also the match-priority order at parse time.
pub(crate) const PROBES: [f64; 9] = [
    123456789.12345679,
    -123456789.12345679,
    1.23456789e40,
    -1.23456789e40,
    1.23456789e-40,
    -1.23456789e-40,
    f64::NAN,
    f64::INFINITY,
    f64::NEG_INFINITY,
];

pub(crate) fn derive_rules(
    engine: &dyn LocaleEngine,
    locale: &str,
    options: &NumberOptions,
) -> SmallVec<[Rule; 9]> {
    PROBES
        .iter()
        .map(|&probe| derive_rule(engine, locale, options, probe))
        .collect()
}

fn derive_rule(
    engine: &dyn LocaleEngine,
    locale: &str,
    options: &NumberOptions,
    probe: f64,
) -> Rule {
    let parts = engine.format_number_parts(locale, options, probe);

    let mut rule = Rule {
        negative: probe < 0.0,
        nan: probe.is_nan(),
        infinite: probe.is_infinite(),
        percent: options.style == NumberStyle::Percent,
        ..Rule::default()
    };

    let mut idx = 0;
    let mut prefix = String::new();
    while idx < parts.len() && !parts[idx].kind.is_numeric() {
        prefix.push_str(&parts[idx].text);
        idx += 1;
    }
    rule.prefix = loose_normalize(&prefix);

    if idx < parts.len() {
        if parts[idx].kind.is_special_token() {
            rule.literal = Some(loose_normalize(&parts[idx].text));
            idx += 1;
        } else {
            // Contiguous run of numeral parts; record each separator
            // symbol the first time it appears. Symbols are normalized
            // like the affixes so they match the normalized input (a
            // locale may decorate its exponent sign with bidi marks).
            use specfmt_common::NumberPartKind::*;
            let last = parts
                .iter()
                .rposition(|p| p.kind.is_numeric())
                .unwrap_or(idx);
            while idx <= last {
                let part = &parts[idx];
                match part.kind {
                    Group => {
                        rule.group.get_or_insert_with(|| loose_normalize(&part.text));
                    }
                    Decimal => {
                        rule.decimal.get_or_insert_with(|| loose_normalize(&part.text));
                    }
                    ExponentSeparator => {
                        rule.exponent.get_or_insert_with(|| loose_normalize(&part.text));
                    }
                    ExponentMinusSign => {
                        rule.exponent_sign
                            .get_or_insert_with(|| loose_normalize(&part.text));
                    }
                    _ => {}
                }
                idx += 1;
            }
        }
    }

    let mut suffix = String::new();
    while idx < parts.len() {
        suffix.push_str(&parts[idx].text);
        idx += 1;
    }
    rule.suffix = loose_normalize(&suffix);

    rule
}
