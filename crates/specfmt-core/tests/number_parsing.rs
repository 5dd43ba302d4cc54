use std::sync::Arc;

use specfmt_core::FormatContext;
use specfmt_testkit::FixtureEngine;

fn ctx() -> FormatContext {
    FormatContext::new(FixtureEngine::shared())
}

#[test]
fn default_specifier_parses_grouped_decimals() {
    let ctx = ctx();
    let parser = ctx.number_parser("en-US", "").expect("default specifier builds");
    assert_eq!(parser.parse("1,234,567.89"), Some(1234567.89));
}

#[test]
fn en_us_grouped_parsing() {
    let ctx = ctx();
    let parser = ctx.number_parser("en-US", "N").expect("valid specifier");
    assert_eq!(parser.parse("1,234,567.89"), Some(1234567.89));
    assert_eq!(parser.parse("-1,234,567.89"), Some(-1234567.89));
}

#[test]
fn de_de_swapped_separators() {
    let ctx = ctx();
    let parser = ctx.number_parser("de-DE", "N").expect("valid specifier");
    assert_eq!(parser.parse("1.234.567,89"), Some(1234567.89));
}

#[test]
fn ar_eg_arabic_indic_digits() {
    let ctx = ctx();
    let parser = ctx.number_parser("ar-EG", "N").expect("valid specifier");
    assert_eq!(parser.parse("١٬٢٣٤٬٥٦٧٫٨٩"), Some(1234567.89));
    assert_eq!(parser.parse("-١٬٢٣٤٬٥٦٧٫٨٩"), Some(-1234567.89));
}

#[test]
fn special_values_parse_via_their_tokens() {
    let ctx = ctx();
    let parser = ctx.number_parser("en-US", "n").expect("valid specifier");
    assert!(parser.parse("NaN").map(f64::is_nan).unwrap_or(false));
    assert_eq!(parser.parse("∞"), Some(f64::INFINITY));
    assert_eq!(parser.parse("-∞"), Some(f64::NEG_INFINITY));
}

#[test]
fn non_numbers_yield_none_not_errors() {
    let ctx = ctx();
    let parser = ctx.number_parser("en-US", "n").expect("valid specifier");
    assert_eq!(parser.parse("hello"), None);
    assert_eq!(parser.parse(""), None);
}

#[test]
fn grammar_rejects_malformed_grouping() {
    let ctx = ctx();
    let parser = ctx.number_parser("en-US", "N").expect("valid specifier");
    // Group separator must be immediately followed by a digit.
    assert_eq!(parser.parse("1,,234"), None);
    assert_eq!(parser.parse("1,234,"), None);
    // Two decimal points.
    assert_eq!(parser.parse("1.2.3"), None);
    // Group separator inside the fraction.
    assert_eq!(parser.parse("1.2,3"), None);
}

#[test]
fn fixed_point_family_rejects_grouping() {
    let ctx = ctx();
    let parser = ctx.number_parser("en-US", "f").expect("valid specifier");
    assert_eq!(parser.parse("1234.57"), Some(1234.57));
    assert_eq!(parser.parse("1,234.57"), None);
}

#[test]
fn fixed_point_widths() {
    let ctx = ctx();
    let f1 = ctx.number_parser("en-US", "f1").expect("valid specifier");
    assert_eq!(f1.parse("1234.0"), Some(1234.0));
    let f4 = ctx.number_parser("en-US", "f4").expect("valid specifier");
    assert_eq!(f4.parse("1234.5600"), Some(1234.56));
    let f3 = ctx.number_parser("en-US", "f3").expect("valid specifier");
    assert_eq!(f3.parse("0.000"), Some(0.0));
}

#[test]
fn integer_family_rejects_fractions() {
    let ctx = ctx();
    let parser = ctx.number_parser("en-US", "d").expect("valid specifier");
    assert_eq!(parser.parse("1234"), Some(1234.0));
    assert_eq!(parser.parse("-1234"), Some(-1234.0));
    assert_eq!(parser.parse("1.2"), None);
}

#[test]
fn integer_family_accepts_padded_digits() {
    let ctx = ctx();
    let parser = ctx.number_parser("en-US", "d6").expect("valid specifier");
    assert_eq!(parser.parse("001234"), Some(1234.0));
}

#[test]
fn binary_family_is_locale_independent() {
    let ctx = ctx();
    for locale in ["en-US", "de-DE", "ar-EG"] {
        let parser = ctx.number_parser(locale, "b").expect("valid specifier");
        assert_eq!(parser.parse("1111011"), Some(123.0));
        assert_eq!(parser.parse("123"), None);
        assert_eq!(parser.parse("1.1"), None);
    }
}

#[test]
fn hex_family_is_locale_independent_and_case_insensitive() {
    let ctx = ctx();
    for locale in ["en-US", "de-DE", "sv-SE"] {
        let upper = ctx.number_parser(locale, "X").expect("valid specifier");
        assert_eq!(upper.parse("1A"), Some(26.0));
        assert_eq!(upper.parse("7b"), Some(123.0));
        assert_eq!(upper.parse("1G"), None);
        assert_eq!(upper.parse("1.1"), None);
    }
}

#[test]
fn round_trip_family_uses_plain_float_syntax() {
    let ctx = ctx();
    let parser = ctx.number_parser("en-US", "r").expect("valid specifier");
    assert_eq!(parser.parse("1.3e5"), Some(130000.0));
    assert_eq!(parser.parse("-12.25"), Some(-12.25));
    assert_eq!(parser.parse("+12.25"), Some(12.25));
    assert_eq!(parser.parse("-1.3e-5"), Some(-0.000013));
    assert_eq!(parser.parse("1hello"), None);
}

#[test]
fn currency_parsing_with_accounting_negatives() {
    let ctx = ctx();
    let parser = ctx.number_parser("en-US", "cUSD").expect("valid specifier");
    assert_eq!(parser.parse("$1,234.56"), Some(1234.56));
    assert_eq!(parser.parse("($1,234.56)"), Some(-1234.56));
}

#[test]
fn currency_parsing_with_suffixed_symbols() {
    let ctx = ctx();
    let parser = ctx.number_parser("de-DE", "cEUR").expect("valid specifier");
    assert_eq!(parser.parse("-1.234,56 €"), Some(-1234.56));
}

#[test]
fn currency_parsing_with_bidi_marked_affixes() {
    let ctx = ctx();
    let parser = ctx.number_parser("ar-EG", "cEGP").expect("valid specifier");
    assert_eq!(parser.parse("؜-‏١٢٣٫٤٦ ج.م.‏"), Some(-123.46));
}

#[test]
fn percent_parsing_scales_down() {
    let ctx = ctx();
    let en = ctx.number_parser("en-US", "p").expect("valid specifier");
    assert_eq!(en.parse("12.34%"), Some(0.1234));
    let de = ctx.number_parser("de-DE", "p").expect("valid specifier");
    assert_eq!(de.parse("12,34\u{A0}%"), Some(0.1234));
    let ar = ctx.number_parser("ar-EG", "p").expect("valid specifier");
    assert_eq!(ar.parse("؜-١٢٫٣٤٪؜"), Some(-0.1234));
}

#[test]
fn scientific_parsing() {
    let ctx = ctx();
    let en = ctx.number_parser("en-US", "e").expect("valid specifier");
    assert_eq!(en.parse("1.23e4"), Some(12300.0));
    let de = ctx.number_parser("de-DE", "e").expect("valid specifier");
    assert_eq!(de.parse("1,23e4"), Some(12300.0));
    let ar = ctx.number_parser("ar-EG", "e").expect("valid specifier");
    assert_eq!(ar.parse("؜-١٫٢٣٥أس٤"), Some(-12350.0));
    assert_eq!(ar.parse("؜؜-١٫٢٣أس؜-٣٥"), Some(-1.23e-35));
}

#[test]
fn general_family_takes_either_notation() {
    let ctx = ctx();
    let parser = ctx.number_parser("en-US", "g").expect("valid specifier");
    assert_eq!(parser.parse("1234.56"), Some(1234.56));
    assert_eq!(parser.parse("1.23456e3"), Some(1234.56));
    assert_eq!(parser.parse("-1234.56"), Some(-1234.56));
    assert_eq!(parser.parse("-1.23456e3"), Some(-1234.56));
    assert_eq!(parser.parse("1.23456e-3"), Some(0.00123456));
    assert_eq!(parser.parse("hello"), None);
}

#[test]
fn bidi_marks_and_space_variants_do_not_change_results() {
    let ctx = ctx();
    let parser = ctx.number_parser("en-US", "N").expect("valid specifier");
    assert_eq!(parser.parse("1,234\u{200B},567.89"), Some(1234567.89));
    assert_eq!(parser.parse("\u{200F}1,234,567.89"), Some(1234567.89));

    // A no-break space where the locale renders a plain one.
    let de = ctx.number_parser("de-DE", "cEUR").expect("valid specifier");
    assert_eq!(de.parse("-1.234,56\u{A0}€"), Some(-1234.56));
}

#[test]
fn swedish_unicode_minus_is_unified() {
    let ctx = ctx();
    let parser = ctx.number_parser("sv-SE", "N").expect("valid specifier");
    assert_eq!(parser.parse("\u{2212}1\u{A0}234,5"), Some(-1234.5));
    assert_eq!(parser.parse("-1 234,5"), Some(-1234.5));
}

#[test]
fn parsers_are_cached_per_locale_and_specifier() {
    let ctx = ctx();
    let a = ctx.number_parser("en-US", "n").expect("valid specifier");
    let b = ctx.number_parser("en-US", "N").expect("valid specifier");
    assert!(Arc::ptr_eq(&a, &b));

    // Locale-independent families ignore the locale argument.
    let bin1 = ctx.number_parser("en-US", "b").expect("valid specifier");
    let bin2 = ctx.number_parser("de-DE", "B").expect("valid specifier");
    assert!(Arc::ptr_eq(&bin1, &bin2));

    // Different precision, different parser.
    let n2 = ctx.number_parser("en-US", "n2").expect("valid specifier");
    assert!(!Arc::ptr_eq(&a, &n2));

    // Different locale, different parser.
    let de = ctx.number_parser("de-DE", "n").expect("valid specifier");
    assert!(!Arc::ptr_eq(&a, &de));
}

#[test]
fn options_built_parsers_work_but_are_uncached() {
    let ctx = ctx();
    let options = specfmt_common::NumberOptions::default();
    let a = ctx.number_parser_with_options("en-US", &options);
    let b = ctx.number_parser_with_options("en-US", &options);
    assert_eq!(a.parse("1,234.5"), Some(1234.5));
    assert!(!Arc::ptr_eq(&a, &b));
}

#[test]
fn construction_faults_surface_before_parsing() {
    let ctx = ctx();
    assert!(ctx.number_parser("en-US", "q").is_err());
    assert!(ctx.number_parser("en-US", "cUS").is_err());
    assert!(ctx.number_parser("en-US", "r2").is_err());
    assert!(ctx.number_parser("en-US", "n200").is_err());
}
