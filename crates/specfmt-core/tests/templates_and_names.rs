use chrono::{NaiveDate, TimeZone, Utc};
use specfmt_common::{FormatValue, TextWidth};
use specfmt_core::FormatContext;
use specfmt_testkit::FixtureEngine;

fn ctx() -> FormatContext {
    FormatContext::new(FixtureEngine::shared())
}

#[test]
fn template_substitutes_positional_arguments() {
    let ctx = ctx();
    let out = ctx
        .format_template("en-US", "Hello, {0}!", &["world".into()])
        .expect("formats");
    assert_eq!(out, "Hello, world!");
}

#[test]
fn template_dispatches_on_argument_kind() {
    let ctx = ctx();
    let date = Utc.from_utc_datetime(
        &NaiveDate::from_ymd_opt(2021, 10, 31)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid date"),
    );
    let out = ctx
        .format_template(
            "en-US",
            "{0} items, due {1:d}, urgent: {2}",
            &[FormatValue::Number(1234567.0), date.into(), true.into()],
        )
        .expect("formats");
    assert_eq!(out, "1,234,567 items, due 10/31/2021, urgent: yes");
}

#[test]
fn template_specifiers_configure_the_formatter() {
    let ctx = ctx();
    let out = ctx
        .format_template("en-US", "total: {0:N2}", &[FormatValue::Number(1234.5)])
        .expect("formats");
    assert_eq!(out, "total: 1,234.50");

    let out = ctx
        .format_template("de-DE", "{0:cEUR}", &[FormatValue::Number(-1234.56)])
        .expect("formats");
    assert_eq!(out, "-1.234,56\u{A0}€");
}

#[test]
fn template_booleans_localize() {
    let ctx = ctx();
    let out = ctx
        .format_template("fr", "{0} / {1}", &[true.into(), false.into()])
        .expect("formats");
    assert_eq!(out, "oui / non");
}

#[test]
fn missing_arguments_render_empty() {
    let ctx = ctx();
    let out = ctx
        .format_template("en-US", "[{1}]", &["only one".into()])
        .expect("formats");
    assert_eq!(out, "[]");
}

#[test]
fn non_numeric_keys_are_errors() {
    let ctx = ctx();
    assert!(ctx.format_template("en-US", "{name}", &[]).is_err());
}

#[test]
fn text_outside_placeholders_is_preserved() {
    let ctx = ctx();
    let out = ctx
        .format_template("en-US", "a {0} b {0} c", &["x".into()])
        .expect("formats");
    assert_eq!(out, "a x b x c");
}

#[test]
fn month_and_weekday_names() {
    let ctx = ctx();
    assert_eq!(
        ctx.month_name("en-US", 0, TextWidth::Long, None).expect("name"),
        "January"
    );
    assert_eq!(
        ctx.month_name("de-DE", 6, TextWidth::Long, None).expect("name"),
        "Juli"
    );
    assert_eq!(
        ctx.weekday_name("fr-FR", 1, TextWidth::Short).expect("name"),
        "lun."
    );
    assert_eq!(
        ctx.weekday_name("en-US", 0, TextWidth::Long).expect("name"),
        "Sunday"
    );
    assert!(ctx.month_name("en-US", 12, TextWidth::Long, None).is_err());
}

#[test]
fn display_names_fall_back_to_the_code() {
    let ctx = ctx();
    assert_eq!(ctx.language_name("en-US", "fr"), "French");
    assert_eq!(ctx.language_name("es", "fr"), "fr");
    assert_eq!(ctx.region_name("de-DE", "US"), "Vereinigte Staaten");
    assert_eq!(ctx.region_name("en-US", "ZZ"), "ZZ");
}

#[test]
fn separator_probes() {
    let ctx = ctx();
    assert_eq!(ctx.time_separator("en-US"), ":");
    assert_eq!(ctx.decimal_separator("de-DE"), ",");
    assert_eq!(ctx.decimal_separator("en-US"), ".");
    assert_eq!(ctx.minus_sign("sv-SE"), "\u{2212}");
    assert_eq!(ctx.plus_sign("en-US"), "+");
}

#[test]
fn boolean_formatter_walks_the_locale_tag() {
    let ctx = ctx();
    assert_eq!(ctx.boolean_formatter("de-AT").format(true), "ja");
    assert_eq!(ctx.boolean_formatter("tlh").format(false), "no");
}
