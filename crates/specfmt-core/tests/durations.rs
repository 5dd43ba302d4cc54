use std::sync::Arc;

use specfmt_common::{BuildError, FormatError};
use specfmt_core::FormatContext;
use specfmt_testkit::FixtureEngine;

fn ctx() -> FormatContext {
    FormatContext::new(FixtureEngine::shared())
}

const MS: f64 = 1.0;
const SEC: f64 = 1000.0 * MS;
const MIN: f64 = 60.0 * SEC;
const HOUR: f64 = 60.0 * MIN;
const DAY: f64 = 24.0 * HOUR;

#[test]
fn constant_preset_renders_every_field() {
    let ctx = ctx();
    let fmt = ctx
        .duration_formatter("en-US", Some("constant"))
        .expect("builds");
    let duration = DAY + HOUR + MIN + SEC + 234.0;
    assert_eq!(fmt.format(duration).ok(), Some("1:01:01:01.234".to_string()));
}

#[test]
fn short_preset_omits_empty_optional_groups() {
    let ctx = ctx();
    let fmt = ctx.duration_formatter("en-US", None).expect("builds");
    assert_eq!(fmt.format(2.0 * HOUR + 5.0 * MIN).ok(), Some("2:05".to_string()));
    assert_eq!(
        fmt.format(2.0 * HOUR + 5.0 * MIN + 7.0 * SEC).ok(),
        Some("2:05:07".to_string())
    );
    assert_eq!(
        fmt.format(3.0 * DAY + 2.0 * HOUR + 5.0 * MIN).ok(),
        Some("3:2:05".to_string())
    );
}

#[test]
fn negative_durations_render_the_sign_group() {
    let ctx = ctx();
    let fmt = ctx.duration_formatter("en-US", None).expect("builds");
    assert_eq!(fmt.format(-(2.0 * HOUR + 5.0 * MIN)).ok(), Some("-2:05".to_string()));
}

#[test]
fn racing_preset_always_shows_fraction() {
    let ctx = ctx();
    let fmt = ctx
        .duration_formatter("en-US", Some("racing"))
        .expect("builds");
    assert_eq!(
        fmt.format(MIN + 23.0 * SEC + 456.0).ok(),
        Some("01:23.456".to_string())
    );
}

#[test]
fn trimmed_fractions_drop_trailing_zeros() {
    let ctx = ctx();
    let fmt = ctx
        .duration_formatter("en-US", Some("m:ss[.FFF]"))
        .expect("builds");
    assert_eq!(fmt.format(MIN + 23.0 * SEC + 450.0).ok(), Some("1:23.45".to_string()));
    assert_eq!(fmt.format(MIN + 23.0 * SEC).ok(), Some("1:23".to_string()));
}

#[test]
fn quoted_literals_and_escapes_pass_through() {
    let ctx = ctx();
    let fmt = ctx
        .duration_formatter("en-US", Some("h'h 'm\\m"))
        .expect("builds");
    assert_eq!(fmt.format(2.0 * HOUR + 5.0 * MIN).ok(), Some("2h 5m".to_string()));
}

#[test]
fn locale_separators_come_from_the_engine() {
    let ctx = ctx();
    let fmt = ctx
        .duration_formatter("ar-EG", Some("m:ss"))
        .expect("builds");
    assert_eq!(fmt.format(MIN + 5.0 * SEC).ok(), Some("١:٠٥".to_string()));
}

#[test]
fn nan_renders_empty_and_infinity_errors() {
    let ctx = ctx();
    let fmt = ctx.duration_formatter("en-US", None).expect("builds");
    assert_eq!(fmt.format(f64::NAN).ok(), Some(String::new()));
    assert!(matches!(
        fmt.format(f64::INFINITY),
        Err(FormatError::NonFiniteDuration)
    ));
}

#[test]
fn malformed_patterns_fail_at_construction() {
    let ctx = ctx();
    assert!(matches!(
        ctx.duration_formatter("en-US", Some("q")),
        Err(BuildError::InvalidDurationPattern { .. })
    ));
    assert!(matches!(
        ctx.duration_formatter("en-US", Some("[h:m")),
        Err(BuildError::InvalidDurationPattern { .. })
    ));
    assert!(matches!(
        ctx.duration_formatter("en-US", Some("'oops")),
        Err(BuildError::InvalidDurationPattern { .. })
    ));
    assert!(matches!(
        ctx.duration_formatter("en-US", Some("ddddddddd")),
        Err(BuildError::InvalidDurationPattern { .. })
    ));
}

#[test]
fn duration_formatters_are_cached_by_resolved_pattern() {
    let ctx = ctx();
    let a = ctx.duration_formatter("en-US", None).expect("builds");
    let b = ctx
        .duration_formatter("en-US", Some("short"))
        .expect("builds");
    let c = ctx
        .duration_formatter("en-US", Some("[-][d:]h:mm[:ss[.FFF]]"))
        .expect("builds");
    assert!(Arc::ptr_eq(&a, &b));
    assert!(Arc::ptr_eq(&a, &c));
}
