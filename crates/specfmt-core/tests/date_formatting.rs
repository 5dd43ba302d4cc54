use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use specfmt_core::FormatContext;
use specfmt_testkit::FixtureEngine;

fn ctx() -> FormatContext {
    FormatContext::new(FixtureEngine::shared())
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.from_utc_datetime(
        &NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .expect("valid date"),
    )
}

#[test]
fn short_dates_render_per_locale() {
    let ctx = ctx();
    let date = utc(2008, 7, 31, 15, 30, 45);
    let en = ctx.date_formatter("en-US", "d", None).expect("builds");
    assert_eq!(en.format(&date), "7/31/2008");
    let sv = ctx.date_formatter("sv-SE", "d", None).expect("builds");
    assert_eq!(sv.format(&date), "2008-07-31");
}

#[test]
fn two_digit_years_are_widened_to_four() {
    let ctx = ctx();
    // de-DE renders short dates with a two-digit year; the formatter
    // re-renders the full year.
    let fmt = ctx.date_formatter("de-DE", "d", None).expect("builds");
    assert_eq!(fmt.format(&utc(2008, 7, 31, 0, 0, 0)), "31.07.2008");
    assert_eq!(fmt.format(&utc(2000, 1, 1, 0, 0, 0)), "01.01.2000");
}

#[test]
fn full_styles_include_names_and_glue() {
    let ctx = ctx();
    let date = utc(2008, 7, 31, 15, 30, 45);
    let de = ctx.date_formatter("de-DE", "f", None).expect("builds");
    assert_eq!(de.format(&date), "Donnerstag, 31. Juli 2008 um 15:30");
    let en = ctx.date_formatter("en-US", "F", None).expect("builds");
    assert_eq!(en.format(&date), "Thursday, July 31, 2008 at 3:30:45 PM");
}

#[test]
fn month_day_and_year_month_families() {
    let ctx = ctx();
    let date = utc(2008, 7, 31, 0, 0, 0);
    let m = ctx.date_formatter("de-DE", "M", None).expect("builds");
    assert_eq!(m.format(&date), "31. Juli");
    let y = ctx.date_formatter("de-DE", "Y", None).expect("builds");
    assert_eq!(y.format(&date), "Juli 2008");
}

#[test]
fn time_only_families() {
    let ctx = ctx();
    let date = utc(2008, 7, 31, 15, 30, 45);
    let t = ctx.date_formatter("de-DE", "t", None).expect("builds");
    assert_eq!(t.format(&date), "15:30");
    let tt = ctx.date_formatter("de-DE", "T", None).expect("builds");
    assert_eq!(tt.format(&date), "15:30:45");
}

#[test]
fn locale_independent_families_render_fixed_patterns() {
    let ctx = ctx();
    let date = Utc
        .from_utc_datetime(
            &NaiveDate::from_ymd_opt(2008, 7, 31)
                .and_then(|d| d.and_hms_milli_opt(13, 30, 45, 678))
                .expect("valid date"),
        );
    let o = ctx.date_formatter("de-DE", "o", None).expect("builds");
    assert_eq!(o.format(&date), "2008-07-31T13:30:45.6780000");
    let s = ctx.date_formatter("en-US", "s", None).expect("builds");
    assert_eq!(s.format(&date), "2008-07-31T13:30:45");
    let u = ctx.date_formatter("fr-FR", "u", None).expect("builds");
    assert_eq!(u.format(&date), "2008-07-31 13:30:45Z");
    let r = ctx.date_formatter("ar-EG", "r", None).expect("builds");
    assert_eq!(r.format(&date), "Thu, 31 Jul 2008 13:30:45 GMT");
}

#[test]
fn time_zone_shifts_the_rendered_wall_time() {
    let ctx = ctx();
    let date = utc(2008, 7, 31, 13, 30, 0);
    let fmt = ctx
        .date_formatter("de-DE", "t", Some("+02:00"))
        .expect("builds");
    assert_eq!(fmt.format(&date), "15:30");
}

#[test]
fn formatters_are_cached_per_locale_specifier_and_zone() {
    let ctx = ctx();
    let a = ctx.date_formatter("en-US", "o", None).expect("builds");
    let b = ctx.date_formatter("de-DE", "O", None).expect("builds");
    assert!(Arc::ptr_eq(&a, &b));

    let plain = ctx.date_formatter("en-US", "d", None).expect("builds");
    let zoned = ctx
        .date_formatter("en-US", "d", Some("+02:00"))
        .expect("builds");
    assert!(!Arc::ptr_eq(&plain, &zoned));
}

#[test]
fn format_then_parse_round_trips() {
    let ctx = ctx();
    let date = utc(2020, 12, 31, 15, 45, 10);
    for locale in ["en-US", "de-DE", "fr-FR", "ar-EG", "sv-SE"] {
        for spec in ["d", "D", "G"] {
            let fmt = ctx.date_formatter(locale, spec, None).expect("builds");
            let parser = ctx.date_parser(locale, spec, None).expect("builds");
            let text = fmt.format(&date);
            let expected = match spec {
                "d" | "D" => utc(2020, 12, 31, 0, 0, 0),
                _ => date,
            };
            assert_eq!(
                parser.parse(&text),
                Some(expected),
                "round trip failed for {locale}/{spec}: {text}"
            );
        }
    }
}
