//! Facade over the specfmt workspace: re-exports the public surface of
//! the member crates behind feature flags.
//!
//! - `common` — the `LocaleEngine` trait, option bags, shared value and
//!   error types.
//! - `core` — the `FormatContext` and every specifier-driven
//!   parser/formatter (default).
//! - `testkit` — the deterministic fixture engine for tests.

#[cfg(feature = "common")]
pub use specfmt_common::{
    BuildError, CurrencyCode, DateOptions, DatePart, DatePartKind, DateStyle, DisplayNameKind,
    FormatError, FormatValue, LocaleEngine, MonthStyle, NumberNotation, NumberOptions, NumberPart,
    NumberPartKind, NumberStyle, NumericWidth, SpecifierError, TextWidth, TimeStyle,
};

#[cfg(feature = "core")]
pub use specfmt_core::{
    BooleanFormatter, DateFormatter, DateParser, DateSpecifier, DurationFormatter, FormatContext,
    NumberFormatter, NumberParser, NumberSpecifier, TimeZoneSpec,
};

#[cfg(feature = "core")]
pub use specfmt_core::normalize::{compare_token_at, loose_normalize};

#[cfg(feature = "testkit")]
pub use specfmt_testkit::FixtureEngine;
