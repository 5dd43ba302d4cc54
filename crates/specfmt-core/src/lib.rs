//! Locale-aware formatting and parsing of numbers, dates, durations,
//! booleans and template strings, selected by .NET-style single-letter
//! specifiers (`d`, `D`, `N2`, `cUSD`, `o`, …).
//!
//! Formatting delegates to a pluggable locale engine. Parsing is the
//! interesting half: the engine only *formats*, so parsers are derived by
//! probing it with representative values and reverse-engineering the
//! output into a character-level grammar. Everything is built through a
//! [`FormatContext`], which owns the engine and memoizes constructed
//! parsers/formatters so equal requests return the identical instance.
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use specfmt_core::FormatContext;
//! # fn engine() -> Arc<dyn specfmt_common::LocaleEngine> { unimplemented!() }
//! let ctx = FormatContext::new(engine());
//! let parser = ctx.number_parser("de-DE", "n")?;
//! assert_eq!(parser.parse("1.234.567,89"), Some(1234567.89));
//! # Ok::<(), specfmt_common::SpecifierError>(())
//! ```

pub mod boolean;
pub mod context;
pub mod date;
pub mod duration;
mod names;
pub mod normalize;
pub mod number;
pub mod specifier;
mod template;

pub use boolean::BooleanFormatter;
pub use context::FormatContext;
pub use date::{DateFormatter, DateParser, TimeZoneSpec};
pub use duration::DurationFormatter;
pub use number::{NumberFormatter, NumberParser};
pub use specifier::{DateSpecifier, NumberSpecifier};

// Re-export common types
pub use specfmt_common::{
    BuildError, CurrencyCode, DateOptions, DisplayNameKind, FormatError, FormatValue,
    LocaleEngine, NumberOptions, SpecifierError, TextWidth,
};
