//! Error types for the two failure channels the stack keeps apart:
//!
//! - **`SpecifierError` / `BuildError`** — construction-time faults. A
//!   malformed specifier or an engine that cannot supply a required field
//!   fails when the parser/formatter is *built*, before any value is seen.
//! - **`FormatError`** — format-call domain errors (caller misuse, e.g.
//!   formatting 1.5 with an integer-only family).
//!
//! Per-call *parse* failures are never errors; parsers return `None`.

use std::{error::Error, fmt};

/// A specifier string that does not follow the specifier grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecifierError {
    /// Family letter unknown, precision malformed or out of range, or a
    /// precision supplied to the round-trip family.
    InvalidSpecifier { specifier: String },
    /// A currency family without a valid three-letter uppercase code.
    InvalidCurrency { specifier: String },
}

impl fmt::Display for SpecifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpecifier { specifier } => {
                write!(f, "invalid format specifier `{specifier}`")
            }
            Self::InvalidCurrency { specifier } => {
                write!(f, "invalid currency code in specifier `{specifier}`")
            }
        }
    }
}

impl Error for SpecifierError {}

/// A parser or formatter could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    Specifier(SpecifierError),
    /// The locale engine did not produce a field the configuration needs
    /// (e.g. no month part in any month probe). A configuration fault,
    /// not a runtime parse failure.
    MissingField {
        locale: String,
        field: &'static str,
    },
    InvalidDurationPattern {
        pattern: String,
        reason: String,
    },
    UnknownTimeZone {
        name: String,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Specifier(e) => write!(f, "{e}"),
            Self::MissingField { locale, field } => {
                write!(f, "locale engine produced no `{field}` field for locale `{locale}`")
            }
            Self::InvalidDurationPattern { pattern, reason } => {
                write!(f, "invalid duration pattern `{pattern}`: {reason}")
            }
            Self::UnknownTimeZone { name } => write!(f, "unknown time zone `{name}`"),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Specifier(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpecifierError> for BuildError {
    fn from(e: SpecifierError) -> Self {
        Self::Specifier(e)
    }
}

/// A formatting call was made with a value outside the family's domain.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Integer-only family (`d`, `b`, `x`) given a non-integer value.
    NotAnInteger { value: f64 },
    /// Value outside the representable range of a fixed-width integer
    /// encoding (binary/hex families).
    OutOfRange { value: f64, family: char },
    /// Durations must be finite (NaN formats as empty, infinities are
    /// caller misuse).
    NonFiniteDuration,
    /// A template placeholder carried a bad specifier or an argument kind
    /// with no formatter.
    Specifier(SpecifierError),
    Build(BuildError),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnInteger { value } => {
                write!(f, "value {value} is not an integer")
            }
            Self::OutOfRange { value, family } => {
                write!(f, "value {value} is out of range for the `{family}` family")
            }
            Self::NonFiniteDuration => f.write_str("duration is not finite"),
            Self::Specifier(e) => write!(f, "{e}"),
            Self::Build(e) => write!(f, "{e}"),
        }
    }
}

impl Error for FormatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Specifier(e) => Some(e),
            Self::Build(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpecifierError> for FormatError {
    fn from(e: SpecifierError) -> Self {
        Self::Specifier(e)
    }
}

impl From<BuildError> for FormatError {
    fn from(e: BuildError) -> Self {
        Self::Build(e)
    }
}
