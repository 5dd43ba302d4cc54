use chrono::{DateTime, Utc};

/// A template-formatting argument.
///
/// Template placeholders dispatch on this tag to pick the matching
/// formatter; there is no runtime reflection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Date(DateTime<Utc>),
}

impl From<&str> for FormatValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for FormatValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<f64> for FormatValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for FormatValue {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<bool> for FormatValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<DateTime<Utc>> for FormatValue {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Date(v)
    }
}
