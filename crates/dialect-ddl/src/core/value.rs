//! Default values attached to columns.
//!
//! A [`DefaultValue`] is dialect-independent; turning it into an SQL literal is
//! the job of [`Dialect::literal`](super::traits::Dialect::literal).

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Column default value.
///
/// In schema files the variant is inferred from the YAML/JSON value: booleans,
/// integers and floats map directly, strings that parse as a UUID, a
/// timestamp or a date become those variants, and `{ expr: "..." }` is a raw
/// SQL expression emitted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Raw SQL expression (e.g. `CURRENT_TIMESTAMP`), emitted verbatim.
    Expr { expr: String },
    /// Boolean.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Floating point.
    Float(f64),
    /// UUID.
    Uuid(Uuid),
    /// Date and time without timezone.
    DateTime(NaiveDateTime),
    /// Date.
    Date(NaiveDate),
    /// Character string.
    Text(String),
    /// Binary data.
    #[serde(skip_deserializing)]
    Bytes(Vec<u8>),
}

impl DefaultValue {
    /// Create a raw SQL expression default.
    pub fn expr(expr: impl Into<String>) -> Self {
        DefaultValue::Expr { expr: expr.into() }
    }

    /// Format a character string as a single-quoted SQL literal, doubling
    /// embedded quotes.
    pub fn quote_text(s: &str) -> String {
        format!("'{}'", s.replace('\'', "''"))
    }
}

impl From<bool> for DefaultValue {
    fn from(v: bool) -> Self {
        DefaultValue::Bool(v)
    }
}

impl From<i64> for DefaultValue {
    fn from(v: i64) -> Self {
        DefaultValue::Int(v)
    }
}

impl From<i32> for DefaultValue {
    fn from(v: i32) -> Self {
        DefaultValue::Int(v as i64)
    }
}

impl From<f64> for DefaultValue {
    fn from(v: f64) -> Self {
        DefaultValue::Float(v)
    }
}

impl From<Uuid> for DefaultValue {
    fn from(v: Uuid) -> Self {
        DefaultValue::Uuid(v)
    }
}

impl From<NaiveDateTime> for DefaultValue {
    fn from(v: NaiveDateTime) -> Self {
        DefaultValue::DateTime(v)
    }
}

impl From<NaiveDate> for DefaultValue {
    fn from(v: NaiveDate) -> Self {
        DefaultValue::Date(v)
    }
}

impl From<String> for DefaultValue {
    fn from(v: String) -> Self {
        DefaultValue::Text(v)
    }
}

impl From<&str> for DefaultValue {
    fn from(v: &str) -> Self {
        DefaultValue::Text(v.to_string())
    }
}

impl From<Vec<u8>> for DefaultValue {
    fn from(v: Vec<u8>) -> Self {
        DefaultValue::Bytes(v)
    }
}
