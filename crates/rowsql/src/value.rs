//! Tagged value model and per-value type inference.
//!
//! A [`Value`] is constructed once at the ingestion boundary (either from
//! native Rust types via `From`, or from dynamic JSON via
//! [`Value::from_json`]) and carries its column kind from then on. Statement
//! builders bind values as `$n` parameters; [`Value::render_literal`]
//! produces the embedded-literal text form for display and debugging.

use crate::error::{StoreError, StoreResult};
use crate::stmt::ParamList;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use rust_decimal::Decimal;

/// Column type inferred from a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Integer, floating-point, or arbitrary-precision numeric
    Numeric,
    /// Calendar date without time of day
    Date,
    /// Date and time, second precision
    Timestamp,
    /// Character data
    Text,
    /// Boolean
    Boolean,
    /// Structured JSON document
    Document,
}

impl ColumnType {
    /// The column type name used in generated `CREATE TABLE` statements.
    pub fn ddl_type(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "NUMERIC",
            ColumnType::Date => "DATE",
            ColumnType::Timestamp => "TIMESTAMP",
            ColumnType::Text => "VARCHAR(255)",
            ColumnType::Boolean => "BOOLEAN",
            ColumnType::Document => "JSONB",
        }
    }
}

/// A single scalar or structured value in a row.
///
/// Timestamps are truncated to whole seconds at construction so that the
/// bound-parameter and literal forms agree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    Text(String),
    Bool(bool),
    Document(serde_json::Map<String, serde_json::Value>),
}

impl Value {
    /// Return the column type this value maps to.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Value::Int(_) | Value::Float(_) | Value::Decimal(_) => ColumnType::Numeric,
            Value::Date(_) => ColumnType::Date,
            Value::Timestamp(_) => ColumnType::Timestamp,
            Value::Text(_) => ColumnType::Text,
            Value::Bool(_) => ColumnType::Boolean,
            Value::Document(_) => ColumnType::Document,
        }
    }

    /// Build a value from a dynamic JSON value.
    ///
    /// Numbers map to Numeric, strings to Text, booleans to Boolean, and
    /// objects to Document. `null` and arrays are outside the supported
    /// column-type set and fail with [`StoreError::UnsupportedType`] naming
    /// the offending value and its kind.
    pub fn from_json(json: &serde_json::Value) -> StoreResult<Self> {
        match json {
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Float(f))
                } else {
                    Err(StoreError::unsupported("number", n.to_string()))
                }
            }
            serde_json::Value::String(s) => Ok(Value::Text(s.clone())),
            serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
            serde_json::Value::Object(map) => Ok(Value::Document(map.clone())),
            serde_json::Value::Null => Err(StoreError::unsupported("null", "null")),
            serde_json::Value::Array(_) => Err(StoreError::unsupported("array", json.to_string())),
        }
    }

    /// Build a value from any serializable type by going through JSON.
    pub fn from_serialize<T: serde::Serialize>(value: &T) -> StoreResult<Self> {
        let json = serde_json::to_value(value)
            .map_err(|e| StoreError::Other(format!("serialization failed: {e}")))?;
        Self::from_json(&json)
    }

    /// Render the exact literal text form of this value for embedding in
    /// statement display output.
    ///
    /// Numerics are unquoted; dates and timestamps are rendered as
    /// `TO_DATE`/`TO_TIMESTAMP` expressions over the fixed `MM/DD/YYYY`
    /// text forms; documents are single-quoted JSON text; text and booleans
    /// are single-quoted. Embedded single quotes are doubled.
    pub fn render_literal(&self) -> String {
        match self {
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Decimal(d) => d.to_string(),
            Value::Date(d) => {
                format!("TO_DATE('{}', 'MM/DD/YYYY')", d.format("%m/%d/%Y"))
            }
            Value::Timestamp(t) => format!(
                "TO_TIMESTAMP('{}', 'MM/DD/YYYY HH24:MI:SS')",
                t.format("%m/%d/%Y %H:%M:%S")
            ),
            Value::Text(s) => quote(s),
            Value::Bool(b) => quote(if *b { "true" } else { "false" }),
            Value::Document(map) => {
                quote(&serde_json::Value::Object(map.clone()).to_string())
            }
        }
    }

    /// Push this value onto a parameter list, returning its 1-based index.
    pub(crate) fn push_param(&self, params: &mut ParamList) -> usize {
        match self {
            Value::Int(i) => params.push(*i),
            Value::Float(f) => params.push(*f),
            Value::Decimal(d) => params.push(*d),
            Value::Date(d) => params.push(*d),
            Value::Timestamp(t) => params.push(*t),
            Value::Text(s) => params.push(s.clone()),
            Value::Bool(b) => params.push(*b),
            Value::Document(map) => params.push(serde_json::Value::Object(map.clone())),
        }
    }
}

/// Single-quote a string, doubling embedded quotes.
fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        // Second precision; sub-second digits never survive the literal form.
        Value::Timestamp(v.with_nanosecond(0).unwrap_or(v))
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Value {
    fn from(v: serde_json::Map<String, serde_json::Value>) -> Self {
        Value::Document(v)
    }
}
