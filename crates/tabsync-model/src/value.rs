use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};

/// A dynamically-typed cell scalar.
///
/// This is the full set of shapes a parsed tabular source can hand the
/// engine. Combined date+time values arrive as [`Value::Text`] or as a
/// spreadsheet serial number, never as a dedicated variant.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Time(NaiveTime),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for every representation the engine unifies into [`Value::Null`]:
    /// explicit null, non-finite floats, and blank text.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float(f) => !f.is_finite(),
            Value::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Render into the serialization-safe boundary form.
    ///
    /// Values are restricted to null, boolean, number, and string; dates and
    /// times render as ISO strings and non-finite floats degrade to null.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::from(*n),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Date(d) => serde_json::Value::String(d.format("%Y-%m-%d").to_string()),
            Value::Time(t) => serde_json::Value::String(t.format("%H:%M:%S").to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(v) => f.write_str(&format_numeric(*v)),
            Value::Text(s) => f.write_str(s),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
        }
    }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// Integral floats already render without a decimal point, so trimming only
/// applies to fractional renderings; trimming unconditionally would eat real
/// digits (`100.0` renders as `"100"`, not `"100.0"`).
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// One normalized row rendered as a flat, serialization-safe mapping.
pub type Record = BTreeMap<String, serde_json::Value>;
