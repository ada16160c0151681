//! Dynamically-typed cell values.
//!
//! Listing sources are loosely typed: the same column may carry numbers,
//! free text, or nothing at all depending on the scraper that produced the
//! file. `Value` makes each of those states explicit instead of relying on
//! sentinel values, and every fallible conversion returns an `Option`.

use serde::{Serialize, Serializer};

/// A single cell in a listing record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Missing,
}

impl Value {
    /// Numeric view of the cell. Text is never coerced.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Textual form of the cell. Numbers render without trailing zeros
    /// (`1.0` becomes `"1"`), `Missing` renders empty.
    pub fn to_text(&self) -> String {
        match self {
            Value::Number(n) => format_numeric(*n),
            Value::Text(s) => s.clone(),
            Value::Missing => String::new(),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
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

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Number(n) => {
                // Whole numbers serialize as integers so ids stay `1`, not `1.0`.
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 9e15 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            Value::Text(s) => serializer.serialize_str(s),
            Value::Missing => serializer.serialize_none(),
        }
    }
}

/// Formats a floating-point number as a string without trailing
/// fractional zeros. Whole numbers keep their digits: `100` stays
/// `"100"`, only `10.50` loses its tail.
fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_text_form_drops_trailing_zeros() {
        assert_eq!(Value::Number(1.0).to_text(), "1");
        assert_eq!(Value::Number(10.50).to_text(), "10.5");
        assert_eq!(Value::Text("42".into()).to_text(), "42");
        assert_eq!(Value::Missing.to_text(), "");
    }

    #[test]
    fn numeric_text_form_keeps_significant_zeros() {
        assert_eq!(Value::Number(100.0).to_text(), "100");
        assert_eq!(Value::Number(0.0).to_text(), "0");
        assert_eq!(Value::Number(2000.5).to_text(), "2000.5");
    }

    #[test]
    fn as_f64_does_not_coerce_text() {
        assert_eq!(Value::Number(3.5).as_f64(), Some(3.5));
        assert_eq!(Value::Text("3.5".into()).as_f64(), None);
        assert_eq!(Value::Missing.as_f64(), None);
    }

    #[test]
    fn serializes_to_json_scalars() {
        assert_eq!(serde_json::to_string(&Value::Number(1.0)).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Value::Number(1.5)).unwrap(), "1.5");
        assert_eq!(
            serde_json::to_string(&Value::Text("house".into())).unwrap(),
            "\"house\""
        );
        assert_eq!(serde_json::to_string(&Value::Missing).unwrap(), "null");
    }
}
