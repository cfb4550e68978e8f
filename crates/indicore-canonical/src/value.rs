//! Raw input value union.
//!
//! External callers hand the engine loosely-typed scalars (typically decoded
//! from JSON). Rather than an open "any" value checked by runtime casts, the
//! accepted kinds form a closed tagged union that every validator matches
//! exhaustively; a value of the wrong kind is a `TypeMismatch` at the union
//! boundary.

use serde::{Deserialize, Serialize};

/// A loosely-typed scalar as received from an ingestion caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A boolean value.
    Boolean(bool),
    /// A signed 64-bit integer value.
    Integer(i64),
    /// A floating-point value.
    Float(f64),
    /// A text value.
    Text(String),
}

impl RawValue {
    /// The kind name used in type-mismatch diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Boolean(_) => "boolean",
            RawValue::Integer(_) => "integer",
            RawValue::Float(_) => "float",
            RawValue::Text(_) => "string",
        }
    }
}

impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawValue::Boolean(b) => write!(f, "{}", b),
            RawValue::Integer(i) => write!(f, "{}", i),
            RawValue::Float(x) => write!(f, "{}", x),
            RawValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Boolean(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_scalars_deserialize_to_matching_arms() {
        assert_eq!(
            serde_json::from_str::<RawValue>("\"abc\"").unwrap(),
            RawValue::Text("abc".into())
        );
        assert_eq!(
            serde_json::from_str::<RawValue>("42").unwrap(),
            RawValue::Integer(42)
        );
        assert_eq!(
            serde_json::from_str::<RawValue>("4.5").unwrap(),
            RawValue::Float(4.5)
        );
        assert_eq!(
            serde_json::from_str::<RawValue>("true").unwrap(),
            RawValue::Boolean(true)
        );
    }

    #[test]
    fn display_renders_the_raw_value() {
        assert_eq!(RawValue::from("abc").to_string(), "abc");
        assert_eq!(RawValue::from(42i64).to_string(), "42");
        assert_eq!(RawValue::from(false).to_string(), "false");
    }

    #[test]
    fn kind_names_match_the_accepted_arms() {
        assert_eq!(RawValue::from("abc").kind(), "string");
        assert_eq!(RawValue::from(42i64).kind(), "integer");
        assert_eq!(RawValue::from(4.5f64).kind(), "float");
        assert_eq!(RawValue::from(true).kind(), "boolean");
    }
}
