//! Validation outcome types.
//!
//! A successful validation produces a [`Validated`]: the type-specific
//! canonical value together with the fingerprint of its canonical text. The
//! only constructor derives the fingerprint from the canonical text, so an
//! outcome whose fingerprint disagrees with its value cannot be built.

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat};
use serde::ser::Serializer;
use serde::Serialize;
use uuid::Uuid;

use crate::fingerprint::{fingerprint, Fingerprint};

/// The canonical (normalized) representation of a validated value.
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalValue {
    /// Canonical text (already lower-cased where the type is insensitive).
    Text(String),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A finite floating-point value.
    Float(f64),
    /// A boolean.
    Boolean(bool),
    /// A calendar date.
    Date(NaiveDate),
    /// An RFC 3339 timestamp with its original offset.
    Datetime(DateTime<FixedOffset>),
    /// A 128-bit UUID.
    Uuid(Uuid),
}

impl CanonicalValue {
    /// The canonical string rendering: the exact byte input to the
    /// fingerprint.
    pub fn canonical_text(&self) -> String {
        match self {
            CanonicalValue::Text(s) => s.clone(),
            CanonicalValue::Integer(i) => i.to_string(),
            CanonicalValue::Float(x) => x.to_string(),
            CanonicalValue::Boolean(b) => b.to_string(),
            CanonicalValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CanonicalValue::Datetime(t) => {
                trim_subseconds(t.to_rfc3339_opts(SecondsFormat::Nanos, true))
            }
            CanonicalValue::Uuid(u) => u.to_string(),
        }
    }
}

/// Trims trailing zeros from the fractional-second field of an RFC 3339
/// rendering (".500" becomes ".5"; an all-zero fraction is dropped).
fn trim_subseconds(rendered: String) -> String {
    let Some(dot) = rendered.find('.') else {
        return rendered;
    };
    let frac_end = rendered[dot + 1..]
        .find(|c: char| !c.is_ascii_digit())
        .map(|i| dot + 1 + i)
        .unwrap_or(rendered.len());
    let frac = rendered[dot + 1..frac_end].trim_end_matches('0');
    if frac.is_empty() {
        format!("{}{}", &rendered[..dot], &rendered[frac_end..])
    } else {
        format!("{}.{}{}", &rendered[..dot], frac, &rendered[frac_end..])
    }
}

impl std::fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical_text())
    }
}

impl Serialize for CanonicalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CanonicalValue::Text(s) => serializer.serialize_str(s),
            CanonicalValue::Integer(i) => serializer.serialize_i64(*i),
            CanonicalValue::Float(x) => serializer.serialize_f64(*x),
            CanonicalValue::Boolean(b) => serializer.serialize_bool(*b),
            other => serializer.serialize_str(&other.canonical_text()),
        }
    }
}

/// A successful validation outcome: canonical value plus its fingerprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Validated {
    /// The normalized value.
    pub value: CanonicalValue,
    /// SHA3-256 fingerprint of `value`'s canonical text.
    pub fingerprint: Fingerprint,
}

impl Validated {
    /// Builds the outcome, deriving the fingerprint from the canonical text.
    pub fn new(value: CanonicalValue) -> Self {
        let fingerprint = fingerprint(&value.canonical_text());
        Self { value, fingerprint }
    }
}
