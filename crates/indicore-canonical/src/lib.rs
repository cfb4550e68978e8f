//! Canonical value primitives for indicator ingestion.
//!
//! This crate turns loosely-typed external scalars into canonical,
//! fingerprinted values. Every field that participates in cross-record
//! correlation flows through here: a raw value plus a declared data type
//! goes in, and either a `(canonical value, fingerprint)` pair or a
//! structured validation error comes out. Validators are pure functions
//! with no shared state and may be called concurrently.
//!
#![deny(missing_docs)]

/// Validation outcome types (canonical values and their fingerprints).
pub mod canonical;
/// The closed data-type enumeration and validator dispatch.
pub mod datatype;
/// Structured validation errors with transport/protocol facets.
pub mod error;
/// Content fingerprint computation and the fingerprint newtype.
pub mod fingerprint;
/// Compiled format patterns shared by the validators.
pub mod patterns;
/// Raw input value union.
pub mod value;
/// Per-family format validators.
pub mod validators;

pub use canonical::{CanonicalValue, Validated};
pub use datatype::{DataType, UnknownDataType};
pub use error::{StatusCode, ValidationError};
pub use fingerprint::{fingerprint, Fingerprint};
pub use value::RawValue;
