//! Taxonomy errors.
//!
//! Construction-time invariant violations ([`TaxonomyError`]) indicate a
//! corrupted catalogue and abort startup. Per-call failures
//! ([`IndicatorError`]) are ordinary and fully recoverable by the caller.

use indicore_canonical::{StatusCode, ValidationError};
use thiserror::Error;

/// A structural invariant violation detected while building the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    /// Two definitions share one `type_name`.
    #[error("duplicate type name in taxonomy: {0}")]
    DuplicateTypeName(String),
    /// A `correlate` entry names a type absent from the graph.
    #[error("type '{type_name}' correlates with unknown type '{correlate}'")]
    UnresolvedCorrelate {
        /// The definition carrying the dangling reference.
        type_name: String,
        /// The name that failed to resolve.
        correlate: String,
    },
    /// A definition nests an attribute bearing its own name, directly or
    /// transitively.
    #[error("type '{0}' declares itself as its own attribute")]
    SelfNesting(String),
}

/// A recoverable per-call failure when validating a value of a named
/// indicator type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// The requested type name is not in the taxonomy.
    #[error("unknown indicator type: {0}")]
    UnknownType(String),
    /// The value failed validation for the type's data type.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl IndicatorError {
    /// HTTP-style transport status for this failure.
    pub fn transport_status(&self) -> u16 {
        match self {
            IndicatorError::UnknownType(_) => 404,
            IndicatorError::Invalid(e) => e.transport_status(),
        }
    }

    /// Protocol-facing symbolic code for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            IndicatorError::UnknownType(_) => StatusCode::NotFound,
            IndicatorError::Invalid(e) => e.status_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_maps_to_not_found() {
        let err = IndicatorError::UnknownType("no-such-type".into());
        assert_eq!(err.transport_status(), 404);
        assert_eq!(err.status_code(), StatusCode::NotFound);
        assert_eq!(err.to_string(), "unknown indicator type: no-such-type");
    }

    #[test]
    fn invalid_value_keeps_the_validation_facets() {
        let err = IndicatorError::from(ValidationError::EmptyValue);
        assert_eq!(err.transport_status(), 400);
        assert_eq!(err.status_code(), StatusCode::InvalidArgument);
    }
}
