//! Structured validation errors.
//!
//! Every validator failure carries two transport-agnostic facets a caller
//! maps onward: an HTTP-style transport status and a protocol status code.
//! Messages render the offending raw value for diagnostics; callers
//! validating secret-bearing indicator types (passwords, private keys) are
//! expected to redact at their transport boundary.

use thiserror::Error;

/// Protocol-facing symbolic status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// The supplied value failed validation.
    InvalidArgument,
    /// The requested entry does not exist.
    NotFound,
}

impl StatusCode {
    /// Stable wire rendering of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::InvalidArgument => "INVALID_ARGUMENT",
            StatusCode::NotFound => "NOT_FOUND",
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-value validation failure. Deterministic for a given input, so
/// never worth retrying; fully recoverable by the immediate caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The value's dynamic kind does not match what the validator expects.
    #[error("value is not {expected}: {value}")]
    TypeMismatch {
        /// Kind the validator requires (e.g. `string`, `integer`).
        expected: &'static str,
        /// Rendering of the offending value.
        value: String,
    },
    /// A text value was empty where content is required.
    #[error("value cannot be empty")]
    EmptyValue,
    /// The value is the right kind but fails the type-specific format.
    #[error("invalid value '{value}': {reason}")]
    FormatMismatch {
        /// The offending value.
        value: String,
        /// Parser error text or expected-pattern description.
        reason: String,
    },
}

impl ValidationError {
    /// HTTP-style transport status for this failure.
    pub fn transport_status(&self) -> u16 {
        400
    }

    /// Protocol-facing symbolic code for this failure.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::InvalidArgument
    }
}
