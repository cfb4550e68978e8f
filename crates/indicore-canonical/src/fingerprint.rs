//! Content fingerprint computation.
//!
//! Fingerprints are computed as `sha3-256(canonical_text)` and rendered as
//! lowercase hex. The digest is a pure function of its byte input (no salt,
//! no time component) because fingerprints are persisted externally and used
//! as cross-record correlation keys: equal canonical forms must collapse to
//! equal fingerprints across processes and over time.

use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};

use crate::error::ValidationError;
use crate::patterns::SHA3_256_HEX;

/// Computes the SHA3-256 fingerprint of a canonical string, lowercase hex.
pub fn fingerprint(canonical: &str) -> Fingerprint {
    let mut hasher = Sha3_256::new();
    hasher.update(canonical.as_bytes());
    Fingerprint(hex::encode(hasher.finalize()))
}

/// A 64-character lowercase-hex SHA3-256 content fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Parses a fingerprint from its hex rendering, validating shape.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        SHA3_256_HEX.check(&s)?;
        Ok(Self(s))
    }

    /// The hex rendering of the fingerprint.
    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic() {
        assert_eq!(fingerprint("abc"), fingerprint("abc"));
        assert_ne!(fingerprint("abc"), fingerprint("abd"));
    }

    #[test]
    fn fingerprint_matches_known_sha3_256_vector() {
        // NIST test vector for the empty message.
        assert_eq!(
            fingerprint("").as_hex(),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn parse_rejects_wrong_length_and_case() {
        assert!(Fingerprint::parse("abc").is_err());
        let upper = "A".repeat(64);
        assert!(Fingerprint::parse(upper).is_err());
        let ok = "a".repeat(64);
        assert!(Fingerprint::parse(ok).is_ok());
    }
}
