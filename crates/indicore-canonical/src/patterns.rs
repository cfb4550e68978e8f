//! Compiled format patterns shared by the validators.
//!
//! Each pattern is compiled once on first use and reused across calls;
//! validators run per ingested record, so per-call compilation would be
//! wasted work.

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::error::ValidationError;

/// A lazily-compiled anchored pattern with its source text kept for
/// error rendering.
pub struct Pattern {
    source: &'static str,
    compiled: OnceCell<Regex>,
}

impl Pattern {
    /// Declares a pattern; compilation is deferred to first use.
    pub const fn new(source: &'static str) -> Self {
        Self {
            source,
            compiled: OnceCell::new(),
        }
    }

    /// The pattern source text.
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Whether `value` matches the pattern.
    pub fn is_match(&self, value: &str) -> bool {
        self.compiled
            .get_or_init(|| Regex::new(self.source).expect("invalid pattern"))
            .is_match(value)
    }

    /// Checks `value` against the pattern, producing a `FormatMismatch`
    /// naming the expected pattern on failure.
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        if self.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::FormatMismatch {
                value: value.to_string(),
                reason: format!("expected pattern {}", self.source),
            })
        }
    }
}

/// MD5 digest, standard 32-hex form.
pub static MD5_HEX: Pattern = Pattern::new(r"^[0-9a-f]{32}$");
/// MD5 digest, truncated 16-hex form.
pub static MD5_SHORT_HEX: Pattern = Pattern::new(r"^[0-9a-f]{16}$");
/// SHA-1 digest.
pub static SHA1_HEX: Pattern = Pattern::new(r"^[0-9a-f]{40}$");
/// 224-bit digests (SHA-224, SHA3-224, SHA512-224).
pub static HEX_224: Pattern = Pattern::new(r"^[0-9a-f]{56}$");
/// 256-bit digests (SHA-256, SHA3-256, SHA512-256) and fingerprints.
pub static SHA3_256_HEX: Pattern = Pattern::new(r"^[0-9a-f]{64}$");
/// 384-bit digests (SHA-384, SHA3-384).
pub static HEX_384: Pattern = Pattern::new(r"^[0-9a-f]{96}$");
/// 512-bit digests (SHA-512, SHA3-512).
pub static HEX_512: Pattern = Pattern::new(r"^[0-9a-f]{128}$");
/// Arbitrary-length lowercase hex (after optional `0x` stripping).
pub static HEX_ANY: Pattern = Pattern::new(r"^[0-9a-f]+$");
/// Standard base64 alphabet with padding to a multiple of four.
pub static BASE64: Pattern = Pattern::new(
    r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{4})$",
);
/// Two-part MIME media type, lowercase.
pub static MIME: Pattern = Pattern::new(r"^([a-z]+)[/]([a-z]+[a-z+\-.][a-z]+)+$");
/// Mailbox address, lowercase.
pub static EMAIL: Pattern = Pattern::new(r"^[a-z0-9][a-z0-9._%+\-]*@[a-z0-9.\-]+\.[a-z]{2,}$");
/// Fully-qualified domain name, lowercase dotted labels.
pub static FQDN: Pattern = Pattern::new(r"^([a-z0-9]([a-z0-9\-]{0,61}[a-z0-9])?\.)+[a-z]{2,}$");
/// MAC address, six colon-separated lowercase octet pairs.
pub static MAC: Pattern = Pattern::new(r"^([0-9a-f]{2}:){5}[0-9a-f]{2}$");
/// Phone number after separator stripping: optional `+`, 5-15 digits.
pub static PHONE: Pattern = Pattern::new(r"^\+?[0-9]{5,15}$");
