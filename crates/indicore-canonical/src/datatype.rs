//! The closed data-type enumeration and validator dispatch.
//!
//! Every indicator type in the taxonomy declares one of these validation
//! families. The set is closed and known at build time: dispatch over the
//! enum is an exhaustive match and cannot fail at runtime. Parsing an
//! unknown identifier string is a configuration error surfaced at load
//! time, never a per-record failure.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::canonical::Validated;
use crate::error::ValidationError;
use crate::patterns::{HEX_224, HEX_384, HEX_512, SHA1_HEX, SHA3_256_HEX};
use crate::validators;
use crate::value::RawValue;

/// A data-type identifier outside the closed enumeration: a corrupted
/// schema, not bad input data. Treated as fatal at configuration time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown data type: {0}")]
pub struct UnknownDataType(pub String);

/// The validation family an indicator type normalizes through.
///
/// Serialized identifiers match the external catalogue exactly (e.g.
/// `"MIME type"`, `"Case-sensitive string"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Case-preserving text.
    #[serde(rename = "Case-sensitive string")]
    Str,
    /// Case-insensitive text (hashed lower-cased).
    #[serde(rename = "String")]
    Istr,
    /// IPv4/IPv6 literal.
    #[serde(rename = "IP")]
    Ip,
    /// Mailbox address.
    #[serde(rename = "Email")]
    Email,
    /// Fully-qualified domain name.
    #[serde(rename = "FQDN")]
    Fqdn,
    /// 64-bit signed integer.
    #[serde(rename = "Integer")]
    Integer,
    /// Network segment in `addr/prefix` notation.
    #[serde(rename = "CIDR")]
    Cidr,
    /// City name (case-insensitive text).
    #[serde(rename = "City")]
    City,
    /// Country name (case-insensitive text).
    #[serde(rename = "Country")]
    Country,
    /// Finite floating-point number.
    #[serde(rename = "Float")]
    Float,
    /// Absolute URL.
    #[serde(rename = "URL")]
    Url,
    /// MD5 digest (32-hex, 16-hex short form accepted).
    #[serde(rename = "MD5")]
    Md5,
    /// Arbitrary-length hexadecimal.
    #[serde(rename = "Hexadecimal")]
    Hexadecimal,
    /// Standard-alphabet base64.
    #[serde(rename = "BASE64")]
    Base64,
    /// `YYYY-MM-DD` calendar date.
    #[serde(rename = "Date")]
    Date,
    /// MAC address.
    #[serde(rename = "MAC")]
    Mac,
    /// Two-part MIME media type.
    #[serde(rename = "MIME type")]
    Mime,
    /// Phone number.
    #[serde(rename = "Phone")]
    Phone,
    /// SHA-1 digest.
    #[serde(rename = "SHA-1")]
    Sha1,
    /// SHA-224 digest.
    #[serde(rename = "SHA-224")]
    Sha224,
    /// SHA-256 digest.
    #[serde(rename = "SHA-256")]
    Sha256,
    /// SHA-384 digest.
    #[serde(rename = "SHA-384")]
    Sha384,
    /// SHA-512 digest.
    #[serde(rename = "SHA-512")]
    Sha512,
    /// SHA3-224 digest.
    #[serde(rename = "SHA3-224")]
    Sha3_224,
    /// SHA3-256 digest.
    #[serde(rename = "SHA3-256")]
    Sha3_256,
    /// SHA3-384 digest.
    #[serde(rename = "SHA3-384")]
    Sha3_384,
    /// SHA3-512 digest.
    #[serde(rename = "SHA3-512")]
    Sha3_512,
    /// SHA512-224 digest.
    #[serde(rename = "SHA512-224")]
    Sha512_224,
    /// SHA512-256 digest.
    #[serde(rename = "SHA512-256")]
    Sha512_256,
    /// RFC 3339 timestamp.
    #[serde(rename = "Datetime")]
    Datetime,
    /// UUID.
    #[serde(rename = "UUID")]
    Uuid,
    /// Boolean.
    #[serde(rename = "Boolean")]
    Boolean,
    /// Filesystem or request path (case-preserving text).
    #[serde(rename = "Path")]
    Path,
    /// Composite object identity: UUID, MD5, or SHA3-256.
    #[serde(rename = "UUID|MD5|SHA3-256")]
    Object,
    /// Threat-actor object (case-insensitive text).
    #[serde(rename = "Adversary")]
    Adversary,
}

/// All data types, in declaration order. Used for documentation export and
/// exhaustiveness checks in tests.
pub const ALL_DATA_TYPES: &[DataType] = &[
    DataType::Str,
    DataType::Istr,
    DataType::Ip,
    DataType::Email,
    DataType::Fqdn,
    DataType::Integer,
    DataType::Cidr,
    DataType::City,
    DataType::Country,
    DataType::Float,
    DataType::Url,
    DataType::Md5,
    DataType::Hexadecimal,
    DataType::Base64,
    DataType::Date,
    DataType::Mac,
    DataType::Mime,
    DataType::Phone,
    DataType::Sha1,
    DataType::Sha224,
    DataType::Sha256,
    DataType::Sha384,
    DataType::Sha512,
    DataType::Sha3_224,
    DataType::Sha3_256,
    DataType::Sha3_384,
    DataType::Sha3_512,
    DataType::Sha512_224,
    DataType::Sha512_256,
    DataType::Datetime,
    DataType::Uuid,
    DataType::Boolean,
    DataType::Path,
    DataType::Object,
    DataType::Adversary,
];

impl DataType {
    /// The external string identifier, as serialized in the catalogue.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Str => "Case-sensitive string",
            DataType::Istr => "String",
            DataType::Ip => "IP",
            DataType::Email => "Email",
            DataType::Fqdn => "FQDN",
            DataType::Integer => "Integer",
            DataType::Cidr => "CIDR",
            DataType::City => "City",
            DataType::Country => "Country",
            DataType::Float => "Float",
            DataType::Url => "URL",
            DataType::Md5 => "MD5",
            DataType::Hexadecimal => "Hexadecimal",
            DataType::Base64 => "BASE64",
            DataType::Date => "Date",
            DataType::Mac => "MAC",
            DataType::Mime => "MIME type",
            DataType::Phone => "Phone",
            DataType::Sha1 => "SHA-1",
            DataType::Sha224 => "SHA-224",
            DataType::Sha256 => "SHA-256",
            DataType::Sha384 => "SHA-384",
            DataType::Sha512 => "SHA-512",
            DataType::Sha3_224 => "SHA3-224",
            DataType::Sha3_256 => "SHA3-256",
            DataType::Sha3_384 => "SHA3-384",
            DataType::Sha3_512 => "SHA3-512",
            DataType::Sha512_224 => "SHA512-224",
            DataType::Sha512_256 => "SHA512-256",
            DataType::Datetime => "Datetime",
            DataType::Uuid => "UUID",
            DataType::Boolean => "Boolean",
            DataType::Path => "Path",
            DataType::Object => "UUID|MD5|SHA3-256",
            DataType::Adversary => "Adversary",
        }
    }

    /// Validates a raw value against this data type, producing the
    /// canonical value and its fingerprint. This is the dispatch table:
    /// total over the enumeration, exhaustively checked at compile time.
    pub fn validate(&self, value: &RawValue) -> Result<Validated, ValidationError> {
        match self {
            DataType::Str | DataType::Path => validators::validate_string(value, false),
            DataType::Istr | DataType::City | DataType::Country | DataType::Adversary => {
                validators::validate_string(value, true)
            }
            DataType::Ip => validators::validate_ip(value),
            DataType::Email => validators::validate_email(value),
            DataType::Fqdn => validators::validate_fqdn(value),
            DataType::Integer => validators::validate_integer(value),
            DataType::Cidr => validators::validate_cidr(value),
            DataType::Float => validators::validate_float(value),
            DataType::Url => validators::validate_url(value),
            DataType::Md5 => validators::validate_md5(value),
            DataType::Hexadecimal => validators::validate_hexadecimal(value),
            DataType::Base64 => validators::validate_base64(value),
            DataType::Date => validators::validate_date(value),
            DataType::Mac => validators::validate_mac(value),
            DataType::Mime => validators::validate_mime(value),
            DataType::Phone => validators::validate_phone(value),
            DataType::Sha1 => validators::validate_hex_digest(value, &SHA1_HEX),
            DataType::Sha224 | DataType::Sha3_224 | DataType::Sha512_224 => {
                validators::validate_hex_digest(value, &HEX_224)
            }
            DataType::Sha256 | DataType::Sha3_256 | DataType::Sha512_256 => {
                validators::validate_hex_digest(value, &SHA3_256_HEX)
            }
            DataType::Sha384 | DataType::Sha3_384 => {
                validators::validate_hex_digest(value, &HEX_384)
            }
            DataType::Sha512 | DataType::Sha3_512 => {
                validators::validate_hex_digest(value, &HEX_512)
            }
            DataType::Datetime => validators::validate_datetime(value),
            DataType::Uuid => validators::validate_uuid(value),
            DataType::Boolean => validators::validate_boolean(value),
            DataType::Object => validators::validate_object(value),
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DataType {
    type Err = UnknownDataType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_DATA_TYPES
            .iter()
            .copied()
            .find(|dt| dt.as_str() == s)
            .ok_or_else(|| UnknownDataType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_data_type_round_trips_through_its_identifier() {
        for dt in ALL_DATA_TYPES {
            assert_eq!(dt.as_str().parse::<DataType>().unwrap(), *dt);
            // serde rename stays aligned with as_str
            let json = serde_json::to_string(dt).unwrap();
            assert_eq!(json, format!("\"{}\"", dt.as_str()));
            assert_eq!(serde_json::from_str::<DataType>(&json).unwrap(), *dt);
        }
    }

    #[test]
    fn unknown_identifier_is_a_configuration_error() {
        let err = "SHA-999".parse::<DataType>().unwrap_err();
        assert_eq!(err, UnknownDataType("SHA-999".into()));
        assert_eq!(err.to_string(), "unknown data type: SHA-999");
    }

    #[test]
    fn digest_dispatch_enforces_per_algorithm_lengths() {
        let hex_of = |n: usize| RawValue::Text("a".repeat(n));
        assert!(DataType::Sha1.validate(&hex_of(40)).is_ok());
        assert!(DataType::Sha1.validate(&hex_of(41)).is_err());
        assert!(DataType::Sha224.validate(&hex_of(56)).is_ok());
        assert!(DataType::Sha256.validate(&hex_of(64)).is_ok());
        assert!(DataType::Sha384.validate(&hex_of(96)).is_ok());
        assert!(DataType::Sha512.validate(&hex_of(128)).is_ok());
        assert!(DataType::Sha3_512.validate(&hex_of(127)).is_err());
    }
}
