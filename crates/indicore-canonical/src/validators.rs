//! Per-family format validators.
//!
//! Each validator is a pure function from a [`RawValue`] to a
//! [`Validated`] outcome or a [`ValidationError`]. Validators never mutate
//! shared state and may run concurrently; a failure is deterministic for a
//! given input. Dispatch by declared data type lives in
//! [`crate::datatype::DataType::validate`].

use std::net::IpAddr;

use chrono::{DateTime, NaiveDate};
use url::Url;
use uuid::Uuid;

use crate::canonical::{CanonicalValue, Validated};
use crate::error::ValidationError;
use crate::patterns::{
    Pattern, BASE64, EMAIL, FQDN, HEX_ANY, MAC, MD5_HEX, MD5_SHORT_HEX, MIME, PHONE, SHA3_256_HEX,
};
use crate::value::RawValue;

fn expect_text(value: &RawValue) -> Result<&str, ValidationError> {
    match value {
        RawValue::Text(s) => Ok(s),
        other => Err(ValidationError::TypeMismatch {
            expected: "string",
            value: other.to_string(),
        }),
    }
}

/// Validates a text value. With `insensitive` the canonical form is the
/// lower-cased string, so differently-cased inputs share one fingerprint.
pub fn validate_string(value: &RawValue, insensitive: bool) -> Result<Validated, ValidationError> {
    let v = expect_text(value)?;
    if v.is_empty() {
        return Err(ValidationError::EmptyValue);
    }
    let canonical = if insensitive { v.to_lowercase() } else { v.to_string() };
    Ok(Validated::new(CanonicalValue::Text(canonical)))
}

/// Validates an already-typed 64-bit signed integer. A numeric string is a
/// type mismatch, not a parse candidate.
pub fn validate_integer(value: &RawValue) -> Result<Validated, ValidationError> {
    match value {
        RawValue::Integer(i) => Ok(Validated::new(CanonicalValue::Integer(*i))),
        other => Err(ValidationError::TypeMismatch {
            expected: "integer",
            value: other.to_string(),
        }),
    }
}

/// Validates an already-typed finite float. An integer-typed number is
/// accepted (JSON decoders type whole numbers as integers).
pub fn validate_float(value: &RawValue) -> Result<Validated, ValidationError> {
    let x = match value {
        RawValue::Float(x) => *x,
        RawValue::Integer(i) => *i as f64,
        other => {
            return Err(ValidationError::TypeMismatch {
                expected: "float",
                value: other.to_string(),
            })
        }
    };
    if !x.is_finite() {
        return Err(ValidationError::FormatMismatch {
            value: x.to_string(),
            reason: "non-finite float".to_string(),
        });
    }
    Ok(Validated::new(CanonicalValue::Float(x)))
}

/// Validates an already-typed boolean.
pub fn validate_boolean(value: &RawValue) -> Result<Validated, ValidationError> {
    match value {
        RawValue::Boolean(b) => Ok(Validated::new(CanonicalValue::Boolean(*b))),
        other => Err(ValidationError::TypeMismatch {
            expected: "boolean",
            value: other.to_string(),
        }),
    }
}

/// Validates a `YYYY-MM-DD` calendar date.
pub fn validate_date(value: &RawValue) -> Result<Validated, ValidationError> {
    let v = expect_text(value)?;
    let date = NaiveDate::parse_from_str(v, "%Y-%m-%d").map_err(|e| {
        ValidationError::FormatMismatch {
            value: v.to_string(),
            reason: e.to_string(),
        }
    })?;
    Ok(Validated::new(CanonicalValue::Date(date)))
}

/// Validates an RFC 3339 timestamp with up to nanosecond fractional
/// precision. The canonical form preserves the original offset.
pub fn validate_datetime(value: &RawValue) -> Result<Validated, ValidationError> {
    let v = expect_text(value)?;
    let ts = DateTime::parse_from_rfc3339(v).map_err(|e| ValidationError::FormatMismatch {
        value: v.to_string(),
        reason: e.to_string(),
    })?;
    Ok(Validated::new(CanonicalValue::Datetime(ts)))
}

/// Validates a UUID in any standard textual form; the canonical form is the
/// lower-case hyphenated rendering.
pub fn validate_uuid(value: &RawValue) -> Result<Validated, ValidationError> {
    let v = expect_text(value)?;
    let u = Uuid::parse_str(&v.to_lowercase()).map_err(|e| ValidationError::FormatMismatch {
        value: v.to_string(),
        reason: e.to_string(),
    })?;
    Ok(Validated::new(CanonicalValue::Uuid(u)))
}

/// Validates an absolute URL. Scheme and host are lower-cased by the
/// re-serialization; path, query, and fragment case is preserved.
pub fn validate_url(value: &RawValue) -> Result<Validated, ValidationError> {
    let v = expect_text(value)?;
    let url = Url::parse(v).map_err(|e| ValidationError::FormatMismatch {
        value: v.to_string(),
        reason: e.to_string(),
    })?;
    Ok(Validated::new(CanonicalValue::Text(url.to_string())))
}

/// Validates an IPv4 or IPv6 literal; the canonical form is the parsed
/// address re-rendered (compressed lowercase for IPv6).
pub fn validate_ip(value: &RawValue) -> Result<Validated, ValidationError> {
    let v = expect_text(value)?;
    let addr: IpAddr = v.parse().map_err(|_| ValidationError::FormatMismatch {
        value: v.to_string(),
        reason: "not an IPv4 or IPv6 address".to_string(),
    })?;
    Ok(Validated::new(CanonicalValue::Text(addr.to_string())))
}

/// Validates an `addr/prefix` network segment; prefix bounds follow the
/// address family.
pub fn validate_cidr(value: &RawValue) -> Result<Validated, ValidationError> {
    let v = expect_text(value)?;
    let mismatch = |reason: &str| ValidationError::FormatMismatch {
        value: v.to_string(),
        reason: reason.to_string(),
    };
    let (addr_part, prefix_part) = v
        .split_once('/')
        .ok_or_else(|| mismatch("expected addr/prefix notation"))?;
    let addr: IpAddr = addr_part
        .parse()
        .map_err(|_| mismatch("not an IPv4 or IPv6 address"))?;
    let prefix: u8 = prefix_part
        .parse()
        .map_err(|_| mismatch("prefix is not a number"))?;
    let max = match addr {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    };
    if prefix > max {
        return Err(mismatch("prefix out of range for address family"));
    }
    Ok(Validated::new(CanonicalValue::Text(format!(
        "{}/{}",
        addr, prefix
    ))))
}

/// Validates a MAC address; `:` and `-` separators are accepted, the
/// canonical form uses `:` with lowercase octet pairs.
pub fn validate_mac(value: &RawValue) -> Result<Validated, ValidationError> {
    let v = expect_text(value)?;
    let canonical = v.to_lowercase().replace('-', ":");
    MAC.check(&canonical)?;
    Ok(Validated::new(CanonicalValue::Text(canonical)))
}

/// Validates a mailbox address; the canonical form is lower-cased.
pub fn validate_email(value: &RawValue) -> Result<Validated, ValidationError> {
    let v = expect_text(value)?;
    let canonical = v.to_lowercase();
    EMAIL.check(&canonical)?;
    Ok(Validated::new(CanonicalValue::Text(canonical)))
}

/// Validates a fully-qualified domain name; single unqualified labels are
/// rejected. The canonical form is lower-cased.
pub fn validate_fqdn(value: &RawValue) -> Result<Validated, ValidationError> {
    let v = expect_text(value)?;
    let canonical = v.to_lowercase();
    FQDN.check(&canonical)?;
    Ok(Validated::new(CanonicalValue::Text(canonical)))
}

/// Validates a phone number. Spaces, dots, hyphens, and parentheses are
/// stripped; the remainder must be an optional `+` and 5-15 digits.
pub fn validate_phone(value: &RawValue) -> Result<Validated, ValidationError> {
    let v = expect_text(value)?;
    let canonical: String = v
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '(' | ')'))
        .collect();
    if let Err(ValidationError::FormatMismatch { reason, .. }) = PHONE.check(&canonical) {
        // Report the caller's original rendering, not the stripped one.
        return Err(ValidationError::FormatMismatch {
            value: v.to_string(),
            reason,
        });
    }
    Ok(Validated::new(CanonicalValue::Text(canonical)))
}

/// Validates a two-part MIME media type; the canonical form is lower-cased.
pub fn validate_mime(value: &RawValue) -> Result<Validated, ValidationError> {
    let v = expect_text(value)?;
    let canonical = v.to_lowercase();
    MIME.check(&canonical)?;
    Ok(Validated::new(CanonicalValue::Text(canonical)))
}

/// Validates a hexadecimal string. An optional `0x` prefix is stripped; the
/// canonical form is the unprefixed lowercase hex.
pub fn validate_hexadecimal(value: &RawValue) -> Result<Validated, ValidationError> {
    let v = expect_text(value)?;
    let lowered = v.to_lowercase();
    let unprefixed = lowered.strip_prefix("0x").unwrap_or(&lowered);
    HEX_ANY.check(unprefixed)?;
    Ok(Validated::new(CanonicalValue::Text(unprefixed.to_string())))
}

/// Validates a standard-alphabet base64 string (case preserved; base64 is
/// case-significant).
pub fn validate_base64(value: &RawValue) -> Result<Validated, ValidationError> {
    let v = expect_text(value)?;
    BASE64.check(v)?;
    Ok(Validated::new(CanonicalValue::Text(v.to_string())))
}

/// Validates a fixed-length hex digest against `pattern`; the canonical
/// form is lower-cased.
pub fn validate_hex_digest(
    value: &RawValue,
    pattern: &Pattern,
) -> Result<Validated, ValidationError> {
    let v = expect_text(value)?;
    let canonical = v.to_lowercase();
    pattern.check(&canonical)?;
    Ok(Validated::new(CanonicalValue::Text(canonical)))
}

/// Validates an MD5 digest. Both the standard 32-hex form and the
/// truncated 16-hex convention are accepted and fingerprint
/// interchangeably; the catalogue declares a single `md5` type, so the
/// short form is not a distinct identity for correlation.
pub fn validate_md5(value: &RawValue) -> Result<Validated, ValidationError> {
    let v = expect_text(value)?;
    let canonical = v.to_lowercase();
    if canonical.chars().count() == 32 {
        MD5_HEX.check(&canonical)?;
    } else {
        MD5_SHORT_HEX.check(&canonical)?;
    }
    Ok(Validated::new(CanonicalValue::Text(canonical)))
}

/// Validates a composite object identifier: a 32-hex MD5 digest, a
/// 64-hex SHA3-256 digest, or a hyphenated UUID, tried in that order.
/// Digest shapes win over the UUID parse so that a digest-valued object
/// fingerprints identically to the same value under its digest type.
pub fn validate_object(value: &RawValue) -> Result<Validated, ValidationError> {
    let v = expect_text(value)?;
    let lowered = v.to_lowercase();
    if MD5_HEX.is_match(&lowered) || SHA3_256_HEX.is_match(&lowered) {
        return Ok(Validated::new(CanonicalValue::Text(lowered)));
    }
    if lowered.contains('-') {
        if let Ok(u) = Uuid::parse_str(&lowered) {
            return Ok(Validated::new(CanonicalValue::Uuid(u)));
        }
    }
    Err(ValidationError::FormatMismatch {
        value: v.to_string(),
        reason: "expected a UUID, a 32-character MD5 digest, or a 64-character SHA3-256 digest"
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::fingerprint;

    #[test]
    fn string_case_sensitivity_controls_fingerprint_identity() {
        let upper = validate_string(&"ABC".into(), true).unwrap();
        let lower = validate_string(&"abc".into(), true).unwrap();
        assert_eq!(upper.fingerprint, lower.fingerprint);

        let upper = validate_string(&"ABC".into(), false).unwrap();
        let lower = validate_string(&"abc".into(), false).unwrap();
        assert_ne!(upper.fingerprint, lower.fingerprint);
    }

    #[test]
    fn empty_string_is_rejected() {
        assert_eq!(
            validate_string(&"".into(), false).unwrap_err(),
            ValidationError::EmptyValue
        );
    }

    #[test]
    fn integer_requires_typed_input() {
        assert!(matches!(
            validate_integer(&"42".into()).unwrap_err(),
            ValidationError::TypeMismatch { expected: "integer", .. }
        ));
        let outcome = validate_integer(&42i64.into()).unwrap();
        assert_eq!(outcome.value.canonical_text(), "42");
    }

    #[test]
    fn float_accepts_integer_arm_and_rejects_non_finite() {
        let from_int = validate_float(&5i64.into()).unwrap();
        let from_float = validate_float(&5.0f64.into()).unwrap();
        assert_eq!(from_int.fingerprint, from_float.fingerprint);
        assert!(validate_float(&f64::NAN.into()).is_err());
        assert!(validate_float(&f64::INFINITY.into()).is_err());
    }

    #[test]
    fn date_round_trips_canonical_form() {
        let outcome = validate_date(&"2024-01-05".into()).unwrap();
        assert_eq!(outcome.value.canonical_text(), "2024-01-05");
        assert!(validate_date(&"2024-13-05".into()).is_err());
        assert!(validate_date(&"05/01/2024".into()).is_err());
    }

    #[test]
    fn datetime_preserves_fractional_precision_and_offset() {
        let outcome = validate_datetime(&"2024-01-05T10:20:30.123456789Z".into()).unwrap();
        assert_eq!(
            outcome.value.canonical_text(),
            "2024-01-05T10:20:30.123456789Z"
        );
        let outcome = validate_datetime(&"2024-01-05T10:20:30+02:00".into()).unwrap();
        assert_eq!(outcome.value.canonical_text(), "2024-01-05T10:20:30+02:00");
        assert!(validate_datetime(&"2024-01-05 10:20:30".into()).is_err());
    }

    #[test]
    fn md5_accepts_both_lengths_and_lowercases() {
        let outcome = validate_md5(&"D41D8CD98F00B204E9800998ECF8427E".into()).unwrap();
        assert_eq!(
            outcome.value.canonical_text(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
        assert!(validate_md5(&"d41d8cd98f00b204".into()).is_ok());
        assert!(matches!(
            validate_md5(&"not-hex!!".into()).unwrap_err(),
            ValidationError::FormatMismatch { .. }
        ));
        // 31 chars: falls into the short-form branch and fails there.
        assert!(validate_md5(&"d41d8cd98f00b204e9800998ecf8427".into()).is_err());
    }

    #[test]
    fn url_lowercases_scheme_and_host_only() {
        let outcome = validate_url(&"HTTP://Example.COM/Path".into()).unwrap();
        assert_eq!(outcome.value.canonical_text(), "http://example.com/Path");
        assert_eq!(
            outcome.fingerprint,
            validate_url(&"http://example.com/Path".into()).unwrap().fingerprint
        );
        assert!(validate_url(&"/relative/only".into()).is_err());
    }

    #[test]
    fn uuid_normalizes_to_lowercase_hyphenated() {
        let outcome = validate_uuid(&"F81D4FAE-7DEC-11D0-A765-00A0C91E6BF6".into()).unwrap();
        assert_eq!(
            outcome.value.canonical_text(),
            "f81d4fae-7dec-11d0-a765-00a0c91e6bf6"
        );
        assert!(validate_uuid(&"f81d4fae-7dec-11d0-a765".into()).is_err());
    }

    #[test]
    fn ip_collapses_equivalent_renderings() {
        let a = validate_ip(&"2001:0DB8::1".into()).unwrap();
        let b = validate_ip(&"2001:db8::1".into()).unwrap();
        assert_eq!(a.fingerprint, b.fingerprint);
        assert_eq!(a.value.canonical_text(), "2001:db8::1");
        assert!(validate_ip(&"999.1.1.1".into()).is_err());
    }

    #[test]
    fn cidr_bounds_prefix_by_family() {
        assert_eq!(
            validate_cidr(&"10.0.0.0/8".into())
                .unwrap()
                .value
                .canonical_text(),
            "10.0.0.0/8"
        );
        assert!(validate_cidr(&"10.0.0.0/33".into()).is_err());
        assert!(validate_cidr(&"2001:db8::/64".into()).is_ok());
        assert!(validate_cidr(&"10.0.0.0".into()).is_err());
    }

    #[test]
    fn mac_canonicalizes_separators() {
        let hyphen = validate_mac(&"AA-BB-CC-DD-EE-FF".into()).unwrap();
        let colon = validate_mac(&"aa:bb:cc:dd:ee:ff".into()).unwrap();
        assert_eq!(hyphen.fingerprint, colon.fingerprint);
        assert_eq!(hyphen.value.canonical_text(), "aa:bb:cc:dd:ee:ff");
        assert!(validate_mac(&"aa:bb:cc:dd:ee".into()).is_err());
    }

    #[test]
    fn phone_strips_separators_before_matching() {
        let formatted = validate_phone(&"+1 (555) 123-4567".into()).unwrap();
        assert_eq!(formatted.value.canonical_text(), "+15551234567");
        assert!(validate_phone(&"call me".into()).is_err());
    }

    #[test]
    fn hexadecimal_strips_prefix_and_lowercases() {
        let outcome = validate_hexadecimal(&"0xDEADBEEF".into()).unwrap();
        assert_eq!(outcome.value.canonical_text(), "deadbeef");
        assert_eq!(
            outcome.fingerprint,
            validate_hexadecimal(&"deadbeef".into()).unwrap().fingerprint
        );
        assert!(validate_hexadecimal(&"0x".into()).is_err());
    }

    #[test]
    fn object_accepts_any_of_the_three_identity_shapes() {
        assert!(validate_object(&"f81d4fae-7dec-11d0-a765-00a0c91e6bf6".into()).is_ok());
        assert!(validate_object(&"d41d8cd98f00b204e9800998ecf8427e".into()).is_ok());
        let sha3 = fingerprint("x").as_hex().to_string();
        assert!(validate_object(&RawValue::Text(sha3)).is_ok());
        assert!(validate_object(&"short".into()).is_err());
    }

    #[test]
    fn object_md5_keeps_the_digest_form_and_fingerprint() {
        let digest = "d41d8cd98f00b204e9800998ecf8427e";
        let as_object = validate_object(&digest.into()).unwrap();
        let as_md5 = validate_md5(&digest.into()).unwrap();
        assert_eq!(as_object.value.canonical_text(), digest);
        assert_eq!(as_object.fingerprint, as_md5.fingerprint);
    }

    #[test]
    fn type_mismatch_is_uniform_across_text_validators() {
        for result in [
            validate_date(&7i64.into()),
            validate_url(&7i64.into()),
            validate_md5(&7i64.into()),
            validate_mime(&true.into()),
        ] {
            assert!(matches!(
                result.unwrap_err(),
                ValidationError::TypeMismatch { expected: "string", .. }
            ));
        }
    }
}
