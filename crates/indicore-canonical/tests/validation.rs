use indicore_canonical::{
    fingerprint, CanonicalValue, DataType, Fingerprint, RawValue, StatusCode, Validated,
    ValidationError,
};

#[test]
fn equal_canonical_forms_collapse_to_one_fingerprint() {
    // Differently-rendered raw inputs that normalize identically must be
    // indistinguishable downstream: the fingerprint is the correlation key.
    let pairs: &[(DataType, &str, &str)] = &[
        (DataType::Istr, "ABC", "abc"),
        (DataType::Md5, "D41D8CD98F00B204E9800998ECF8427E", "d41d8cd98f00b204e9800998ecf8427e"),
        (DataType::Url, "HTTP://Example.COM/Path", "http://example.com/Path"),
        (DataType::Uuid, "F81D4FAE-7DEC-11D0-A765-00A0C91E6BF6", "f81d4fae-7dec-11d0-a765-00a0c91e6bf6"),
        (DataType::Ip, "2001:0DB8::1", "2001:db8::1"),
        (DataType::Mac, "AA-BB-CC-DD-EE-FF", "aa:bb:cc:dd:ee:ff"),
        (DataType::Email, "Alice@Example.COM", "alice@example.com"),
    ];
    for (dt, a, b) in pairs {
        let left = dt.validate(&(*a).into()).unwrap();
        let right = dt.validate(&(*b).into()).unwrap();
        assert_eq!(left.fingerprint, right.fingerprint, "{dt}: {a} vs {b}");
        assert_eq!(left.value.canonical_text(), *b, "{dt}: canonical form");
    }
}

#[test]
fn fingerprint_is_the_digest_of_the_canonical_text_never_the_raw_input() {
    let outcome = DataType::Istr.validate(&"MiXeD".into()).unwrap();
    assert_eq!(outcome.fingerprint, fingerprint("mixed"));
    assert_ne!(outcome.fingerprint, fingerprint("MiXeD"));
}

#[test]
fn case_sensitive_types_keep_distinct_identities() {
    let upper = DataType::Str.validate(&"ABC".into()).unwrap();
    let lower = DataType::Str.validate(&"abc".into()).unwrap();
    assert_ne!(upper.fingerprint, lower.fingerprint);
}

#[test]
fn date_round_trips_through_the_calendar_pattern() {
    let outcome = DataType::Date.validate(&"2024-01-05".into()).unwrap();
    assert_eq!(outcome.value.canonical_text(), "2024-01-05");
    assert_eq!(outcome.fingerprint, fingerprint("2024-01-05"));
}

#[test]
fn malformed_digests_fail_with_format_mismatch() {
    let err = DataType::Md5.validate(&"not-hex!!".into()).unwrap_err();
    match &err {
        ValidationError::FormatMismatch { value, reason } => {
            assert_eq!(value, "not-hex!!");
            assert!(reason.contains("pattern"));
        }
        other => panic!("expected FormatMismatch, got {other:?}"),
    }
    assert_eq!(err.transport_status(), 400);
    assert_eq!(err.status_code(), StatusCode::InvalidArgument);
}

#[test]
fn numeric_strings_are_type_mismatches_for_integer() {
    let err = DataType::Integer.validate(&"42".into()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::TypeMismatch {
            expected: "integer",
            value: "42".into(),
        }
    );
}

#[test]
fn validated_serializes_value_and_hex_fingerprint() {
    let outcome = DataType::Integer.validate(&42i64.into()).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["value"], serde_json::json!(42));
    let hex = json["fingerprint"].as_str().unwrap();
    assert_eq!(hex.len(), 64);
    assert!(Fingerprint::parse(hex).is_ok());
}

#[test]
fn outcome_is_reconstructible_from_its_canonical_value() {
    // Both fields of an outcome always travel together; rebuilding from the
    // canonical value alone reproduces the identical fingerprint.
    let outcome = DataType::Datetime
        .validate(&"2024-01-05T10:20:30.5Z".into())
        .unwrap();
    let rebuilt = Validated::new(outcome.value.clone());
    assert_eq!(outcome, rebuilt);
}

#[test]
fn raw_value_kind_names_surface_in_mismatch_messages() {
    let err = DataType::Boolean
        .validate(&RawValue::Text("yes".into()))
        .unwrap_err();
    assert_eq!(err.to_string(), "value is not boolean: yes");
}

#[test]
fn canonical_value_display_matches_canonical_text() {
    let outcome = DataType::Uuid
        .validate(&"F81D4FAE-7DEC-11D0-A765-00A0C91E6BF6".into())
        .unwrap();
    assert_eq!(outcome.value.to_string(), outcome.value.canonical_text());
    assert!(matches!(outcome.value, CanonicalValue::Uuid(_)));
}
