use crate::RedactedApiKey;

/// **VALUE**: Verifies the key never leaks through `{:?}` or `{}`.
///
/// **WHY THIS MATTERS**: `CodeClient` derives Debug and is logged at debug level.
/// A leaking Debug impl would write the bearer token into log files.
#[test]
fn given_api_key_when_formatted_then_value_is_redacted() {
    let key = RedactedApiKey::new("super-secret-token");

    let debug = format!("{:?}", key);
    let display = format!("{}", key);

    assert!(!debug.contains("super-secret-token"));
    assert!(!display.contains("super-secret-token"));
    assert!(debug.contains("REDACTED"));
}

#[test]
fn given_api_key_when_serialized_then_refused_with_type_name() {
    let key = RedactedApiKey::new("super-secret-token");

    let err = serde_json::to_string(&key).unwrap_err();

    assert!(err.to_string().contains("RedactedApiKey refuses to be serialized"));
    assert!(!err.to_string().contains("super-secret-token"));
}

#[test]
fn given_api_key_when_building_header_then_uses_bearer_scheme() {
    let key = RedactedApiKey::new("abc123");

    assert_eq!(key.bearer_value(), "Bearer abc123");
    assert_eq!(key.char_count(), 6);
    assert!(!key.is_empty());
    assert!(RedactedApiKey::new("").is_empty());
}
