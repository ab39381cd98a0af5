use crate::RedactedToken;

/// **VALUE**: Verifies that Debug and Display never print the wrapped token.
///
/// **WHY THIS MATTERS**: Bearer tokens grant full account access. The logger
/// formats errors and state with `{}`/`{:?}`; if either impl leaked the value,
/// every log file would become a credential store.
///
/// **BUG THIS CATCHES**: Would catch replacing the manual Debug impl with
/// `#[derive(Debug)]`.
#[test]
fn given_token_when_formatted_then_value_is_redacted() {
    // GIVEN: A wrapped token
    let token = RedactedToken::new(String::from("secret-bearer-value"));

    // WHEN: Formatting both ways
    let debug = format!("{:?}", token);
    let display = format!("{}", token);

    // THEN: Neither output contains the raw value
    assert!(!debug.contains("secret-bearer-value"), "Debug must redact");
    assert!(!display.contains("secret-bearer-value"), "Display must redact");
    assert!(debug.contains("REDACTED"), "Debug should say REDACTED");
    assert!(display.contains("REDACTED"), "Display should say REDACTED");
}

/// **VALUE**: Verifies that the raw value stays reachable through `as_str()`.
///
/// **WHY THIS MATTERS**: The client core attaches the credential with
/// `bearer_auth(token.as_str())`. If redaction also hid the accessor, no
/// request could ever be authenticated.
///
/// **BUG THIS CATCHES**: Would catch an over-eager redaction that mangles the
/// stored value or trims it.
#[test]
fn given_token_when_accessed_explicitly_then_exact_value_is_returned() {
    let token = RedactedToken::new(String::from("tok-123"));

    assert_eq!(token.as_str(), "tok-123");
    assert_eq!(token.len(), 7);
    assert!(!token.is_empty());
    assert!(RedactedToken::new(String::new()).is_empty());
}

/// **VALUE**: Verifies that serde refuses to serialize a redacted token.
///
/// **WHY THIS MATTERS**: Config and session files are serialized with serde.
/// A token that silently serialized could end up persisted or sent anywhere a
/// DTO travels; the explicit error forces callers through `as_str()`.
///
/// **BUG THIS CATCHES**: Would catch replacing the refusing Serialize impl
/// with a derived one.
#[test]
fn given_token_when_serialized_then_serde_errors() {
    let token = RedactedToken::new(String::from("leaky"));

    let result = serde_json::to_string(&token);

    assert!(result.is_err(), "Serialization must be refused");
    let message = result.unwrap_err().to_string();
    assert!(
        message.contains("cannot be serialized"),
        "Error should explain the refusal, got: {message}"
    );
    assert!(!message.contains("leaky"), "Error must not echo the value");
}
