// Unit tests for the CLI error type

use crate::error::UserdeskError;

use client_core::error::{ApiError, CoreError};

use common::ErrorLocation;

#[test]
fn given_userdesk_error_when_displayed_then_shows_message_and_location() {
    let err = UserdeskError::userdesk("Failed to read confirmation");

    let shown = err.to_string();
    assert!(
        shown.starts_with("Userdesk Error: Failed to read confirmation"),
        "Display should lead with the variant prefix and message: {shown}"
    );
    assert!(
        shown.contains("error.rs"),
        "Display should carry the raising location: {shown}"
    );
}

/// **VALUE**: Verifies the conversion path every `?` in the CLI relies on.
///
/// **WHY THIS MATTERS**: Core errors cross into the CLI as flattened text.
/// If the conversion dropped the underlying message, users would see a bare
/// variant name instead of what actually went wrong.
#[test]
fn given_core_error_when_converted_then_message_is_preserved() {
    let api = ApiError::from_response(404, r#"{"message":"User not found"}"#);
    let err = UserdeskError::from(CoreError::from(api));

    assert!(matches!(err, UserdeskError::Core { .. }));
    assert!(
        err.message().contains("User not found"),
        "Server message should survive the conversion: {}",
        err.message()
    );
}

#[test]
fn given_error_variants_when_message_called_then_returns_bare_text() {
    let err = UserdeskError::userdesk("prompt failed");
    assert_eq!(err.message(), "prompt failed");

    let core = UserdeskError::Core {
        message: String::from("HTTP 500"),
        location: ErrorLocation::caller(),
    };
    assert_eq!(core.message(), "HTTP 500");
}
