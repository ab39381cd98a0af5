use client_core::error::{ApiError, CoreError};

use common::ErrorLocation;

use url::Url;

/// **VALUE**: Verifies `ApiError` carries file/line/column location tracking
/// through its Display output.
///
/// **WHY THIS MATTERS**: When a request fails in production, developers need
/// to know EXACTLY where the error originated (which file, which line).
/// Without location tracking, debugging API failures becomes a guessing game.
///
/// **BUG THIS CATCHES**: Dropping the `location` field, the Display
/// interpolation of it, or `#[track_caller]` from the constructors.
#[test]
fn given_api_error_when_formatted_then_includes_location() {
    // GIVEN: An application error built from a server response
    let err = ApiError::from_response(404, r#"{"message": "User not found"}"#);

    // WHEN: Rendering it the way the logs do
    let error_string = format!("{}", err);

    // THEN: Should include error type, status, message, and file location
    assert!(error_string.contains("API Error"));
    assert!(error_string.contains("HTTP 404"));
    assert!(error_string.contains("User not found"));
    assert!(error_string.contains("api.rs"));
}

#[test]
fn given_from_response_with_json_message_then_fields_populated() {
    let err = ApiError::from_response(409, r#"{"message": "Email already in use"}"#);

    assert_eq!(err.status_code(), Some(409));
    assert_eq!(err.message(), "Email already in use");
    assert_eq!(err.error_category(), "client_error");
    assert!(!err.is_transport());
    assert!(!err.is_auth_failure());
}

#[test]
fn given_from_response_with_auth_statuses_then_flagged() {
    assert!(ApiError::from_response(401, "").is_auth_failure());
    assert!(ApiError::from_response(403, "").is_auth_failure());
    assert!(!ApiError::from_response(404, "").is_auth_failure());
    assert!(!ApiError::from_response(500, "").is_auth_failure());
}

#[test]
fn given_transport_error_when_formatted_then_includes_location() {
    let err = ApiError::Transport {
        message: "connection refused".to_string(),
        is_timeout: false,
        is_connection: true,
        location: ErrorLocation::caller(),
    };

    let error_string = format!("{}", err);

    assert!(error_string.contains("Transport Error"));
    assert!(error_string.contains("connection refused"));
    assert!(error_string.contains("api.rs"));
}

#[test]
fn given_transport_flags_when_categorized_then_specific_labels() {
    let timeout = ApiError::Transport {
        message: "timed out".to_string(),
        is_timeout: true,
        is_connection: false,
        location: ErrorLocation::caller(),
    };
    let connection = ApiError::Transport {
        message: "refused".to_string(),
        is_timeout: false,
        is_connection: true,
        location: ErrorLocation::caller(),
    };
    let other = ApiError::Transport {
        message: "stream reset".to_string(),
        is_timeout: false,
        is_connection: false,
        location: ErrorLocation::caller(),
    };

    assert_eq!(timeout.error_category(), "timeout");
    assert_eq!(connection.error_category(), "connection");
    assert_eq!(other.error_category(), "transport");
}

/// **VALUE**: Verifies `message()` is uniform across variants so callers can
/// always show something human-readable without matching on the enum.
#[test]
fn given_any_variant_when_message_then_human_readable() {
    let transport = ApiError::Transport {
        message: "no route to host".to_string(),
        is_timeout: false,
        is_connection: true,
        location: ErrorLocation::caller(),
    };
    let api = ApiError::from_response(500, r#"{"message": "boom"}"#);
    let url = ApiError::url("base URL 'data:text/plain' cannot carry endpoint paths");

    assert_eq!(transport.message(), "no route to host");
    assert_eq!(api.message(), "boom");
    assert!(url.message().contains("cannot carry endpoint paths"));
}

#[test]
fn given_invalid_url_when_converted_then_url_variant() {
    let parse_err = Url::parse("not a url").unwrap_err();

    let err = ApiError::from(parse_err);

    assert_eq!(err.error_category(), "url");
    assert_eq!(err.status_code(), None);
    assert!(format!("{}", err).contains("URL Error"));
}

/// **BUG THIS CATCHES**: A base URL with an unsupported scheme slipping
/// past the builder and failing later with an opaque request error.
#[test]
fn given_non_http_scheme_when_building_client_then_url_error() {
    let result = client_core::UserdeskClient::builder()
        .base_url("ftp://127.0.0.1:3000/api/users")
        .session(client_core::session::SessionStore::in_memory())
        .build();

    let err = result.unwrap_err();
    assert_eq!(err.error_category(), "url");
    assert!(err.message().contains("must be http or https"));
}

/// **BUG THIS CATCHES**: The aggregate error changing the text of the
/// errors it wraps; `#[error(transparent)]` must stay transparent.
#[test]
fn given_core_error_when_formatted_then_same_as_inner() {
    let inner = ApiError::from_response(502, r#"{"message": "bad gateway"}"#);
    let inner_string = format!("{}", inner);

    let core = CoreError::from(inner);

    assert_eq!(format!("{}", core), inner_string);
}
