use client_core::error::{ApiError, SessionError};

use std::error::Error;
use std::io::Error as IoError;
use std::io::ErrorKind;
use std::path::PathBuf;

/// **VALUE**: Verifies write failures name the path and keep the OS error
/// in the source chain.
///
/// **WHY THIS MATTERS**: "Permission denied" alone is useless; the user
/// needs to know WHICH file could not be written to fix it.
///
/// **BUG THIS CATCHES**: Would catch if someone removes the `#[source]`
/// attribute and the underlying IO error disappears from the chain.
#[test]
fn given_write_error_when_formatted_then_includes_path_and_source() {
    // GIVEN: A write failure against a concrete path
    let io_err = IoError::new(ErrorKind::PermissionDenied, "permission denied");
    let err = SessionError::write(PathBuf::from("/var/lib/userdesk/session.json"), io_err);

    // WHEN: Rendering it the way the logs do
    let error_string = format!("{}", err);

    // THEN: Should include error type, path, cause, and file location
    assert!(error_string.contains("Session Write Error"));
    assert!(error_string.contains("/var/lib/userdesk/session.json"));
    assert!(error_string.contains("permission denied"));
    assert!(error_string.contains("session.rs"));

    // AND: The source chain is preserved
    let source = err.source().expect("source should be preserved");
    assert_eq!(source.to_string(), "permission denied");
}

#[test]
fn given_remove_error_when_formatted_then_includes_path() {
    let io_err = IoError::new(ErrorKind::PermissionDenied, "operation not permitted");
    let err = SessionError::remove(PathBuf::from("/etc/userdesk/session.json"), io_err);

    let error_string = format!("{}", err);

    assert!(error_string.contains("Session Remove Error"));
    assert!(error_string.contains("/etc/userdesk/session.json"));
}

#[test]
fn given_path_detection_error_when_formatted_then_includes_hint() {
    let err = SessionError::path_detection(
        "Cannot determine userdesk data directory. Set USERDESK_DATA_DIR environment variable.",
    );

    let error_string = format!("{}", err);

    assert!(error_string.contains("Session Path Error"));
    assert!(error_string.contains("USERDESK_DATA_DIR"));
}

/// **VALUE**: Verifies session failures fold into the API error surface so
/// a login whose persistence fails still comes back as one error type.
#[test]
fn given_session_error_when_wrapped_in_api_error_then_category_and_message_carry() {
    let io_err = IoError::new(ErrorKind::PermissionDenied, "permission denied");
    let session_err = SessionError::write(PathBuf::from("/tmp/session.json"), io_err);
    let expected_message = session_err.to_string();

    let err = ApiError::from(session_err);

    assert_eq!(err.error_category(), "session");
    assert_eq!(err.status_code(), None);
    assert_eq!(err.message(), expected_message);
    assert!(!err.is_transport());
}
