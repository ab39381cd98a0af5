use crate::HttpStatusCode;

/// **VALUE**: Verifies the 4xx/5xx boundaries of the status categorization helpers.
///
/// **WHY THIS MATTERS**: Error reporting in the client core picks its category
/// ("client_error" vs "server_error") from these predicates. Off-by-one boundaries
/// would misclassify 400/500 responses in logs and test assertions.
///
/// **BUG THIS CATCHES**: Would catch a range typo such as `(400..=500)` or `(401..500)`.
#[test]
fn given_status_codes_when_categorized_then_ranges_are_exact() {
    // GIVEN / WHEN / THEN: Boundary values on both sides of each range
    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(499).is_client_error());
    assert!(!HttpStatusCode(399).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());

    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(599).is_server_error());
    assert!(!HttpStatusCode(499).is_server_error());
    assert!(!HttpStatusCode(600).is_server_error());
}

/// **VALUE**: Verifies that exactly 401 and 403 count as credential rejections.
///
/// **WHY THIS MATTERS**: The CLI drops the stored session when it sees an auth
/// error. If `is_auth_error()` matched too broadly (e.g. any 4xx), a plain 404
/// would log the operator out; too narrowly, and a revoked token would never
/// trigger re-authentication.
///
/// **BUG THIS CATCHES**: Would catch widening the match to `is_client_error()`
/// or forgetting 403.
#[test]
fn given_auth_statuses_when_checked_then_only_401_and_403_match() {
    assert!(HttpStatusCode(401).is_auth_error());
    assert!(HttpStatusCode(403).is_auth_error());

    assert!(!HttpStatusCode(400).is_auth_error());
    assert!(!HttpStatusCode(402).is_auth_error());
    assert!(!HttpStatusCode(404).is_auth_error());
    assert!(!HttpStatusCode(500).is_auth_error());
}

/// **VALUE**: Verifies Display and `From<u16>` round the raw code through unchanged.
///
/// **WHY THIS MATTERS**: Status codes are embedded in error messages
/// (`HTTP 409 - ...`); a lossy conversion would make server failures unreadable.
///
/// **BUG THIS CATCHES**: Would catch a Display impl that formats the struct name
/// instead of the number.
#[test]
fn given_raw_code_when_converted_and_formatted_then_value_is_preserved() {
    let status = HttpStatusCode::from(409u16);
    assert_eq!(status, HttpStatusCode(409));
    assert_eq!(format!("{}", status), "409");
}
