// Integration tests for error normalization on live responses.
// Application errors (the server answered) and transport errors (it did
// not) must be reliably distinguishable, and the server's own message
// must survive the trip.

use super::helpers::{client_for, logged_in_client, sample_user, API_PREFIX};

use client_core::session::SessionStore;
use client_core::UserdeskClient;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies a structured error body surfaces its message and
/// keeps the raw payload.
///
/// **WHY THIS MATTERS**: "Email already in use" style messages are written
/// by the server for end users. Swallowing them and showing a generic
/// failure makes every 4xx look the same.
#[tokio::test]
async fn given_json_error_body_when_request_then_message_extracted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PREFIX))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"message": "boom", "incident": 4217})),
        )
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server, "tok");

    let err = client.list_users().await.unwrap_err();

    assert_eq!(err.status_code(), Some(500));
    assert_eq!(err.message(), "boom");
    assert_eq!(err.error_category(), "server_error");
    assert!(!err.is_transport());
    // Full body retained for callers that want more than the message
    assert_eq!(err.raw_body().unwrap()["incident"], 4217);
}

#[tokio::test]
async fn given_plain_text_error_body_when_request_then_text_is_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PREFIX))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad input"))
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);

    let err = client.list_users().await.unwrap_err();

    assert_eq!(err.status_code(), Some(400));
    assert_eq!(err.message(), "Bad input");
    assert!(err.raw_body().is_none());
}

#[tokio::test]
async fn given_empty_error_body_when_request_then_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PREFIX}/404")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);

    let err = client.get_user(404).await.unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.message(), "HTTP 404");
    assert_eq!(err.error_category(), "client_error");
}

#[tokio::test]
async fn given_json_error_without_message_when_request_then_generic_message_and_body_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PREFIX))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"errors": ["email taken"]})),
        )
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);

    let err = client.list_users().await.unwrap_err();

    assert_eq!(err.message(), "HTTP 422");
    assert_eq!(err.raw_body().unwrap()["errors"][0], "email taken");
}

/// **VALUE**: Verifies 401/403 are flagged as credential rejections while
/// the session itself is left untouched.
///
/// **WHY THIS MATTERS**: The caller decides whether an auth failure means
/// "drop the session and re-login". If the client cleared it on its own,
/// a single flaky 401 from a proxy would log the user out.
#[tokio::test]
async fn given_auth_rejection_when_request_then_flagged_and_session_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PREFIX))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "jwt expired"})))
        .mount(&server)
        .await;

    let (client, session) = logged_in_client(&server, "expired-tok");

    let err = client.list_users().await.unwrap_err();

    assert!(err.is_auth_failure());
    assert_eq!(err.message(), "jwt expired");
    // The client never drops the session on its own
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn given_forbidden_when_request_then_auth_failure_flagged() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{API_PREFIX}/1")))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "admins only"})))
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server, "tok");

    let err = client.delete_user(1).await.unwrap_err();

    assert!(err.is_auth_failure());
    assert_eq!(err.status_code(), Some(403));
}

/// **VALUE**: Verifies a dead server produces a transport error with no
/// status, cleanly distinguishable from an application error.
#[tokio::test]
async fn given_unreachable_server_when_request_then_transport_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = UserdeskClient::builder()
        .base_url(format!("{uri}{API_PREFIX}"))
        .session(SessionStore::in_memory())
        .build()
        .unwrap();

    let err = client.list_users().await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status_code(), None);
    assert!(!err.is_auth_failure());
    assert!(!err.message().is_empty());
}

#[tokio::test]
async fn given_slow_server_when_request_then_timeout_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PREFIX))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = UserdeskClient::builder()
        .base_url(format!("{}{}", server.uri(), API_PREFIX))
        .session(SessionStore::in_memory())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.list_users().await.unwrap_err();

    assert!(err.is_transport());
    assert!(err.is_timeout());
    assert_eq!(err.error_category(), "timeout");
}

/// **BUG THIS CATCHES**: A 2xx response whose body does not match the
/// expected shape being reported as a transport failure.
#[tokio::test]
async fn given_mismatched_success_body_when_request_then_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PREFIX))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);

    let err = client.list_users().await.unwrap_err();

    assert_eq!(err.error_category(), "decode");
    assert!(!err.is_transport());
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn given_success_after_failure_when_request_then_client_still_usable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PREFIX}/1")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PREFIX}/2")))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_user(2)))
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server, "tok");

    assert!(client.get_user(1).await.is_err());
    let user = client.get_user(2).await.unwrap();
    assert_eq!(user.id, 2);
}
