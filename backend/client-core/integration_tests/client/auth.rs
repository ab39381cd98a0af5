// Integration tests for the auth operations: register, login, logout.
// A wiremock server plays the API; assertions cover both the wire
// traffic and the session state left behind.

use super::helpers::{client_for, logged_in_client, sample_user, API_PREFIX};

use common::user::{LoginCredentials, NewUser};

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> LoginCredentials {
    LoginCredentials {
        email: "user1@example.com".to_string(),
        password: "hunter2".to_string(),
    }
}

/// **VALUE**: Verifies the full login happy path: correct endpoint, correct
/// body, token persisted into the session.
///
/// **WHY THIS MATTERS**: This is the handshake everything else depends on.
/// If the token from the response never reaches the store, every later
/// call goes out anonymous and the API rejects it.
#[tokio::test]
async fn given_valid_credentials_when_login_then_token_persisted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{API_PREFIX}/login")))
        .and(body_json(json!({
            "email": "user1@example.com",
            "password": "hunter2",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-abc-123",
            "data": sample_user(1),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, session) = client_for(&server);

    // WHEN: Logging in
    let response = client.login(&credentials()).await.unwrap();

    // THEN: Response decoded and token persisted
    assert_eq!(response.token, "jwt-abc-123");
    assert_eq!(response.data.id, 1);
    assert!(session.is_authenticated());
    assert_eq!(session.token().unwrap().as_str(), "jwt-abc-123");
}

/// **VALUE**: Verifies only a non-empty token replaces the session.
///
/// **BUG THIS CATCHES**: A success response without a token wiping out or
/// emptying an existing session.
#[tokio::test]
async fn given_login_response_without_token_when_login_then_session_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{API_PREFIX}/login")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": sample_user(1),
        })))
        .mount(&server)
        .await;

    let (client, session) = logged_in_client(&server, "pre-existing");

    let response = client.login(&credentials()).await.unwrap();

    assert!(response.token.is_empty());
    assert_eq!(session.token().unwrap().as_str(), "pre-existing");
}

#[tokio::test]
async fn given_second_login_when_token_returned_then_replaces_previous_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{API_PREFIX}/login")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "fresh-token",
            "data": sample_user(1),
        })))
        .mount(&server)
        .await;

    let (client, session) = logged_in_client(&server, "stale-token");

    client.login(&credentials()).await.unwrap();

    // Last writer wins
    assert_eq!(session.token().unwrap().as_str(), "fresh-token");
}

/// **VALUE**: Verifies a rejected login surfaces the server's message and
/// leaves local state alone.
///
/// **WHY THIS MATTERS**: "Invalid credentials" must reach the user verbatim,
/// and a failed re-login must not destroy a still-valid existing session.
#[tokio::test]
async fn given_rejected_credentials_when_login_then_api_error_and_session_kept() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{API_PREFIX}/login")))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let (client, session) = logged_in_client(&server, "still-valid");

    let err = client.login(&credentials()).await.unwrap_err();

    assert_eq!(err.status_code(), Some(401));
    assert_eq!(err.message(), "Invalid credentials");
    assert!(err.is_auth_failure());
    // Local session untouched by the rejection
    assert_eq!(session.token().unwrap().as_str(), "still-valid");
}

#[tokio::test]
async fn given_new_account_when_register_then_posts_to_register_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{API_PREFIX}/register")))
        .and(body_json(json!({
            "username": "newbie",
            "email": "newbie@example.com",
            "password": "s3cret",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7,
            "username": "newbie",
            "email": "newbie@example.com",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, session) = client_for(&server);

    let user = client
        .register(&NewUser {
            username: "newbie".to_string(),
            email: "newbie@example.com".to_string(),
            password: "s3cret".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.username, "newbie");
    // Registering does not log anyone in
    assert!(!session.is_authenticated());
}

/// **VALUE**: Verifies logout is purely local.
///
/// **WHY THIS MATTERS**: The server holds no session state to revoke;
/// logout must work offline and must not fail because the API is down.
#[tokio::test]
async fn given_logged_in_client_when_logout_then_session_cleared_without_network() {
    let server = MockServer::start().await;

    let (client, session) = logged_in_client(&server, "tok");

    client.logout().unwrap();

    assert!(!session.is_authenticated());
    assert!(!client.is_authenticated());
    // No request ever left the building
    assert!(server.received_requests().await.unwrap().is_empty());

    // Logging out twice is fine
    client.logout().unwrap();
}
