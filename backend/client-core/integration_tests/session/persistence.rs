// Integration tests for session durability across client lifetimes.
// A file-backed store stands in for "the next process": the first client
// logs in and goes away, a second one built over the same file must still
// be authenticated.

use client_core::session::SessionStore;
use client_core::UserdeskClient;

use common::user::LoginCredentials;

use std::path::Path;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_PREFIX: &str = "/api/users";

fn client_at(server: &MockServer, session_file: &Path) -> UserdeskClient {
    UserdeskClient::builder()
        .base_url(format!("{}{}", server.uri(), API_PREFIX))
        .session(SessionStore::file_at(session_file))
        .build()
        .expect("Failed to build client")
}

/// **VALUE**: Verifies a login outlives the client that performed it.
///
/// **WHY THIS MATTERS**: The tool is invoked once per command; if the
/// token died with the process, users would log in before every single
/// operation.
///
/// **BUG THIS CATCHES**: The token never reaching disk, or a fresh store
/// failing to read it back.
#[tokio::test]
async fn given_login_in_first_client_when_second_client_built_then_still_authenticated() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");

    Mock::given(method("POST"))
        .and(path(format!("{API_PREFIX}/login")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "durable-jwt",
            "data": {"id": 1, "username": "user1", "email": "user1@example.com"},
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(API_PREFIX))
        .and(header("authorization", "Bearer durable-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    // GIVEN: A client that logs in and then goes away
    {
        let client = client_at(&server, &session_file);
        client
            .login(&LoginCredentials {
                email: "user1@example.com".to_string(),
                password: "hunter2".to_string(),
            })
            .await
            .unwrap();
    }

    // WHEN: A brand-new client is built over the same session file
    let client = client_at(&server, &session_file);

    // THEN: It is authenticated and sends the persisted token
    assert!(client.is_authenticated());
    client.list_users().await.unwrap();
}

#[tokio::test]
async fn given_logout_in_first_client_when_second_client_built_then_logged_out() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");

    SessionStore::file_at(&session_file)
        .set_token("about-to-go")
        .unwrap();

    {
        let client = client_at(&server, &session_file);
        assert!(client.is_authenticated());
        client.logout().unwrap();
    }

    let client = client_at(&server, &session_file);
    assert!(!client.is_authenticated());
    assert!(!session_file.exists());
}
