// Integration tests for the user CRUD operations.
// The wiremock matchers double as wire-format assertions: a test only
// passes if the client hit the right path, verb, and body.

use super::helpers::{client_for, logged_in_client, sample_user, API_PREFIX};

use common::user::{NewUser, User, UserUpdate};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the session token rides along as a bearer header.
///
/// **WHY THIS MATTERS**: Credential injection is the whole point of the
/// shared request path. The mock only matches when the exact
/// `Authorization: Bearer <token>` header is present, so a passing test
/// proves the header was sent.
#[tokio::test]
async fn given_authenticated_session_when_list_users_then_bearer_header_attached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PREFIX))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([sample_user(1), sample_user(2)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server, "tok-123");

    let users = client.list_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].username, "user1");
    assert_eq!(users[1].username, "user2");
}

/// **VALUE**: Verifies anonymous requests carry no Authorization header at all.
///
/// **BUG THIS CATCHES**: Sending `Bearer ` with an empty credential, which
/// some servers reject outright.
#[tokio::test]
async fn given_logged_out_client_when_list_users_then_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PREFIX))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let (client, _session) = client_for(&server);

    client.list_users().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

/// **VALUE**: Verifies the token is read from the store at call time, not
/// captured when the client is built.
///
/// **WHY THIS MATTERS**: Logging in through one handle must authenticate
/// requests made through any other handle built earlier. A client that
/// snapshots the token at construction would keep sending stale (or no)
/// credentials for its whole lifetime.
#[tokio::test]
async fn given_token_set_after_build_when_next_request_then_fresh_token_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PREFIX))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let (client, session) = client_for(&server);

    // First call: logged out
    client.list_users().await.unwrap();

    // Token appears after the client already exists
    session.set_token("late-token").unwrap();
    client.list_users().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(!requests[0].headers.contains_key("authorization"));
    assert_eq!(
        requests[1].headers.get("authorization").unwrap(),
        "Bearer late-token"
    );
}

#[tokio::test]
async fn given_user_id_when_get_user_then_fetches_id_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PREFIX}/42")))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_user(42)))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server, "tok");

    let user: User = client.get_user(42).await.unwrap();

    assert_eq!(user.id, 42);
    assert_eq!(user.email, "user42@example.com");
}

#[tokio::test]
async fn given_new_user_when_create_user_then_posts_to_register() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{API_PREFIX}/register")))
        .and(body_json(json!({
            "username": "added",
            "email": "added@example.com",
            "password": "initial-pw",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 9,
            "username": "added",
            "email": "added@example.com",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server, "tok");

    let user = client
        .create_user(&NewUser {
            username: "added".to_string(),
            email: "added@example.com".to_string(),
            password: "initial-pw".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.id, 9);
}

#[tokio::test]
async fn given_update_when_update_user_then_puts_to_id_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("{API_PREFIX}/7")))
        .and(body_json(json!({
            "username": "renamed",
            "email": "renamed@example.com",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "username": "renamed",
            "email": "renamed@example.com",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server, "tok");

    let user = client
        .update_user(
            7,
            &UserUpdate {
                username: "renamed".to_string(),
                email: "renamed@example.com".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.username, "renamed");
}

#[tokio::test]
async fn given_user_id_when_delete_user_then_deletes_id_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{API_PREFIX}/9")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server, "tok");

    client.delete_user(9).await.unwrap();
}

/// **VALUE**: Verifies the base URL's own path survives endpoint joins.
///
/// **BUG THIS CATCHES**: Naive URL joining that resolves `register`
/// against `/api/users` and lands on `/api/register`, silently hitting a
/// route that does not exist.
#[tokio::test]
async fn given_base_url_with_trailing_slash_when_request_then_same_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PREFIX}/3")))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_user(3)))
        .expect(1)
        .mount(&server)
        .await;

    let session = client_core::session::SessionStore::in_memory();
    let client = client_core::UserdeskClient::builder()
        .base_url(format!("{}{}/", server.uri(), API_PREFIX))
        .session(session)
        .build()
        .unwrap();

    let user = client.get_user(3).await.unwrap();

    assert_eq!(user.id, 3);
}
