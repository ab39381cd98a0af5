//! Test helpers for client integration tests.
//!
//! Every test talks to a wiremock server through a client whose base URL
//! carries the `/api/users` prefix, the same shape a real deployment uses.
//! Sessions are in-memory unless a test is specifically about persistence.

use client_core::session::SessionStore;
use client_core::UserdeskClient;

use serde_json::json;
use wiremock::MockServer;

/// Path prefix the mock server expects, matching the default deployment.
pub const API_PREFIX: &str = "/api/users";

/// A user document as the server would return it.
pub fn sample_user(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "username": format!("user{id}"),
        "email": format!("user{id}@example.com"),
    })
}

/// Test helper: client against `server` with a fresh in-memory session.
pub fn client_for(server: &MockServer) -> (UserdeskClient, SessionStore) {
    let session = SessionStore::in_memory();
    let client = UserdeskClient::builder()
        .base_url(format!("{}{}", server.uri(), API_PREFIX))
        .session(session.clone())
        .build()
        .expect("Failed to build client");
    (client, session)
}

/// Test helper: client that already holds `token` in its session.
pub fn logged_in_client(server: &MockServer, token: &str) -> (UserdeskClient, SessionStore) {
    let (client, session) = client_for(server);
    session
        .set_token(token)
        .expect("Failed to seed session token");
    (client, session)
}
