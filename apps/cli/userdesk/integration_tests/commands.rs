use userdesk::cli::{ConfigCommand, ConfigSubcommand, UsersCommand, UsersSubcommand};
use userdesk::commands::{self, CommandContext};

use client_core::config::AppConfig;
use client_core::session::{PathSource, UserdeskPaths};
use client_core::{SessionStore, UserdeskClient};

use std::path::Path;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_PREFIX: &str = "/api/users";

fn sample_user(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "username": format!("user{id}"),
        "email": format!("user{id}@example.com"),
    })
}

/// Build a command context whose session file lives under `dir` and whose
/// client points at `base_url`.
fn context_with_base(dir: &Path, base_url: &str) -> CommandContext {
    let session_file = dir.join("session.json");
    let session = SessionStore::file_at(&session_file);

    let client = UserdeskClient::builder()
        .base_url(base_url)
        .session(session)
        .build()
        .expect("Failed to build client");

    CommandContext {
        client,
        config: AppConfig::default(),
        paths: UserdeskPaths {
            data_dir: dir.to_path_buf(),
            config_dir: dir.to_path_buf(),
            session_file,
            source: PathSource::EnvVar,
        },
    }
}

fn context_at(dir: &Path, server: &MockServer) -> CommandContext {
    context_with_base(dir, &format!("{}{}", server.uri(), API_PREFIX))
}

// ============================================
// SESSION LIFECYCLE THROUGH COMMANDS
// ============================================

/// **VALUE**: Verifies the one place the CLI ends a session on its own.
///
/// **WHY THIS MATTERS**: A token the server has rejected will fail every
/// later command the same way. The resource handlers clear it so the next
/// command starts from a clean logged-out state instead of repeating the
/// failure.
///
/// **BUG THIS CATCHES**: Would catch the auth-failure hook being dropped
/// from a handler, or applied on a path (login) where it must not run.
#[tokio::test]
async fn given_stale_token_when_users_list_rejected_then_session_file_is_removed() {
    // GIVEN: A stored session the server no longer accepts
    let dir = TempDir::new().expect("Failed to create temp dir");
    let server = MockServer::start().await;
    let ctx = context_at(dir.path(), &server);
    ctx.client
        .session()
        .set_token("stale-jwt")
        .expect("Failed to seed session");

    Mock::given(method("GET"))
        .and(path(API_PREFIX))
        .and(header("authorization", "Bearer stale-jwt"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "jwt expired"})))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Running `users list` with the stale token
    let result = commands::users::run(
        &ctx,
        UsersCommand {
            command: UsersSubcommand::List,
        },
    )
    .await;

    // THEN: The command fails with the server's message
    let err = result.expect_err("Rejected token should surface as an error");
    assert!(
        err.message().contains("jwt expired"),
        "Server message should reach the user: {}",
        err.message()
    );

    // AND: The rejected session is gone
    assert!(
        !ctx.paths.session_file.exists(),
        "Rejected session should be cleared from disk"
    );
    assert!(!ctx.client.is_authenticated());
}

#[tokio::test]
async fn given_existing_session_when_login_fails_then_session_survives() {
    // GIVEN: A valid stored session and a login attempt with a bad password
    let dir = TempDir::new().expect("Failed to create temp dir");
    let server = MockServer::start().await;
    let ctx = context_at(dir.path(), &server);
    ctx.client
        .session()
        .set_token("still-good")
        .expect("Failed to seed session");

    Mock::given(method("POST"))
        .and(path(format!("{API_PREFIX}/login")))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    // WHEN: The login command fails
    let result = commands::auth::login(
        &ctx,
        String::from("amy@example.com"),
        String::from("wrong-password"),
    )
    .await;

    // THEN: The failure is reported but the previous session is untouched
    let err = result.expect_err("Rejected login should surface as an error");
    assert!(err.message().contains("Invalid credentials"));
    assert!(
        ctx.paths.session_file.exists(),
        "A failed login must not destroy the existing session"
    );
    assert!(ctx.client.is_authenticated());
}

#[tokio::test]
async fn given_valid_credentials_when_login_command_runs_then_session_file_is_written() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let server = MockServer::start().await;
    let ctx = context_at(dir.path(), &server);

    Mock::given(method("POST"))
        .and(path(format!("{API_PREFIX}/login")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "cli-jwt",
            "data": sample_user(1),
        })))
        .mount(&server)
        .await;

    let result = commands::auth::login(
        &ctx,
        String::from("user1@example.com"),
        String::from("hunter2"),
    )
    .await;

    assert!(result.is_ok(), "Login should succeed: {result:?}");
    assert!(
        ctx.paths.session_file.exists(),
        "Login should persist the session to disk"
    );
    assert!(ctx.client.is_authenticated());
}

#[tokio::test]
async fn given_register_when_command_runs_then_session_is_not_created() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let server = MockServer::start().await;
    let ctx = context_at(dir.path(), &server);

    Mock::given(method("POST"))
        .and(path(format!("{API_PREFIX}/register")))
        .respond_with(ResponseTemplate::new(201).set_body_json(sample_user(2)))
        .mount(&server)
        .await;

    let result = commands::auth::register(
        &ctx,
        String::from("user2"),
        String::from("user2@example.com"),
        String::from("hunter2"),
    )
    .await;

    assert!(result.is_ok(), "Register should succeed: {result:?}");
    assert!(
        !ctx.paths.session_file.exists(),
        "Registration alone should not sign anyone in"
    );
}

// ============================================
// USER COMMANDS
// ============================================

#[tokio::test]
async fn given_yes_flag_when_delete_command_runs_then_no_prompt_blocks() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let server = MockServer::start().await;
    let ctx = context_at(dir.path(), &server);

    Mock::given(method("DELETE"))
        .and(path(format!("{API_PREFIX}/9")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    // --yes goes straight to the request; a prompt would hang the test
    let result = commands::users::run(
        &ctx,
        UsersCommand {
            command: UsersSubcommand::Delete { id: 9, yes: true },
        },
    )
    .await;

    assert!(result.is_ok(), "Delete should succeed: {result:?}");
}

#[tokio::test]
async fn given_users_get_when_server_responds_then_command_succeeds() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let server = MockServer::start().await;
    let ctx = context_at(dir.path(), &server);

    Mock::given(method("GET"))
        .and(path(format!("{API_PREFIX}/5")))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_user(5)))
        .mount(&server)
        .await;

    let result = commands::users::run(
        &ctx,
        UsersCommand {
            command: UsersSubcommand::Get { id: 5 },
        },
    )
    .await;

    assert!(result.is_ok(), "Get should succeed: {result:?}");
}

// ============================================
// CONFIG COMMANDS
// ============================================

#[test]
fn given_config_set_url_when_run_then_config_file_is_written() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let ctx = context_with_base(dir.path(), "http://127.0.0.1:1/api/users");

    let result = commands::config::run(
        &ctx,
        ConfigCommand {
            command: ConfigSubcommand::SetUrl {
                url: String::from("http://example.com:8080/api/users"),
            },
        },
    );

    assert!(result.is_ok(), "set-url should succeed: {result:?}");

    let saved = AppConfig::load(dir.path()).expect("Saved config should load back");
    assert_eq!(saved.api.base_url, "http://example.com:8080/api/users");
}

#[test]
fn given_config_set_timeout_when_run_then_value_round_trips() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let ctx = context_with_base(dir.path(), "http://127.0.0.1:1/api/users");

    let result = commands::config::run(
        &ctx,
        ConfigCommand {
            command: ConfigSubcommand::SetTimeout { seconds: 45 },
        },
    );

    assert!(result.is_ok(), "set-timeout should succeed: {result:?}");

    let saved = AppConfig::load(dir.path()).expect("Saved config should load back");
    assert_eq!(saved.api.timeout_secs, 45);
}

#[test]
fn given_invalid_url_when_config_set_url_runs_then_errors_and_writes_nothing() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let ctx = context_with_base(dir.path(), "http://127.0.0.1:1/api/users");

    let result = commands::config::run(
        &ctx,
        ConfigCommand {
            command: ConfigSubcommand::SetUrl {
                url: String::from("not a url"),
            },
        },
    );

    let err = result.expect_err("An unusable URL should be rejected");
    assert!(
        err.message().contains("Invalid base URL"),
        "Validation reason should reach the user: {}",
        err.message()
    );
    assert!(
        !dir.path().join("config.json").exists(),
        "Nothing should be written when validation fails"
    );
}
