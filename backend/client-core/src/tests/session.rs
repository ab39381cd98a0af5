// Unit tests for session storage
// Tests both backends plus the SessionStore facade semantics:
// last-writer-wins, idempotent clear, tolerant reads, the non-empty gate

use crate::session::{FileTokenStore, MemoryTokenStore, SessionStore, TokenStore};

use std::fs;
use std::path::PathBuf;

fn temp_session_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("session.json")
}

// ============================================
// MEMORY BACKEND
// ============================================

#[test]
fn given_fresh_memory_store_when_get_then_none() {
    let store = MemoryTokenStore::new();
    assert!(store.get().is_none());
}

#[test]
fn given_stored_token_when_get_then_same_value() {
    let store = MemoryTokenStore::new();
    store.set("abc123").unwrap();

    let token = store.get().unwrap();
    assert_eq!(token.as_str(), "abc123");
}

/// **VALUE**: Verifies a second login simply replaces the first.
///
/// **WHY THIS MATTERS**: Logging in again (same or different account) must
/// never require logging out first. The freshest credential always wins.
#[test]
fn given_two_sets_when_get_then_last_writer_wins() {
    let store = MemoryTokenStore::new();
    store.set("first").unwrap();
    store.set("second").unwrap();

    assert_eq!(store.get().unwrap().as_str(), "second");
}

#[test]
fn given_cleared_store_when_clear_again_then_still_ok() {
    let store = MemoryTokenStore::new();
    store.set("abc123").unwrap();

    store.clear().unwrap();
    assert!(store.get().is_none());

    // Clearing an already-empty store is not an error
    store.clear().unwrap();
}

// ============================================
// FILE BACKEND
// ============================================

#[test]
fn given_no_session_file_when_get_then_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::at(temp_session_path(&dir));

    assert!(store.get().is_none());
}

#[test]
fn given_saved_token_when_new_store_reads_then_same_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_session_path(&dir);

    FileTokenStore::at(&path).set("persisted-token").unwrap();

    // A fresh store over the same file sees the token
    let token = FileTokenStore::at(&path).get().unwrap();
    assert_eq!(token.as_str(), "persisted-token");
}

/// **VALUE**: Verifies corrupt session files degrade to logged-out.
///
/// **WHY THIS MATTERS**: A half-written or hand-mangled session file must
/// not wedge the client; the worst outcome of unreadable session state is
/// having to log in again.
///
/// **BUG THIS CATCHES**: get() propagating a parse failure instead of
/// treating the session as absent.
#[test]
fn given_corrupt_session_file_when_get_then_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_session_path(&dir);
    fs::write(&path, "{definitely not json").unwrap();

    let store = FileTokenStore::at(&path);

    assert!(store.get().is_none());
}

#[test]
fn given_missing_parent_dirs_when_set_then_creates_them() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a").join("b").join("session.json");

    FileTokenStore::at(&path).set("tok").unwrap();

    assert!(path.exists());
}

#[test]
fn given_two_sets_when_file_read_back_then_last_writer_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_session_path(&dir);
    let store = FileTokenStore::at(&path);

    store.set("first").unwrap();
    store.set("second").unwrap();

    assert_eq!(store.get().unwrap().as_str(), "second");
    // And the atomic-write temp file is gone
    assert!(!dir.path().join("session.json.tmp").exists());
}

#[test]
fn given_cleared_session_when_get_then_none_and_file_gone() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_session_path(&dir);
    let store = FileTokenStore::at(&path);

    store.set("tok").unwrap();
    store.clear().unwrap();

    assert!(!path.exists());
    assert!(store.get().is_none());

    // Idempotent: clearing with no file present still succeeds
    store.clear().unwrap();
}

#[test]
fn given_session_file_when_parsed_raw_then_json_with_token_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_session_path(&dir);

    FileTokenStore::at(&path).set("raw-check").unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["token"], "raw-check");
}

/// **VALUE**: Verifies the session file is unreadable to other users.
///
/// **BUG THIS CATCHES**: The credential landing on disk with default 0644
/// permissions.
#[cfg(unix)]
#[test]
fn given_saved_session_when_inspected_then_owner_only_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = temp_session_path(&dir);

    FileTokenStore::at(&path).set("secret").unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

// ============================================
// SESSION STORE FACADE
// ============================================

#[test]
fn given_in_memory_facade_when_set_token_then_authenticated() {
    let session = SessionStore::in_memory();
    assert!(!session.is_authenticated());

    session.set_token("tok").unwrap();

    assert!(session.is_authenticated());
    assert_eq!(session.token().unwrap().as_str(), "tok");
}

/// **VALUE**: Verifies clones share one backend.
///
/// **WHY THIS MATTERS**: The client clones the store into every handle; a
/// login through any of them must authenticate all of them.
#[test]
fn given_cloned_facade_when_one_clone_logs_in_then_other_sees_it() {
    let session = SessionStore::in_memory();
    let other = session.clone();

    session.set_token("shared").unwrap();

    assert_eq!(other.token().unwrap().as_str(), "shared");

    other.clear().unwrap();
    assert!(!session.is_authenticated());
}

/// **VALUE**: Verifies an empty stored token reads as "not logged in".
///
/// **WHY THIS MATTERS**: Requests only attach a credential with content;
/// an empty string in the store must not produce `Bearer ` headers or a
/// phantom authenticated state.
#[test]
fn given_empty_token_when_queried_then_not_authenticated() {
    let session = SessionStore::in_memory();
    session.set_token("").unwrap();

    assert!(session.token().is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn given_file_backed_facade_when_set_token_then_visible_to_new_facade() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_session_path(&dir);

    let session = SessionStore::file_at(&path);
    session.set_token("durable").unwrap();

    let reopened = SessionStore::file_at(&path);
    assert!(reopened.is_authenticated());
    assert_eq!(reopened.token().unwrap().as_str(), "durable");
}

#[test]
fn given_debug_format_when_printed_then_no_token_material() {
    let session = SessionStore::in_memory();
    session.set_token("super-secret-token").unwrap();

    let debug = format!("{:?}", session);

    assert!(!debug.contains("super-secret-token"));
    assert!(debug.contains("authenticated"));
}
