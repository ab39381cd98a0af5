//! Session credential storage.
//!
//! A session is a single bearer token obtained from the login endpoint.
//! Storage is pluggable behind [`TokenStore`]; the default backend keeps
//! the token in a JSON file under the userdesk data directory so sessions
//! survive process restarts. [`SessionStore`] is the cheap-to-clone handle
//! the rest of the crate works with.

pub mod file_store;
pub mod memory_store;
pub mod paths;

pub use file_store::FileTokenStore;
pub use memory_store::MemoryTokenStore;
pub use paths::{detect_userdesk_paths, PathSource, UserdeskPaths};

use crate::error::session::SessionError;

use std::path::PathBuf;
use std::sync::Arc;

use common::RedactedToken;

/// Backend that holds the session token.
///
/// Reads are infallible: a backend that cannot produce a token reports
/// "no session" rather than an error, so an unreadable or corrupt store
/// degrades to logged-out instead of wedging every API call.
pub trait TokenStore: Send + Sync {
    /// Current token, exactly as stored. `None` when no session exists.
    fn get(&self) -> Option<RedactedToken>;

    /// Replace the stored token. Last writer wins.
    fn set(&self, token: &str) -> Result<(), SessionError>;

    /// Discard the stored token. Clearing an absent session is not an
    /// error; the call is idempotent.
    fn clear(&self) -> Result<(), SessionError>;
}

/// Shared handle to the session credential.
///
/// Clones share one backend, so a token written through any handle is
/// visible to all of them. The handle applies the non-empty gate: an
/// empty stored token reads as "not logged in", matching how requests
/// only attach a credential that actually has content.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn TokenStore>,
}

impl SessionStore {
    /// File-backed store at the detected userdesk data directory.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::PathDetection`] when no data directory can
    /// be determined.
    pub fn file() -> Result<Self, SessionError> {
        Ok(Self {
            store: Arc::new(FileTokenStore::new()?),
        })
    }

    /// File-backed store at an explicit session file path.
    pub fn file_at(session_file: impl Into<PathBuf>) -> Self {
        Self {
            store: Arc::new(FileTokenStore::at(session_file)),
        }
    }

    /// Process-local store that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(MemoryTokenStore::new()),
        }
    }

    /// Wrap a custom backend.
    pub fn from_store(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Current session token, if a non-empty one is stored.
    pub fn token(&self) -> Option<RedactedToken> {
        self.store.get().filter(|token| !token.is_empty())
    }

    /// Persist `token` as the current session. Overwrites any previous
    /// session unconditionally.
    pub fn set_token(&self, token: &str) -> Result<(), SessionError> {
        self.store.set(token)
    }

    /// End the current session. Succeeds when no session exists.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.store.clear()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
