//! In-memory session storage for embedders and tests.

use crate::error::session::SessionError;
use crate::session::TokenStore;

use std::sync::{Mutex, MutexGuard};

use common::RedactedToken;
use zeroize::Zeroize;

/// Holds the token in process memory only; nothing survives the process.
///
/// The raw value is wiped on replacement, on clear, and when the store is
/// dropped.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored value is plain data, so a panic mid-access cannot leave
    /// it inconsistent; recover the guard instead of propagating poison.
    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        match self.token.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<RedactedToken> {
        self.lock().as_ref().map(|t| RedactedToken::new(t.clone()))
    }

    fn set(&self, token: &str) -> Result<(), SessionError> {
        let mut guard = self.lock();
        if let Some(mut old) = guard.take() {
            old.zeroize();
        }
        *guard = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        if let Some(mut old) = self.lock().take() {
            old.zeroize();
        }
        Ok(())
    }
}

impl Drop for MemoryTokenStore {
    fn drop(&mut self) {
        let token = match self.token.get_mut() {
            Ok(token) => token,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(old) = token.as_mut() {
            old.zeroize();
        }
    }
}
