//! File-backed session storage.
//!
//! The token lives in a small JSON file so a login survives process
//! restarts. Writes go through a temp file + rename, and on Unix the file
//! is restricted to the owner before it becomes visible.

use super::paths::detect_userdesk_paths;
use crate::error::session::SessionError;
use crate::session::TokenStore;

use std::fs;
use std::path::{Path, PathBuf};

use common::RedactedToken;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// On-disk shape of the session file.
#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    token: String,
}

pub struct FileTokenStore {
    session_file: PathBuf,
}

impl FileTokenStore {
    /// Store at the detected userdesk data directory.
    ///
    /// # Errors
    /// Returns `SessionError::PathDetection` if no data directory can be
    /// determined.
    pub fn new() -> Result<Self, SessionError> {
        let paths = detect_userdesk_paths()?;
        debug!(
            "Session file at {:?} (source: {})",
            paths.session_file, paths.source
        );
        Ok(Self {
            session_file: paths.session_file,
        })
    }

    /// Store at an explicit session file path.
    pub fn at(session_file: impl Into<PathBuf>) -> Self {
        Self {
            session_file: session_file.into(),
        }
    }

    pub fn session_file(&self) -> &Path {
        &self.session_file
    }
}

impl TokenStore for FileTokenStore {
    /// Read the stored token. Missing, unreadable, or malformed files all
    /// read as "no session"; the failure is logged, never raised.
    fn get(&self) -> Option<RedactedToken> {
        let content = match fs::read_to_string(&self.session_file) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No session file at {:?}", self.session_file);
                return None;
            }
            Err(e) => {
                warn!("Failed to read session file, treating as logged out: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<SessionFile>(&content) {
            Ok(session) => Some(RedactedToken::new(session.token)),
            Err(e) => {
                warn!("Failed to parse session file, treating as logged out: {}", e);
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.session_file.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::write(parent, e))?;
        }

        let json = serde_json::to_string_pretty(&SessionFile {
            token: token.to_owned(),
        })
        .map_err(|e| SessionError::serialize(e.to_string()))?;

        let temp_path = self.session_file.with_extension("json.tmp");

        fs::write(&temp_path, json).map_err(|e| SessionError::write(&temp_path, e))?;

        // The token is a credential: owner-only before the rename makes it live.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&temp_path, fs::Permissions::from_mode(0o600))
                .map_err(|e| SessionError::write(&temp_path, e))?;
        }

        // Publish via rename; readers see the old file or the new one,
        // never a partial write
        fs::rename(&temp_path, &self.session_file)
            .map_err(|e| SessionError::write(&self.session_file, e))?;

        info!("Session saved to {:?}", self.session_file);
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.session_file) {
            Ok(()) => {
                info!("Session cleared at {:?}", self.session_file);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::remove(&self.session_file, e)),
        }
    }
}
