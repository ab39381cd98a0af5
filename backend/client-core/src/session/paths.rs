//! Platform-aware detection of userdesk data directories.
//!
//! Resolution order: the `USERDESK_DATA_DIR` override, then the platform
//! locations from the `dirs` crate, then hard-coded per-OS fallbacks.
//! When every strategy comes up empty the caller gets an error rather
//! than a guessed path.

use crate::error::session::SessionError;

use std::env;
use std::path::PathBuf;

use log::{debug, info, warn};

const SESSION_FILE_NAME: &str = "session.json";

/// Userdesk directory detection result.
#[derive(Debug, Clone)]
pub struct UserdeskPaths {
    /// Base data directory (e.g., ~/.local/share/userdesk on Linux).
    pub data_dir: PathBuf,
    /// Config directory (e.g., ~/.config/userdesk on Linux).
    pub config_dir: PathBuf,
    /// Path to session.json file.
    pub session_file: PathBuf,
    /// How the paths were determined.
    pub source: PathSource,
}

/// How the paths were determined (for debugging/logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    /// Set via USERDESK_DATA_DIR environment variable.
    EnvVar,
    /// Resolved through the `dirs` crate lookup.
    PlatformDefault,
    /// Linux fallback (~/.local/share/userdesk).
    LinuxFallback,
    /// macOS fallback (~/Library/Application Support/userdesk).
    MacOSFallback,
    /// Windows fallback (%APPDATA%/userdesk).
    WindowsFallback,
}

impl std::fmt::Display for PathSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSource::EnvVar => write!(f, "USERDESK_DATA_DIR"),
            PathSource::PlatformDefault => write!(f, "platform default"),
            PathSource::LinuxFallback => write!(f, "Linux fallback"),
            PathSource::MacOSFallback => write!(f, "macOS fallback"),
            PathSource::WindowsFallback => write!(f, "Windows fallback"),
        }
    }
}

/// Detect userdesk data paths.
///
/// # Errors
/// Returns `SessionError::PathDetection` if no valid path can be determined.
///
/// # Locations
/// - **Linux**: `$XDG_DATA_HOME/userdesk` + `$XDG_CONFIG_HOME/userdesk`
/// - **macOS**: `~/Library/Application Support/userdesk`
/// - **Windows**: `%APPDATA%/userdesk`
pub fn detect_userdesk_paths() -> Result<UserdeskPaths, SessionError> {
    // 1. Check environment variable override. Session and config share the
    //    override directory so one variable relocates everything.
    if let Ok(custom_dir) = env::var("USERDESK_DATA_DIR") {
        let data_dir = PathBuf::from(&custom_dir);
        let session_file = data_dir.join(SESSION_FILE_NAME);

        info!("Using USERDESK_DATA_DIR override: {:?}", data_dir);

        return Ok(UserdeskPaths {
            config_dir: data_dir.clone(),
            data_dir,
            session_file,
            source: PathSource::EnvVar,
        });
    }

    // 2. Ask the dirs crate for the platform locations
    if let (Some(data_base), Some(config_base)) = (dirs::data_local_dir(), dirs::config_dir()) {
        let data_dir = data_base.join("userdesk");
        let config_dir = config_base.join("userdesk");
        let session_file = data_dir.join(SESSION_FILE_NAME);

        debug!("Platform data dir: {:?}", data_dir);

        return Ok(UserdeskPaths {
            data_dir,
            config_dir,
            session_file,
            source: PathSource::PlatformDefault,
        });
    }

    // 3. Hard-coded per-OS fallbacks
    #[cfg(target_os = "linux")]
    {
        if let Ok(home) = env::var("HOME") {
            let home = PathBuf::from(home);
            let data_dir = home.join(".local/share/userdesk");
            let config_dir = home.join(".config/userdesk");
            let session_file = data_dir.join(SESSION_FILE_NAME);

            warn!("Using Linux fallback path: {:?}", data_dir);

            return Ok(UserdeskPaths {
                data_dir,
                config_dir,
                session_file,
                source: PathSource::LinuxFallback,
            });
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = env::var("HOME") {
            let data_dir = PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("userdesk");
            let session_file = data_dir.join(SESSION_FILE_NAME);

            warn!("Using macOS fallback path: {:?}", data_dir);

            return Ok(UserdeskPaths {
                config_dir: data_dir.clone(),
                data_dir,
                session_file,
                source: PathSource::MacOSFallback,
            });
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = env::var("APPDATA") {
            let data_dir = PathBuf::from(appdata).join("userdesk");
            let session_file = data_dir.join(SESSION_FILE_NAME);

            warn!("Using Windows fallback path: {:?}", data_dir);

            return Ok(UserdeskPaths {
                config_dir: data_dir.clone(),
                data_dir,
                session_file,
                source: PathSource::WindowsFallback,
            });
        }
    }

    // Every strategy came up empty
    Err(SessionError::path_detection(
        "Cannot determine userdesk data directory. Set USERDESK_DATA_DIR environment variable.",
    ))
}
