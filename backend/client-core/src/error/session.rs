use std::io;
use std::panic::Location;
use std::path::PathBuf;

use common::ErrorLocation;
use thiserror::Error;

/// Failures while persisting or discarding the saved session credential.
///
/// Reading the credential back is deliberately infallible at the store
/// surface (a missing or unreadable session file reads as "not logged
/// in"), so every variant here describes a mutation that could not be
/// completed.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session Path Error: {message} {location}")]
    PathDetection {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session Write Error: {path}: {source} {location}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
        location: ErrorLocation,
    },

    #[error("Session Remove Error: {path}: {source} {location}")]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
        location: ErrorLocation,
    },

    #[error("Session Serialize Error: {reason} {location}")]
    Serialize {
        reason: String,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn path_detection(message: impl Into<String>) -> Self {
        Self::PathDetection {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn remove(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Remove {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn serialize(reason: impl Into<String>) -> Self {
        Self::Serialize {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
