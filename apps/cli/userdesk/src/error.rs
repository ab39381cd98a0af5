use client_core::error::CoreError;

use common::ErrorLocation;

use thiserror::Error;

/// Errors surfaced at the CLI boundary.
///
/// Everything is flattened to a message plus the location that raised it;
/// by the time an error reaches here it is being shown to a person, not
/// matched on.
#[derive(Debug, Error)]
pub enum UserdeskError {
    /// Error from this app's own plumbing (logging, prompts, IO)
    #[error("Userdesk Error: {message} {location}")]
    Userdesk {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core operations (session, config, API calls)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },
}

impl UserdeskError {
    #[track_caller]
    pub fn userdesk(message: impl Into<String>) -> Self {
        Self::Userdesk {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    /// The text shown to the user, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Userdesk { message, .. } | Self::Core { message, .. } => message,
        }
    }
}

impl From<CoreError> for UserdeskError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        Self::Core {
            message: e.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}
