use std::panic::Location;

use common::{ErrorLocation, HttpStatusCode};
use thiserror::Error;

use crate::error::session::SessionError;

/// Errors surfaced by [`UserdeskClient`](crate::UserdeskClient) operations.
///
/// Every failure is normalized to one of these variants so callers never
/// handle raw transport types. An HTTP response outside the 2xx range
/// becomes [`ApiError::Api`] carrying the status and whatever the server
/// said; failures before a response exists become [`ApiError::Transport`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    /// The server answered with a non-success status.
    #[error("API Error: HTTP {status}: {message} {location}")]
    Api {
        status: HttpStatusCode,
        message: String,
        body: Option<serde_json::Value>,
        location: ErrorLocation,
    },

    /// A successful response carried a body that does not match the
    /// expected shape.
    #[error("Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Error: {message} {location}")]
    Url {
        message: String,
        location: ErrorLocation,
    },

    /// The call could not complete because the saved session could not be
    /// updated, e.g. a login that failed to persist its credential.
    #[error("Session Error: {source} {location}")]
    Session {
        #[source]
        source: SessionError,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn url(message: impl Into<String>) -> Self {
        Self::Url {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Builds the application-error variant from a non-success response.
    ///
    /// A JSON body with a string `"message"` field supplies the message
    /// verbatim; a non-JSON body is used as-is; an empty body falls back to
    /// `HTTP <status>`. The parsed body, when there is one, is kept whole
    /// so callers can inspect fields beyond the message.
    #[track_caller]
    pub fn from_response(status: u16, body_text: &str) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let body: Option<serde_json::Value> = serde_json::from_str(body_text).ok();
        let message = body
            .as_ref()
            .and_then(|value| value.get("message"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| {
                let trimmed = body_text.trim();
                if trimmed.is_empty() || body.is_some() {
                    format!("HTTP {status}")
                } else {
                    trimmed.to_owned()
                }
            });
        Self::Api {
            status: HttpStatusCode::from(status),
            message,
            body,
            location,
        }
    }

    /// Human-readable message, uniform across variants.
    pub fn message(&self) -> String {
        match self {
            Self::Transport { message, .. }
            | Self::Api { message, .. }
            | Self::Decode { message, .. }
            | Self::Url { message, .. } => message.clone(),
            Self::Session { source, .. } => source.to_string(),
        }
    }

    /// HTTP status, present only when the server actually answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(status.0),
            _ => None,
        }
    }

    /// Full response body of an application error, when it parsed as JSON.
    pub fn raw_body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                is_timeout: true,
                ..
            }
        )
    }

    /// True when the server rejected the presented credential (401/403).
    ///
    /// The client never reacts to this on its own; callers decide whether
    /// to discard the session and prompt for a fresh login.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Api { status, .. } if status.is_auth_error())
    }

    /// Coarse category for logging and metrics-style grouping.
    pub fn error_category(&self) -> &'static str {
        match self {
            Self::Transport {
                is_timeout: true, ..
            } => "timeout",
            Self::Transport {
                is_connection: true,
                ..
            } => "connection",
            Self::Transport { .. } => "transport",
            Self::Api { status, .. } if status.is_server_error() => "server_error",
            Self::Api { .. } => "client_error",
            Self::Decode { .. } => "decode",
            Self::Url { .. } => "url",
            Self::Session { .. } => "session",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    #[track_caller]
    fn from(e: reqwest::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if e.is_decode() {
            return Self::Decode {
                message: format!("Failed to decode response body: {e}"),
                location,
            };
        }
        Self::Transport {
            is_timeout: e.is_timeout(),
            is_connection: e.is_connect(),
            message: e.to_string(),
            location,
        }
    }
}

impl From<url::ParseError> for ApiError {
    #[track_caller]
    fn from(e: url::ParseError) -> Self {
        Self::Url {
            message: format!("Invalid URL: {e}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SessionError> for ApiError {
    #[track_caller]
    fn from(source: SessionError) -> Self {
        Self::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
