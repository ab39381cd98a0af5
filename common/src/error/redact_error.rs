use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when code tries to push a redacted credential through serde.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Serialization Error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },
}
