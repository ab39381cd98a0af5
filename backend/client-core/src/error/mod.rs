pub mod api;
pub mod config;
pub mod session;

pub use api::ApiError;
pub use config::ConfigError;
pub use session::SessionError;

use thiserror::Error;

/// Aggregated error type for callers that drive the whole client surface
/// (session, config, and API calls) through one fallible path.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
