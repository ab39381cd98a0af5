//! Domain models for userdesk.
//!
//! This crate contains pure data structures shared by the client core and the
//! CLI. Models have no business logic - they're just data that can be passed
//! between layers.
//!
//! ## Layering
//!
//! - **common** (this crate): Pure data structures and shared primitives
//! - **client-core**: Session lifecycle and REST client operating on models
//! - **userdesk**: CLI wiring everything together
//!
//! Nothing here performs I/O or depends on the crates above it.

pub mod error;
pub mod http_status;
pub mod redacted_token;
pub mod user;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedToken;
pub use user::{LoginCredentials, LoginResponse, NewUser, User, UserUpdate};

#[cfg(test)]
mod tests;
