pub mod config;
pub mod error;
pub mod session;
pub mod userdesk_client;

#[cfg(test)]
mod tests;

pub use session::SessionStore;
pub use userdesk_client::{UserdeskClient, UserdeskClientBuilder};

pub const USERDESK_API_HOSTNAME: &str = "127.0.0.1";
pub const USERDESK_API_PORT: u16 = 3000;
pub const USERDESK_API_PREFIX: &str = "/api/users";
pub const USERDESK_API_BASE_URL: &str = const_format::concatcp!(
    "http://",
    USERDESK_API_HOSTNAME,
    ":",
    USERDESK_API_PORT,
    USERDESK_API_PREFIX
);
