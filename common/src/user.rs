//! Wire types for the userdesk user-management API.
//!
//! Shapes mirror the server's JSON exactly: the server assigns `id` and never
//! echoes passwords back, so `User` carries no password field and the
//! password only ever travels outward inside [`NewUser`] and
//! [`LoginCredentials`].

use serde::{Deserialize, Serialize};

/// A user record as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned, immutable.
    pub id: u64,
    pub username: String,
    pub email: String,
}

/// Body for `POST /register` (registration and admin-side creation share the
/// same endpoint).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body for `PUT /{id}`.
///
/// Both fields are always sent; the client never merges partial updates
/// locally, it trusts the record the server returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub username: String,
    pub email: String,
}

/// Body for `POST /login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Response of `POST /login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer credential. Defaults to empty when the server omits it; an
    /// empty token is returned to the caller but never written to the
    /// session store.
    #[serde(default)]
    pub token: String,
    /// The authenticated user.
    pub data: User,
}
