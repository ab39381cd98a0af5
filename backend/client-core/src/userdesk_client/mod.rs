//! HTTP client for the userdesk REST API.
//!
//! Every operation goes through two shared gates: `prepare_request`
//! attaches the stored session credential on the way out, and the response
//! gate normalizes every non-success answer into [`ApiError`] on the way
//! back. Callers never see raw transport types.

use crate::config::AppConfig;
use crate::error::api::ApiError;
use crate::error::session::SessionError;
use crate::session::SessionStore;
use crate::USERDESK_API_BASE_URL;

use common::user::{LoginCredentials, LoginResponse, NewUser, User, UserUpdate};

use std::time::Duration;

use log::debug;
use reqwest::Client;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const REGISTER_ENDPOINT: &str = "register";
const LOGIN_ENDPOINT: &str = "login";

/// Client for the user-management API.
///
/// Cheap to clone; clones share the HTTP connection pool and the session
/// store, so a login performed through one clone authenticates them all.
#[derive(Clone, Debug)]
pub struct UserdeskClient {
    base_url: Url,
    client: Client,
    session: SessionStore,
}

impl UserdeskClient {
    /// Client with default timeout and the file-backed session store.
    ///
    /// # Errors
    /// Returns [`ApiError::Url`] for an unusable base URL and
    /// [`ApiError::Session`] when no session directory can be determined.
    pub fn new(base_url_str: &str) -> Result<Self, ApiError> {
        Self::builder().base_url(base_url_str).build()
    }

    pub fn builder() -> UserdeskClientBuilder {
        UserdeskClientBuilder::new()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Attach the stored session credential to an outgoing request.
    ///
    /// Reads the store at call time, so a token saved after this client was
    /// built is still picked up. With no session the request goes out bare
    /// and the server decides what is allowed anonymously.
    fn prepare_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token.as_str()),
            None => request,
        }
    }

    /// Resolve endpoint segments against the configured base URL.
    ///
    /// Appends to the base's existing path rather than replacing it, so a
    /// base of `http://host/api/users` plus `register` yields
    /// `http://host/api/users/register`.
    fn url_for(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                ApiError::url(format!(
                    "base URL '{}' cannot carry endpoint paths",
                    self.base_url
                ))
            })?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    /// Response gate: a non-2xx answer becomes [`ApiError::Api`] carrying
    /// whatever body the server sent; a 2xx body is decoded into `T`.
    async fn into_api_result<T>(response: reqwest::Response) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        let value = response.json::<T>().await?;
        Ok(value)
    }

    /// Response gate for operations whose success carries no body worth
    /// decoding.
    async fn expect_success(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        Ok(())
    }

    // ── Auth operations ──────────────────────────────────────────────

    /// Create an account.
    pub async fn register(&self, new_user: &NewUser) -> Result<User, ApiError> {
        let url = self.url_for(&[REGISTER_ENDPOINT])?;

        let response = self
            .prepare_request(self.client.post(url))
            .json(new_user)
            .send()
            .await?;

        Self::into_api_result(response).await
    }

    /// Authenticate and persist the returned session token.
    ///
    /// Only a non-empty token replaces the stored session; a success
    /// response without one leaves the previous session untouched. The
    /// server's rejection (wrong password, unknown account) surfaces as
    /// [`ApiError::Api`] and changes nothing locally.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError> {
        let url = self.url_for(&[LOGIN_ENDPOINT])?;

        let response = self
            .prepare_request(self.client.post(url))
            .json(credentials)
            .send()
            .await?;

        let login: LoginResponse = Self::into_api_result(response).await?;

        if login.token.is_empty() {
            debug!("Login response carried no token; stored session unchanged");
        } else {
            self.session.set_token(&login.token)?;
        }

        Ok(login)
    }

    /// End the local session. No request is made; the server holds no
    /// per-session state worth revoking.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.session.clear()
    }

    // ── User operations ──────────────────────────────────────────────

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.url_for(&[])?;

        let response = self.prepare_request(self.client.get(url)).send().await?;

        Self::into_api_result(response).await
    }

    pub async fn get_user(&self, id: u64) -> Result<User, ApiError> {
        let id = id.to_string();
        let url = self.url_for(&[&id])?;

        let response = self.prepare_request(self.client.get(url)).send().await?;

        Self::into_api_result(response).await
    }

    /// Create a user on someone else's behalf.
    ///
    /// The server exposes one creation endpoint, shared with
    /// [`register`](Self::register); the difference is intent, not wire
    /// format.
    pub async fn create_user(&self, new_user: &NewUser) -> Result<User, ApiError> {
        self.register(new_user).await
    }

    pub async fn update_user(&self, id: u64, update: &UserUpdate) -> Result<User, ApiError> {
        let id = id.to_string();
        let url = self.url_for(&[&id])?;

        let response = self
            .prepare_request(self.client.put(url))
            .json(update)
            .send()
            .await?;

        Self::into_api_result(response).await
    }

    pub async fn delete_user(&self, id: u64) -> Result<(), ApiError> {
        let id = id.to_string();
        let url = self.url_for(&[&id])?;

        let response = self.prepare_request(self.client.delete(url)).send().await?;

        Self::expect_success(response).await
    }
}

/// Builder for configuring [`UserdeskClient`] instances.
pub struct UserdeskClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    session: Option<SessionStore>,
}

impl UserdeskClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT_DURATION,
            session: None,
        }
    }

    /// Set the base URL for the userdesk server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set request timeout (for HTTP requests).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a specific session store instead of the file-backed default.
    pub fn session(mut self, session: SessionStore) -> Self {
        self.session = Some(session);
        self
    }

    /// Take base URL and timeout from loaded configuration.
    pub fn from_config(self, config: &AppConfig) -> Self {
        self.base_url(config.api.base_url.clone())
            .timeout(Duration::from_secs(config.api.timeout_secs))
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns [`ApiError::Url`] when the base URL does not parse or cannot
    /// carry endpoint paths, and [`ApiError::Session`] when the default
    /// session store cannot locate its directory.
    pub fn build(self) -> Result<UserdeskClient, ApiError> {
        let base_url_str = self
            .base_url
            .unwrap_or_else(|| USERDESK_API_BASE_URL.to_string());

        let base_url = Url::parse(&base_url_str)?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(ApiError::url(format!(
                "base URL scheme '{}' is not supported (must be http or https)",
                base_url.scheme()
            )));
        }
        if base_url.cannot_be_a_base() {
            return Err(ApiError::url(format!(
                "base URL '{base_url}' cannot carry endpoint paths"
            )));
        }

        let client = Client::builder().timeout(self.timeout).build()?;

        let session = match self.session {
            Some(session) => session,
            None => SessionStore::file()?,
        };

        Ok(UserdeskClient {
            base_url,
            client,
            session,
        })
    }
}
