//! # eightd-taiga
//!
//! Taiga REST API client for eightd.
//!
//! [`TaigaClient::authenticate`] exchanges credentials for a bearer token
//! and returns a [`Session`] that owns it. Every call after that goes through
//! the session:
//! - `POST /epics`
//! - `POST /userstories`
//! - `POST /epics/{id}/related_userstories`
//!
//! [`workflow::execute`] drives the full run: auth, epic, then create+link
//! for every story of the plan, strictly in sequence and fail-fast.

mod auth;
mod epics;
mod error;
mod http;
mod stories;
pub mod workflow;

pub use auth::Credentials;
pub use epics::Linked;
pub use error::TaigaError;

/// HTTP client bound to one Taiga API root.
#[derive(Debug, Clone)]
pub struct TaigaClient {
    http: reqwest::Client,
    base_url: String,
}

impl TaigaClient {
    /// Create a client for `base_url` (e.g. `http://taiga:8000/api/v1`).
    ///
    /// No request timeout is set; transport defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`TaigaError::Http`] if the underlying `reqwest::Client`
    /// fails to build (TLS backend initialization).
    pub fn new(base_url: &str) -> Result<Self, TaigaError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("eightd/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// API root without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

/// An authenticated handle. Lives for a single run.
pub struct Session<'a> {
    client: &'a TaigaClient,
    token: String,
}

impl std::fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.client.base_url)
            .finish_non_exhaustive()
    }
}

impl Session<'_> {
    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let url = self.client.url(path);
        tracing::debug!(%url, "POST");
        self.client.http.post(url).bearer_auth(&self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slash() {
        let client = TaigaClient::new("http://localhost:8000/api/v1/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api/v1");
        assert_eq!(client.url("epics"), "http://localhost:8000/api/v1/epics");
    }

    #[test]
    fn nested_link_url() {
        let client = TaigaClient::new("http://localhost:8000/api/v1").unwrap();
        assert_eq!(
            client.url("epics/42/related_userstories"),
            "http://localhost:8000/api/v1/epics/42/related_userstories"
        );
    }
}
