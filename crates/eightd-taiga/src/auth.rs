use serde::{Deserialize, Serialize};

use crate::error::TaigaError;
use crate::http::{check_response, read_json};
use crate::{Session, TaigaClient};

/// Username/password pair for Taiga's "normal" login.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Serialize)]
struct AuthRequest<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct AuthResponse {
    auth_token: String,
}

impl TaigaClient {
    /// Log in and return a session carrying the bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`TaigaError::Api`] on a non-success status (e.g. 401 for bad
    /// credentials), [`TaigaError::Parse`] if the body has no `auth_token`.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<Session<'_>, TaigaError> {
        let body = AuthRequest {
            kind: "normal",
            username: &credentials.username,
            password: &credentials.password,
        };
        let resp = check_response(self.http.post(self.url("auth")).json(&body).send().await?).await?;
        let auth: AuthResponse = read_json(resp, "auth response").await?;

        tracing::info!(username = %credentials.username, "authenticated");
        Ok(Session {
            client: self,
            token: auth.auth_token,
        })
    }
}
