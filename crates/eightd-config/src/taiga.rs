//! Taiga connection settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    "http://10.5.216.7:8000/api/v1".to_string()
}

fn default_username() -> String {
    "shopfloor".to_string()
}

fn default_password() -> String {
    "shopfloor".to_string()
}

const fn default_project_id() -> u64 {
    63
}

#[derive(Clone, Deserialize, Serialize)]
pub struct TaigaConfig {
    /// API root, e.g. `https://taiga.example.com/api/v1`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default = "default_password")]
    pub password: String,

    /// Existing Taiga project the epic and stories are created in.
    #[serde(default = "default_project_id")]
    pub project_id: u64,
}

impl Default for TaigaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            username: default_username(),
            password: default_password(),
            project_id: default_project_id(),
        }
    }
}

// Keeps the password out of `{:?}` output and tracing fields.
impl std::fmt::Debug for TaigaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaigaConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("project_id", &self.project_id)
            .finish()
    }
}

impl TaigaConfig {
    /// API root without a trailing slash.
    #[must_use]
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api_root();
        if base_url.is_empty() {
            return Err(invalid("taiga.base_url", "must not be empty"));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(invalid(
                "taiga.base_url",
                "must start with http:// or https://",
            ));
        }
        if self.username.trim().is_empty() {
            return Err(invalid("taiga.username", "must not be empty"));
        }
        if self.project_id == 0 {
            return Err(invalid("taiga.project_id", "must be a positive project id"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
