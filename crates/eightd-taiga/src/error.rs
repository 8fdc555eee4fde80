//! Taiga client error types.

use thiserror::Error;

/// Errors that can occur when talking to the Taiga API.
#[derive(Debug, Error)]
pub enum TaigaError {
    /// HTTP transport error (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Taiga answered with a non-success status code.
    #[error("HTTP request failed ({status}): {body}")]
    Api {
        /// HTTP status code returned by Taiga.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A success response did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}

impl TaigaError {
    /// Status code for [`TaigaError::Api`], `None` otherwise.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(_) | Self::Parse(_) => None,
        }
    }
}
