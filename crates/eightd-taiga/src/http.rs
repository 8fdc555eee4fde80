//! Shared HTTP response helpers for the Taiga endpoints.
//!
//! Every endpoint has the same contract: any 2xx is success, anything else
//! becomes [`TaigaError::Api`] carrying the status and the raw body.

use serde::de::DeserializeOwned;

use crate::error::TaigaError;

/// Return the response unchanged on success, or an [`TaigaError::Api`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, TaigaError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(TaigaError::Api {
            status: status.as_u16(),
            body: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Decode a success body as `T`, naming `what` in the parse error.
pub async fn read_json<T: DeserializeOwned>(
    resp: reqwest::Response,
    what: &str,
) -> Result<T, TaigaError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| TaigaError::Parse(format!("{what}: {e}")))
}
