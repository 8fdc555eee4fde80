//! Cross-cutting error types for eightd.
//!
//! HTTP and configuration failures live in their own crates
//! (`TaigaError`, `ConfigError`) and converge into `anyhow` in `eightd-cli`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The OS random source could not produce the epic name suffix.
    #[error("Random source unavailable: {0}")]
    Random(String),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
