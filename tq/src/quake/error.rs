//! Earthquake client error types

use thiserror::Error;

/// Errors from earthquake feed operations
#[derive(Debug, Error)]
pub enum QuakeError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("feed error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid feed payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuakeError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            QuakeError::Api { status, .. } => is_retryable_status(*status),
            QuakeError::Network(_) => true,
            QuakeError::Json(_) => false,
        }
    }
}

/// Check if an HTTP status code is retryable
pub(crate) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500 | 502 | 503 | 504 | 529)
}
