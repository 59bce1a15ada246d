//! Error taxonomy for registry operations.

use thiserror::Error;

/// Errors that can occur while talking to the registry API.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Transport-level failure before an HTTP status was received
    /// (DNS, connection refused, timeout).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The registry answered with a non-success status.
    #[error("registry API returned status {status}: {message}")]
    Http {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("failed to decode registry response: {0}")]
    Decode(#[source] reqwest::Error),

    /// The caller handed us unusable input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl RegistryError {
    /// Whether this failure happened before the registry could answer.
    ///
    /// The finder downgrades these to a per-query report line instead of
    /// aborting the batch.
    pub fn is_network(&self) -> bool {
        matches!(self, RegistryError::Network(_))
    }
}
