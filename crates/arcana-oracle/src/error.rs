//! Error types for narrative providers.
//!
//! These never cross the provider boundary; `produce_reading` logs them and
//! substitutes a fallback message.

use thiserror::Error;

/// Result type for provider internals.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors that can occur while requesting a narrative.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport failure or timeout.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}
