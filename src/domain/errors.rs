//! Error taxonomy for the fetch pipeline.

use thiserror::Error;

/// Failure talking to the remote open-banking API.
///
/// The variants distinguish causes for logging, but callers treat every
/// gateway failure identically: the call failed and was not retried.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport-level failure (connect, TLS, timeout)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Remote returned a non-success HTTP status
    #[error("unexpected status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Response body could not be deserialized into the expected shape
    #[error("malformed response body: {0}")]
    Malformed(String),
}

impl GatewayError {
    /// Build a status error from a non-success response, keeping the body
    /// for the logs.
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        GatewayError::Status { status, body }
    }

    /// Whether the failure was an authorization rejection (401/403).
    /// Only used to sharpen log lines; the return contract is uniform.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(
            self,
            GatewayError::Status { status, .. }
                if *status == reqwest::StatusCode::UNAUTHORIZED
                    || *status == reqwest::StatusCode::FORBIDDEN
        )
    }
}

/// Failure in the session cache store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cache store backend error: {0}")]
    Backend(String),
}

/// Failure of an orchestrator operation.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Missing or empty required argument; no remote call was attempted
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Operation requires a prior successful code exchange
    #[error("no exchanged token for this session; call exchange first")]
    Unauthenticated,

    /// A gateway call failed; the cache was left as it was
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The cache store failed to read or write the session record
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type FetchResult<T> = Result<T, FetchError>;
