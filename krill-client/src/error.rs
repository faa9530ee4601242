//! Client error types

use thiserror::Error;

/// Client error type
///
/// Maps the backend's failure surface onto the cases the desk controller
/// distinguishes.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never completed (connect refused, DNS, timeout)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend failed to service the request (5xx)
    #[error("server error: {0}")]
    Server(String),

    /// Resource not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Payload rejected by the backend
    #[error("validation error: {0}")]
    Validation(String),

    /// Response body did not decode as expected
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// True when the backend never serviced the request; the desk treats
    /// these as page-blocking fetch failures
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Server(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
