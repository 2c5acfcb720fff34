//! Error Handling Module
//!
//! Internal error type for the client's fallible seams: header construction,
//! HTTP client construction and the transport itself. `ClientError` never
//! crosses the executor boundary; `RequestExecutor::execute` folds every
//! failure into the returned [`ApiOutcome`](crate::types::outcome::ApiOutcome).

use thiserror::Error;

/// Errors produced below the executor boundary.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be transported at all (DNS failure, refused
    /// connection, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid configuration: bad header name or value, malformed proxy
    /// address, HTTP client construction failure.
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Whether this failure happened before the server was ever reached.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
