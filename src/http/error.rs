//! Error type for the HTTP layer.

use thiserror::Error;

/// Error produced by an [`HttpClient`](super::HttpClient) implementation.
///
/// Describes what went wrong at the transport level; the dispatcher maps
/// these into its network-error taxonomy.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed (DNS, refused connection, TLS, reset).
    #[error("connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server did not respond within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The URL was rejected while building the request.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}
