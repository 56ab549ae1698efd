//! The three-tier error taxonomy for API dispatch.

use thiserror::Error;

use crate::http::HttpError;

/// Error produced by dispatching a request to the Yunxin API.
///
/// The three kinds are mutually exclusive and all propagate directly to
/// the caller of [`Dispatcher::dispatch`](super::Dispatcher::dispatch);
/// none are retried or swallowed internally. Deferred dispatch raises
/// none of them by design.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure or non-200 HTTP status.
    ///
    /// `status` is `None` when the exchange itself failed (connection
    /// error, timeout) before any status was received.
    #[error("network error (status {status:?}): {message}")]
    Network {
        /// HTTP status code, if a response was received.
        status: Option<u16>,
        /// Raw response body or transport error message.
        message: String,
    },

    /// Domain-level rejection reported inside a well-formed envelope.
    ///
    /// Carries the remote service's own status code and human-readable
    /// description verbatim. Bad parameters, rate limits and similar
    /// conditions land here.
    #[error("business error {code}: {desc}")]
    Business {
        /// Remote status code (never the success sentinel 200).
        code: i64,
        /// Remote description, empty when the envelope omitted it.
        desc: String,
    },

    /// HTTP 200 but the body is not a usable envelope.
    ///
    /// Unparseable JSON, a non-object payload, or an envelope without an
    /// integer `code` field: a contract violation by the remote service,
    /// unrecoverable for this call.
    #[error("inner error, unexpected response body: {body}")]
    Inner {
        /// The offending body, decoded lossily for diagnostics.
        body: String,
    },
}

impl ApiError {
    pub(crate) fn inner(raw: &[u8]) -> Self {
        Self::Inner {
            body: String::from_utf8_lossy(raw).into_owned(),
        }
    }

    /// True for the [`ApiError::Network`] variant.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// True for the [`ApiError::Business`] variant.
    #[must_use]
    pub const fn is_business(&self) -> bool {
        matches!(self, Self::Business { .. })
    }

    /// True for the [`ApiError::Inner`] variant.
    #[must_use]
    pub const fn is_inner(&self) -> bool {
        matches!(self, Self::Inner { .. })
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        Self::Network {
            status: None,
            message: err.to_string(),
        }
    }
}
