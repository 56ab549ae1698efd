//! Production HTTP client implementation using reqwest.

use std::time::Duration;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Production HTTP client wrapping `reqwest::Client`.
///
/// Carries the per-request timeout for the whole exchange (connect,
/// send, and response read), defaulting to the protocol's 5 seconds.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

/// Default exchange timeout when none is configured.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

impl ReqwestClient {
    /// Creates a client with the default 5-second timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a client with a caller-chosen exchange timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        // The builder only fails when the TLS backend cannot initialize,
        // in which case the default constructor would panic anyway.
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self { inner }
    }

    /// Creates a client from an existing reqwest client, for embedders
    /// that need custom pooling/TLS configuration.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }
        builder = builder.body(req.body);

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidUrl(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Connection(Box::new(e)))?
            .to_vec();

        Ok(HttpResponse::new(status, body))
    }
}
