//! Authenticated request dispatch.
//!
//! The [`Dispatcher`] is the core of the crate: it signs each outbound
//! request with fresh [`RequestSignature`] material, posts it to the
//! API (or hands it to the job queue in deferred mode), and classifies
//! the response into success or the three-tier error taxonomy.

mod classify;
mod error;

#[cfg(test)]
mod classify_tests;

use std::collections::BTreeMap;

use crate::auth::{Credentials, RequestSignature};
use crate::http::{HttpClient, HttpRequest, ReqwestClient};
use crate::queue::{JobQueue, NullQueue, QueuedCall};

pub use error::ApiError;

/// Default API base URL all endpoint URIs are resolved against.
pub const DEFAULT_BASE_URL: &str = "https://api.netease.im/nimserver/";

/// Fixed client identifier sent in the `User-Agent` header.
const CLIENT_IDENT: &str = "WebWorker/2.0";

/// Decoded success envelope: the full JSON object the API returned.
///
/// Business facades pick their concrete fields out of this mapping.
pub type ApiPayload = serde_json::Map<String, serde_json::Value>;

/// Delivery mode for a single dispatch.
///
/// Passed explicitly per call: there is no instance-level toggle, so
/// concurrent callers sharing a dispatcher cannot race on which call
/// gets deferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchMode {
    /// Sign and POST the request now, blocking up to the HTTP timeout.
    Immediate,
    /// Hand the call to the job queue with this name and return an
    /// empty success immediately, without touching the network.
    Deferred(String),
}

/// Signs and dispatches requests against the Yunxin server API.
///
/// Stateless across calls apart from the credentials it closes over;
/// freely shareable between tasks. A single dispatch performs no
/// retries, batching, or deduplication.
#[derive(Debug)]
pub struct Dispatcher<H = ReqwestClient, Q = NullQueue> {
    credentials: Credentials,
    base_url: url::Url,
    http: H,
    queue: Q,
}

impl<H, Q> Dispatcher<H, Q> {
    /// Creates a dispatcher over the given HTTP client and job queue,
    /// using [`DEFAULT_BASE_URL`].
    ///
    /// # Panics
    ///
    /// Never: the default base URL is statically known to parse.
    #[must_use]
    pub fn new(credentials: Credentials, http: H, queue: Q) -> Self {
        let base_url = url::Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid");
        Self {
            credentials,
            base_url,
            http,
            queue,
        }
    }

    /// Overrides the API base URL (private deployments, test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: url::Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Returns the credentials this dispatcher signs with.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the configured base URL.
    #[must_use]
    pub const fn base_url(&self) -> &url::Url {
        &self.base_url
    }
}

impl<H: HttpClient, Q: JobQueue> Dispatcher<H, Q> {
    /// Dispatches `params` to the endpoint `uri` in the given mode.
    ///
    /// `uri` is resolved relative to the base URL
    /// (e.g. `"user/create.action"`). On success the full decoded
    /// envelope is returned; deferred dispatch returns an empty one.
    ///
    /// # Errors
    ///
    /// Immediate mode fails with [`ApiError::Network`] on transport
    /// failure or non-200 HTTP status, [`ApiError::Business`] on a
    /// domain rejection, and [`ApiError::Inner`] on a malformed
    /// envelope. Deferred mode never fails; enqueue problems belong to
    /// the queue collaborator.
    pub async fn dispatch(
        &self,
        uri: &str,
        params: &BTreeMap<String, String>,
        mode: DispatchMode,
    ) -> Result<ApiPayload, ApiError> {
        match mode {
            DispatchMode::Deferred(queue) => {
                tracing::debug!(queue = %queue, method = %uri, "deferring call to job queue");
                self.queue.enqueue(
                    &queue,
                    QueuedCall {
                        method: uri.to_string(),
                        data: params.clone(),
                    },
                );
                Ok(ApiPayload::new())
            }
            DispatchMode::Immediate => self.send_now(uri, params).await,
        }
    }

    /// Dispatches immediately; shorthand for [`DispatchMode::Immediate`].
    ///
    /// # Errors
    ///
    /// Same as [`Dispatcher::dispatch`] in immediate mode.
    pub async fn send(
        &self,
        uri: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<ApiPayload, ApiError> {
        self.send_now(uri, params).await
    }

    async fn send_now(
        &self,
        uri: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<ApiPayload, ApiError> {
        let url = self.base_url.join(uri).map_err(|e| ApiError::Network {
            status: None,
            message: format!("invalid endpoint URI '{uri}': {e}"),
        })?;

        // Fresh signing material per request; never cached or reused.
        let signature = RequestSignature::build(self.credentials.app_secret());
        let request = self.signed_request(url, params, &signature)?;

        tracing::debug!(method = %uri, "dispatching signed API request");
        let response = self.http.request(request).await?;

        if !response.is_ok() {
            return Err(ApiError::Network {
                status: Some(response.status.as_u16()),
                message: response.body_text(),
            });
        }

        classify::classify(&response.body)
    }

    fn signed_request(
        &self,
        url: url::Url,
        params: &BTreeMap<String, String>,
        signature: &RequestSignature,
    ) -> Result<HttpRequest, ApiError> {
        let mut request = HttpRequest::post_form(url, params).with_header(
            http::header::USER_AGENT,
            http::HeaderValue::from_static(CLIENT_IDENT),
        );

        let auth_headers = [
            ("appkey", self.credentials.app_key()),
            ("nonce", signature.nonce.as_str()),
            ("curtime", signature.cur_time.as_str()),
            ("checksum", signature.checksum.as_str()),
        ];
        for (name, value) in auth_headers {
            let value = http::HeaderValue::from_str(value).map_err(|_| ApiError::Network {
                status: None,
                message: format!("credential not representable as `{name}` header"),
            })?;
            request = request.with_header(http::HeaderName::from_static(name), value);
        }

        Ok(request)
    }
}
