//! HTTP request/response value types and the client trait.

use std::collections::BTreeMap;

use super::HttpError;

/// An HTTP request to be sent to the API endpoint.
///
/// A plain value type built by the dispatcher and handed to whichever
/// [`HttpClient`] implementation is plugged in. Methods and headers use
/// the standard `http` crate types.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (the Yunxin API is POST-only)
    pub method: http::Method,
    /// Target URL
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Request body
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Creates a POST request carrying `params` as a form-encoded body.
    ///
    /// Sets `Content-Type: application/x-www-form-urlencoded`.
    #[must_use]
    pub fn post_form(url: url::Url, params: &BTreeMap<String, String>) -> Self {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish()
            .into_bytes();

        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/x-www-form-urlencoded"),
        );

        Self {
            method: http::Method::POST,
            url,
            headers,
            body,
        }
    }

    /// Adds a header to the request.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// An HTTP response received from the API endpoint.
///
/// The body is fully buffered; Yunxin envelopes are small JSON objects.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response body (fully buffered)
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns true for a 200 status, the only status the API uses for
    /// a well-formed envelope (success or business failure alike).
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == http::StatusCode::OK
    }

    /// Returns the body decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Trait for performing the HTTP exchange.
///
/// Abstracting the client lets tests inject canned responses and lets
/// embedders swap the HTTP library without touching dispatch logic.
pub trait HttpClient: Send + Sync {
    /// Sends an HTTP request and returns the buffered response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the connection fails, the request
    /// times out, or the URL is rejected by the underlying client.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
