//! Shared fixtures for facade tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::auth::Credentials;
use crate::dispatch::Dispatcher;
use crate::http::{HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::queue::InMemoryQueue;

/// Mock HTTP client that always answers with the same canned body.
#[derive(Debug)]
pub(super) struct CannedClient {
    body: Vec<u8>,
    status: http::StatusCode,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl CannedClient {
    pub(super) fn ok(body: &[u8]) -> Self {
        Self {
            body: body.to_vec(),
            status: http::StatusCode::OK,
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub(super) fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The form body of the only captured request, decoded into pairs.
    pub(super) fn captured_form(&self) -> Vec<(String, String)> {
        let requests = self.captured_requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        url::form_urlencoded::parse(&requests[0].body)
            .into_owned()
            .collect()
    }
}

impl HttpClient for CannedClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        Ok(HttpResponse::new(self.status, self.body.clone()))
    }
}

impl HttpClient for Arc<CannedClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}

pub(super) fn test_dispatcher(
    http: Arc<CannedClient>,
) -> Dispatcher<Arc<CannedClient>, Arc<InMemoryQueue>> {
    Dispatcher::new(
        Credentials::new("app-key", "app-secret"),
        http,
        Arc::new(InMemoryQueue::new()),
    )
}
