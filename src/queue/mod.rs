//! Job-queue collaborator for deferred dispatch.
//!
//! Deferred delivery hands the would-be request to an external queue
//! instead of the network. The queue itself (broker, worker, retry
//! policy) is out of scope: this module only defines the hand-off
//! contract and two small implementations, a recording in-memory queue
//! and a null queue.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};


/// A serialized API call awaiting delivery by a queue consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedCall {
    /// Endpoint URI relative to the API base URL.
    pub method: String,
    /// Form parameters the call would have posted.
    pub data: BTreeMap<String, String>,
}

/// Trait for handing deferred calls to an external queue.
///
/// The hand-off is fire-and-forget: no acknowledgment is awaited and
/// enqueue failures are the collaborator's concern, so the contract is
/// infallible from the dispatcher's side.
pub trait JobQueue: Send + Sync {
    /// Enqueues `call` under the named queue.
    fn enqueue(&self, queue: &str, call: QueuedCall);
}

impl<Q: JobQueue> JobQueue for Arc<Q> {
    fn enqueue(&self, queue: &str, call: QueuedCall) {
        (**self).enqueue(queue, call);
    }
}

/// In-memory queue that records enqueued calls.
///
/// Suitable for tests and for embedders that drain the queue from a
/// worker task in the same process.
#[derive(Debug, Default)]
pub struct InMemoryQueue {
    entries: Mutex<Vec<(String, QueuedCall)>>,
}

impl InMemoryQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all recorded `(queue, call)` pairs in
    /// enqueue order.
    #[must_use]
    pub fn drain(&self) -> Vec<(String, QueuedCall)> {
        match self.entries.lock() {
            Ok(mut entries) => std::mem::take(&mut *entries),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    /// Number of calls currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |e| e.len())
    }

    /// Returns true when no calls are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl JobQueue for InMemoryQueue {
    fn enqueue(&self, queue: &str, call: QueuedCall) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((queue.to_string(), call));
        }
    }
}

/// Queue that discards every call.
///
/// The default collaborator for clients that never defer; a deferred
/// dispatch against it is logged and dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullQueue;

impl JobQueue for NullQueue {
    fn enqueue(&self, queue: &str, call: QueuedCall) {
        tracing::warn!(
            queue = %queue,
            method = %call.method,
            "no job queue configured, dropping deferred call"
        );
    }
}
