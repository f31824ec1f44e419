//! Request metrics for the contacts HTTP client.
//!
//! Clones share one set of lock-free counters.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct Counters {
    requests: AtomicU64,
    errors: AtomicU64,
    duration_ms: AtomicU64,
    contacts_fetched: AtomicU64,
    contacts_written: AtomicU64,
}

/// Client-side counters: requests sent, requests failed, time spent, and
/// contacts read or written.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    counters: Arc<Counters>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_http_request(&self, duration: Duration) {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self.counters.requests.fetch_add(1, Ordering::Relaxed);
        self.counters.duration_ms.fetch_add(millis, Ordering::Relaxed);
    }

    pub fn record_http_error(&self) {
        self.counters.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Contacts received from a list page or a single get.
    pub fn record_contacts_fetched(&self, count: usize) {
        self.counters
            .contacts_fetched
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// A create, update or delete that the server accepted.
    pub fn record_contact_written(&self) {
        self.counters.contacts_written.fetch_add(1, Ordering::Relaxed);
    }

    pub fn http_requests_total(&self) -> u64 {
        self.counters.requests.load(Ordering::Relaxed)
    }

    pub fn http_errors_total(&self) -> u64 {
        self.counters.errors.load(Ordering::Relaxed)
    }

    pub fn http_duration_total_ms(&self) -> u64 {
        self.counters.duration_ms.load(Ordering::Relaxed)
    }

    pub fn contacts_fetched_total(&self) -> u64 {
        self.counters.contacts_fetched.load(Ordering::Relaxed)
    }

    pub fn contacts_written_total(&self) -> u64 {
        self.counters.contacts_written.load(Ordering::Relaxed)
    }
}

/// Times one request from construction until [`HttpTimer::finish`].
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Record the elapsed time, and an error when `result` failed.
    pub fn finish<T, E>(self, result: &Result<T, E>) {
        self.metrics.record_http_request(self.start.elapsed());
        if result.is_err() {
            self.metrics.record_http_error();
        }
    }
}
