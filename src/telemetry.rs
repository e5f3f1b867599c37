//! Authentication counters.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub struct Metrics {
    pub sessions_issued: AtomicU64,
    pub login_failures: AtomicU64,
    pub tokens_accepted: AtomicU64,
    pub tokens_rejected: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_session(&self) {
        self.sessions_issued.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_login_failure(&self) {
        self.login_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_accept(&self) {
        self.tokens_accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_reject(&self) {
        self.tokens_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            sessions_issued: self.sessions_issued.load(Ordering::Relaxed),
            login_failures: self.login_failures.load(Ordering::Relaxed),
            tokens_accepted: self.tokens_accepted.load(Ordering::Relaxed),
            tokens_rejected: self.tokens_rejected.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Serialize, serde::Deserialize, PartialEq)]
pub struct MetricsSnapshot {
    pub sessions_issued: u64,
    pub login_failures: u64,
    pub tokens_accepted: u64,
    pub tokens_rejected: u64,
}
