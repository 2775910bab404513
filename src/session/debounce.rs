//! Debounced filter recomputation
//!
//! A single pending task: scheduling replaces whatever was queued and
//! restarts the delay, so at most one recomputation is pending and stale
//! ones never fire. This is the only cancellation semantic in the system.

use std::future::pending;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    queued: Option<String>,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            queued: None,
            deadline: None,
        }
    }

    /// Queues `query`, replacing any pending one and restarting the delay.
    pub fn schedule(&mut self, query: String) {
        self.queued = Some(query);
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// Drops the pending task, if any.
    pub fn cancel(&mut self) {
        self.queued = None;
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.queued.is_some()
    }

    /// Resolves with the queued query once the delay has elapsed. With
    /// nothing queued this never resolves, which makes it safe to poll
    /// unconditionally in a select loop.
    pub async fn fired(&mut self) -> String {
        match self.deadline {
            Some(deadline) => {
                sleep_until(deadline).await;
                self.deadline = None;
                self.queued.take().unwrap_or_default()
            }
            None => pending().await,
        }
    }
}
