//! Debounced persistence
//!
//! Edits arrive as a keystroke stream. Every edit pushes the save deadline
//! back by `delay`, so only the state after the last edit of a burst is
//! written. There is a single deadline slot: re-scheduling replaces it.
//!
//! With `max_latency` set, the deadline never moves past
//! `first unsaved edit + max_latency`, which bounds how long a continuous
//! edit stream can defer persistence.

use std::time::Duration;

use tokio::time::Instant;

/// Single-slot save timer
#[derive(Debug, Clone)]
pub struct SaveDebouncer {
    delay: Duration,
    max_latency: Option<Duration>,
    deadline: Option<Instant>,
    first_pending: Option<Instant>,
}

impl SaveDebouncer {
    #[must_use]
    pub fn new(delay: Duration, max_latency: Option<Duration>) -> Self {
        Self {
            delay,
            max_latency,
            deadline: None,
            first_pending: None,
        }
    }

    /// Cancel any pending deadline and start a new one from `now`.
    pub fn schedule(&mut self, now: Instant) {
        let first = *self.first_pending.get_or_insert(now);
        let mut deadline = now + self.delay;
        if let Some(max) = self.max_latency {
            deadline = deadline.min(first + max);
        }
        self.deadline = Some(deadline);
    }

    /// When the pending save is due, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has passed. Returns `true` when a save must
    /// be emitted now.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    /// Consume a pending save regardless of its deadline (shutdown flush).
    pub fn take(&mut self) -> bool {
        let pending = self.is_pending();
        self.clear();
        pending
    }

    fn clear(&mut self) {
        self.deadline = None;
        self.first_pending = None;
    }
}
