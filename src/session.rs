//! Discarding superseded diff results.
//!
//! Hosts that re-diff on every edit tag each request with a [`DiffTicket`]
//! and only apply a result whose ticket is still the newest. A running
//! computation is never interrupted; stale results are simply dropped.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

/// Identifies one diff request within a [`DiffSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DiffTicket(u64);

/// Tracks the newest outstanding request.
#[derive(Debug, Default)]
pub struct DiffSession {
    latest: AtomicU64,
}

impl DiffSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding all earlier tickets.
    pub fn begin(&self) -> DiffTicket {
        DiffTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `ticket` is still the newest request.
    pub fn is_current(&self, ticket: DiffTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Return `result` if `ticket` is current, otherwise drop it.
    pub fn accept<T>(&self, ticket: DiffTicket, result: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(result)
        } else {
            trace!(ticket = ticket.0, "discarding superseded diff result");
            None
        }
    }
}
