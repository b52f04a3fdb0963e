//! Monotonic identifier counter shared by in-memory stores.

use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counter issuing strictly increasing values starting at 1.
///
/// Values are never handed out twice, and the counter never wraps around.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    /// Creates a sequence whose first issued value is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Issues the next value, or `None` once the counter is exhausted.
    pub fn next_value(&self) -> Option<u64> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                current.checked_add(1)
            })
            .ok()
    }

    /// Returns the value the next call to [`IdSequence::next_value`] would
    /// issue.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
