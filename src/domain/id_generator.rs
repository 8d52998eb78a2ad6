//! Id generation for newly created courses.

use std::sync::atomic::{AtomicI64, Ordering};

/// Largest id handed out: 2^53 - 1, the largest integer a JSON number
/// survives exactly in JavaScript clients.
pub const MAX_SAFE_ID: i64 = (1 << 53) - 1;

/// Source of unique course ids.
///
/// Implementations must never return the same id twice for the lifetime
/// of the process. `None` means the id space is exhausted.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Option<i64>;
}

/// Hands out strictly increasing ids from a fixed start up to [`MAX_SAFE_ID`].
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicI64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first id is `start`.
    pub fn new(start: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> Option<i64> {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| {
                (id <= MAX_SAFE_ID).then_some(id + 1)
            })
            .ok()
    }
}
