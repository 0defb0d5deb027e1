//! Per-source completion barrier

use std::sync::atomic::{AtomicUsize, Ordering};

/// Tracks how many sources of a fan-out are still outstanding.
///
/// Sized once at fan-out start from the catalog snapshot and never grows.
/// Each source arrives exactly once, in the turn where it resolves
/// (successfully or not); the fan-out is complete when the count reaches
/// zero. Atomic decrement makes the "completed twice" and "never completed"
/// races of a check-then-set map impossible.
#[derive(Debug)]
pub struct FanoutBarrier {
    remaining: AtomicUsize,
    total: usize,
}

impl FanoutBarrier {
    pub fn new(total: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(total),
            total,
        }
    }

    /// Number of sources the fan-out started with
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of sources that have not yet arrived
    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Acquire)
    }

    /// Mark one source finished. Returns `true` when this arrival was the
    /// last one. Must be called exactly once per source.
    pub fn arrive(&self) -> bool {
        let prev = self.remaining.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(prev > 0, "barrier arrival after completion");
        prev == 1
    }
}
