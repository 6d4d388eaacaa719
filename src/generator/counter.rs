//! Wrapping loopback counter
//!
//! Lock-free increment-with-wrap over a single `AtomicU64`

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter cycling through `0..=max`, wrapping back to 0
#[derive(Debug)]
pub(crate) struct Counter {
    value: AtomicU64,
    max: u64,
}

impl Counter {
    /// Start at `max` so the first `next` yields 0
    pub(crate) const fn new(max: u64) -> Self {
        Self {
            value: AtomicU64::new(max),
            max,
        }
    }

    #[inline(always)]
    const fn step(current: u64, max: u64) -> u64 {
        if current < max {
            current + 1
        } else {
            0
        }
    }

    /// Advance and return the new value
    #[inline]
    pub(crate) fn next(&self) -> u64 {
        let max = self.max;
        let previous = self
            .value
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |c| {
                Some(Self::step(c, max))
            })
            .unwrap_or_else(|c| c);
        Self::step(previous, max)
    }
}
