//! Core EDID codec implementation
//!
//! Split into modules for testability:
//! - `counter` - Wrapping atomic loopback counter
//! - `generate` - Identifier generation and its options

mod counter;
mod generate;

use std::fmt;

use chrono::{DateTime, Utc};

use crate::base58;
use crate::config::EdidConfig;
use crate::error::ValidationError;
use crate::time::{SystemClock, TimeSource};

use counter::Counter;

pub use generate::GenerateOptions;

/// EDID codec: generates, parses, compacts and restores identifiers
///
/// The only mutable state is the loopback counter, which is updated
/// atomically, so one instance may be shared between threads.
#[derive(Debug)]
pub struct Edid<C = SystemClock> {
    pub(crate) config: EdidConfig,
    counter: Counter,
    clock: C,
}

impl Edid<SystemClock> {
    /// Create a codec reading the system clock
    pub fn new(config: EdidConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for Edid<SystemClock> {
    fn default() -> Self {
        Self::new(EdidConfig::default())
    }
}

impl<C: TimeSource> Edid<C> {
    /// Create a codec with a custom time source
    pub fn with_clock(config: EdidConfig, clock: C) -> Self {
        Self {
            config,
            counter: Counter::new(config.max_counter()),
            clock,
        }
    }

    /// Configuration this codec was built with
    #[inline(always)]
    pub const fn config(&self) -> &EdidConfig {
        &self.config
    }

    /// Advance the loopback counter: `0, 1, ..., max_counter, 0, ...`
    #[inline]
    pub fn next_counter(&self) -> u64 {
        self.counter.next()
    }

    /// Check an epoch-relative time, shard and counter, in that order
    pub fn validate(&self, time: i64, shard: i64, counter: i64) -> Result<(), ValidationError> {
        if time < 0 {
            return Err(ValidationError::Time { value: time });
        }
        let shard_count = self.config.shard_count();
        if shard < 0 || shard as u64 >= shard_count {
            return Err(ValidationError::Shard {
                value: shard,
                shard_count,
            });
        }
        let max = self.config.max_counter();
        if counter < 0 || counter as u64 > max {
            return Err(ValidationError::Counter { value: counter, max });
        }
        Ok(())
    }

    /// First absolute time (ms) the time field can no longer hold
    ///
    /// Generation does not reject later times; ids past this bound are wider
    /// than the configured layout and lose their ordering guarantees.
    pub fn max_time_millis(&self) -> i64 {
        let span = base58::capacity(self.config.time_len())
            .and_then(|c| i64::try_from(c).ok())
            .unwrap_or(i64::MAX);
        self.config.epoch().saturating_add(span)
    }

    /// [`max_time_millis`](Self::max_time_millis) as a UTC date, if chrono can represent it
    pub fn max_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.max_time_millis())
    }

    #[inline(always)]
    pub(crate) fn now_ms(&self) -> i64 {
        self.clock.current_millis()
    }
}

impl<C> fmt::Display for Edid<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edid shard_count={}, max_counter={}, time_len={}",
            self.config.shard_count(),
            self.config.max_counter(),
            self.config.time_len()
        )
    }
}
