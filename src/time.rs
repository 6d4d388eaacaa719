//! Time sources for EDID generation
//!
//! Provides wall-clock time in milliseconds since the Unix epoch

use std::time::{SystemTime, UNIX_EPOCH};

/// A source of the current time in milliseconds since 1970-01-01 UTC.
///
/// The codec subtracts its configured epoch from whatever this returns, so
/// implementations should not apply an epoch of their own.
///
/// Any `Fn() -> i64` closure is a time source, which keeps fixed clocks in
/// tests short:
///
/// ```
/// use edid::{Edid, EdidConfig, GenerateOptions};
///
/// let edid = Edid::with_clock(EdidConfig::default(), || 1_420_070_400_000_i64);
/// let id = edid.generate(GenerateOptions::new().shard(7).counter(10)).unwrap();
/// assert_eq!(id, "1eJZkzQo1181B");
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> i64;
}

/// Wall-clock time from [`SystemTime`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline(always)]
    fn current_millis(&self) -> i64 {
        unix_time_ms()
    }
}

impl<F> TimeSource for F
where
    F: Fn() -> i64,
{
    #[inline(always)]
    fn current_millis(&self) -> i64 {
        self()
    }
}

/// Get current wall-clock time in milliseconds since Unix epoch
///
/// A clock set before 1970 yields a negative value.
#[inline(always)]
pub fn unix_time_ms() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_millis() as i64,
        Err(err) => -(err.duration().as_millis() as i64),
    }
}
