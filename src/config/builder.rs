//! EdidConfig builder for constructing configuration

use super::{ConfigError, EdidConfig, Field};
use crate::base58;

/// Default configuration values
pub(super) const DEFAULT_TIME_LEN: u32 = 8;
pub(super) const DEFAULT_SHARD_LEN: u32 = 3;
pub(super) const DEFAULT_COUNTER_LEN: u32 = 2;
pub(super) const DEFAULT_SHARD_COUNT: u64 = 4000;
pub(super) const DEFAULT_MAX_COUNTER: u64 = 999;
pub(super) const DEFAULT_EPOCH: i64 = 0;

/// 7 digits keep the time field usable until December 2039
pub(super) const MIN_TIME_LEN: u32 = 7;
pub(super) const MIN_FIELD_LEN: u32 = 1;
/// 58^10 is the widest field that still fits a u64
pub(super) const MAX_FIELD_LEN: u32 = 10;

/// Builder for EdidConfig
///
/// Every option starts at its default; `build` validates the widths and
/// resolves `shard_count` / `max_counter` of `0` to the field maximum.
#[derive(Debug, Clone, Copy)]
pub struct EdidConfigBuilder {
    pub(super) time_len: u32,
    pub(super) shard_len: u32,
    pub(super) counter_len: u32,
    pub(super) shard_count: u64,
    pub(super) max_counter: u64,
    pub(super) epoch: i64,
}

impl EdidConfigBuilder {
    /// Create a new EdidConfigBuilder with default values
    pub const fn new() -> Self {
        Self {
            time_len: DEFAULT_TIME_LEN,
            shard_len: DEFAULT_SHARD_LEN,
            counter_len: DEFAULT_COUNTER_LEN,
            shard_count: DEFAULT_SHARD_COUNT,
            max_counter: DEFAULT_MAX_COUNTER,
            epoch: DEFAULT_EPOCH,
        }
    }

    /// Set the width of the time field in base58 digits (7-10)
    pub const fn time_len(mut self, len: u32) -> Self {
        self.time_len = len;
        self
    }

    /// Set the width of the shard field in base58 digits (1-10)
    pub const fn shard_len(mut self, len: u32) -> Self {
        self.shard_len = len;
        self
    }

    /// Set the width of the counter field in base58 digits (1-10)
    pub const fn counter_len(mut self, len: u32) -> Self {
        self.counter_len = len;
        self
    }

    /// Set the number of shards; `0` selects `58^shard_len`
    pub const fn shard_count(mut self, count: u64) -> Self {
        self.shard_count = count;
        self
    }

    /// Set the largest counter value; `0` selects `58^counter_len - 1`
    pub const fn max_counter(mut self, max: u64) -> Self {
        self.max_counter = max;
        self
    }

    /// Set the epoch in milliseconds since the Unix epoch
    pub const fn epoch(mut self, epoch: i64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Validate and resolve the final EdidConfig
    pub fn build(self) -> Result<EdidConfig, ConfigError> {
        check_len(Field::Time, self.time_len, MIN_TIME_LEN)?;
        let shard_capacity = check_len(Field::Shard, self.shard_len, MIN_FIELD_LEN)?;
        let counter_capacity = check_len(Field::Counter, self.counter_len, MIN_FIELD_LEN)?;

        let shard_count = resolve(Field::Shard, self.shard_count, shard_capacity)?;
        let max_counter = resolve(Field::Counter, self.max_counter, counter_capacity - 1)?;

        Ok(EdidConfig::from_parts(
            self.time_len,
            self.shard_len,
            self.counter_len,
            shard_count,
            max_counter,
            self.epoch,
        ))
    }
}

impl Default for EdidConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a width against its bounds and return the field capacity `58^len`
fn check_len(field: Field, len: u32, min: u32) -> Result<u64, ConfigError> {
    let invalid = ConfigError::InvalidLength {
        field,
        len,
        min,
        max: MAX_FIELD_LEN,
    };
    if !(min..=MAX_FIELD_LEN).contains(&len) {
        return Err(invalid);
    }
    base58::capacity(len).ok_or(invalid)
}

fn resolve(field: Field, value: u64, max: u64) -> Result<u64, ConfigError> {
    match value {
        0 => Ok(max),
        v if v > max => Err(ConfigError::ValueTooLarge { field, value, max }),
        v => Ok(v),
    }
}
