//! Configuration for the EDID codec

mod builder;

use std::fmt;

pub use builder::EdidConfigBuilder;

/// One of the three fixed-width fields of an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Time,
    Shard,
    Counter,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Time => "time",
            Field::Shard => "shard",
            Field::Counter => "counter",
        })
    }
}

/// Errors related to `EdidConfig` builder validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A field width is outside its supported range
    #[error("Invalid {field} length {len}: must be between {min} and {max}")]
    InvalidLength {
        field: Field,
        len: u32,
        min: u32,
        max: u32,
    },
    /// An explicit shard count or max counter does not fit the field width
    #[error("Too big {field} value {value}: maximum for the configured length is {max}")]
    ValueTooLarge { field: Field, value: u64, max: u64 },
}

/// Resolved configuration for the EDID codec
///
/// Built once through [`EdidConfigBuilder`]; every value is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdidConfig {
    time_len: u32,
    shard_len: u32,
    counter_len: u32,
    shard_count: u64,
    max_counter: u64,
    epoch: i64,
}

impl EdidConfig {
    pub(crate) const fn from_parts(
        time_len: u32,
        shard_len: u32,
        counter_len: u32,
        shard_count: u64,
        max_counter: u64,
        epoch: i64,
    ) -> Self {
        Self {
            time_len,
            shard_len,
            counter_len,
            shard_count,
            max_counter,
            epoch,
        }
    }

    /// Create a new configuration builder
    pub const fn builder() -> EdidConfigBuilder {
        EdidConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn time_len(&self) -> u32 {
        self.time_len
    }

    #[inline(always)]
    pub const fn shard_len(&self) -> u32 {
        self.shard_len
    }

    #[inline(always)]
    pub const fn counter_len(&self) -> u32 {
        self.counter_len
    }

    /// Number of allowed shards; valid shards are `0..shard_count`
    #[inline(always)]
    pub const fn shard_count(&self) -> u64 {
        self.shard_count
    }

    /// Largest counter value before the counter wraps to 0
    #[inline(always)]
    pub const fn max_counter(&self) -> u64 {
        self.max_counter
    }

    /// Epoch in milliseconds since the Unix epoch
    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }

    /// Total identifier width in base58 digits
    #[inline(always)]
    pub const fn id_len(&self) -> usize {
        (self.time_len + self.shard_len + self.counter_len) as usize
    }
}

impl Default for EdidConfig {
    fn default() -> Self {
        Self::from_parts(
            builder::DEFAULT_TIME_LEN,
            builder::DEFAULT_SHARD_LEN,
            builder::DEFAULT_COUNTER_LEN,
            builder::DEFAULT_SHARD_COUNT,
            builder::DEFAULT_MAX_COUNTER,
            builder::DEFAULT_EPOCH,
        )
    }
}
