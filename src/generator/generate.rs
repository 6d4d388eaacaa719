//! Identifier generation
//!
//! Resolves time, shard and counter, validates them, then concatenates the
//! zero-padded base58 fields `time | shard | counter`

#[cfg(feature = "tracing")]
use tracing::instrument;

use super::Edid;
use crate::base58::encode_padded;
use crate::error::{EdidError, ValidationError};
use crate::time::TimeSource;

/// Inputs to [`Edid::generate`]; every field is optional
///
/// Values are signed so out-of-range input is reported by validation
/// instead of being unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions<'a> {
    /// Absolute time in ms; defaults to the codec's clock
    pub time: Option<i64>,
    /// Shard number; exclusive with `parent`
    pub shard: Option<i64>,
    /// Existing id whose shard is reused; exclusive with `shard`
    pub parent: Option<&'a str>,
    /// Counter value; defaults to [`Edid::next_counter`]
    pub counter: Option<i64>,
}

impl<'a> GenerateOptions<'a> {
    pub const fn new() -> Self {
        Self {
            time: None,
            shard: None,
            parent: None,
            counter: None,
        }
    }

    pub const fn time(mut self, time: i64) -> Self {
        self.time = Some(time);
        self
    }

    pub const fn shard(mut self, shard: i64) -> Self {
        self.shard = Some(shard);
        self
    }

    pub const fn parent(mut self, parent: &'a str) -> Self {
        self.parent = Some(parent);
        self
    }

    pub const fn counter(mut self, counter: i64) -> Self {
        self.counter = Some(counter);
        self
    }
}

impl<C: TimeSource> Edid<C> {
    /// Generate a new identifier
    ///
    /// Without a shard or parent the shard falls back to
    /// `(time - epoch) % shard_count`, which spreads ids by time only and
    /// gives no collision guarantees for bursts.
    ///
    /// A `parent` that cannot be parsed comes back as [`EdidError::Format`];
    /// unlike [`parse`](Self::parse) this never panics.
    ///
    /// The loopback counter advances only when `counter` is not given, and
    /// it advances even if validation then fails.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self, options: GenerateOptions<'_>) -> Result<String, EdidError> {
        if options.shard.is_some() && options.parent.is_some() {
            return Err(EdidError::Conflict);
        }

        let absolute = options.time.unwrap_or_else(|| self.now_ms());
        let time = absolute
            .checked_sub(self.config.epoch())
            .ok_or(ValidationError::Time { value: absolute })?;

        let shard = match (options.shard, options.parent) {
            (Some(shard), _) => shard,
            (None, Some(parent)) => self.try_parse(parent)?.shard as i64,
            (None, None) => time % self.config.shard_count() as i64,
        };

        let counter = match options.counter {
            Some(counter) => counter,
            None => self.next_counter() as i64,
        };

        self.validate(time, shard, counter)?;
        Ok(self.encode_fields(time as u64, shard as u64, counter as u64))
    }

    /// Concatenate already validated fields
    #[inline]
    pub(crate) fn encode_fields(&self, time: u64, shard: u64, counter: u64) -> String {
        let config = &self.config;
        let mut id = String::with_capacity(config.id_len());
        id.push_str(&encode_padded(time, config.time_len() as usize));
        id.push_str(&encode_padded(shard, config.shard_len() as usize));
        id.push_str(&encode_padded(counter, config.counter_len() as usize));
        id
    }
}
