//! Base10 compaction of identifiers
//!
//! An id packs into the integer
//! `N = ((time - epoch) * shard_count + shard) * (max_counter + 1) + counter`.
//! Whether `N` fits a 64-bit column depends on the chosen shard count, max
//! counter and time horizon: the defaults stay within 64 bits until 2116,
//! while `shard_count = 100, max_counter = 9999` needs 62 bits in 2085 and the
//! widest three-digit shard layout already needs 72 bits in 2100. The packing
//! itself is done in arbitrary precision, so every valid id compacts.

use num_bigint::BigUint;
use num_integer::Integer;
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::error::EdidError;
use crate::generator::{Edid, GenerateOptions};
use crate::time::TimeSource;

impl<C: TimeSource> Edid<C> {
    /// Pack an identifier into its base10 integer form
    ///
    /// # Panics
    /// Panics if the id is malformed, like [`parse`](Self::parse).
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn compact(&self, id: &str) -> String {
        let parsed = self.parse(id);
        // parse re-added the epoch to a non-negative field value
        let time = (parsed.time - self.config.epoch()) as u64;

        let packed = (BigUint::from(time) * self.config.shard_count() + parsed.shard)
            * self.counter_radix()
            + parsed.counter;
        packed.to_str_radix(10)
    }

    /// Rebuild the canonical identifier from its base10 integer form
    ///
    /// The decoded fields go through [`generate`](Self::generate), so the
    /// same validation applies and the counter state is left untouched.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn restore(&self, compacted: &str) -> Result<String, EdidError> {
        let invalid = || EdidError::InvalidCompacted {
            value: compacted.to_string(),
        };

        if compacted.is_empty() || !compacted.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let packed = BigUint::parse_bytes(compacted.as_bytes(), 10).ok_or_else(invalid)?;

        let (rest, counter) = packed.div_rem(&self.counter_radix());
        let (time, shard) = rest.div_rem(&BigUint::from(self.config.shard_count()));
        let time = i64::try_from(&time)
            .ok()
            .and_then(|t| t.checked_add(self.config.epoch()))
            .ok_or_else(invalid)?;

        // both remainders are below field capacities, which fit a u64
        let shard = u64::try_from(&shard).map_err(|_| invalid())?;
        let counter = u64::try_from(&counter).map_err(|_| invalid())?;

        self.generate(
            GenerateOptions::new()
                .time(time)
                .shard(shard as i64)
                .counter(counter as i64),
        )
    }

    #[inline(always)]
    fn counter_radix(&self) -> BigUint {
        BigUint::from(self.config.max_counter()) + 1u32
    }
}
