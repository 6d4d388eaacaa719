use thiserror::Error;

use crate::base58::DecodeError;
use crate::config::Field;

/// A field value outside the range the configuration allows
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Epoch-relative time is negative or not representable
    #[error("Invalid time: {value}")]
    Time { value: i64 },
    /// Shard is outside `[0, shard_count)`
    #[error("Invalid shard: {value} (shard count is {shard_count})")]
    Shard { value: i64, shard_count: u64 },
    /// Counter is outside `[0, max_counter]`
    #[error("Invalid counter: {value} (max counter is {max})")]
    Counter { value: i64, max: u64 },
}

impl ValidationError {
    /// The field that failed validation
    pub const fn field(&self) -> Field {
        match self {
            ValidationError::Time { .. } => Field::Time,
            ValidationError::Shard { .. } => Field::Shard,
            ValidationError::Counter { .. } => Field::Counter,
        }
    }
}

/// An identifier string that cannot be sliced or decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Short id {id:?}: expected at least {min} characters")]
    TooShort { id: String, min: usize },
    #[error("Malformed {field} field: {source}")]
    Field {
        field: Field,
        #[source]
        source: DecodeError,
    },
    #[error("Time field {value} is out of the millisecond range")]
    TimeOutOfRange { value: u64 },
}

/// Represents errors that can occur during EDID operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EdidError {
    /// Both a shard and a parent id were supplied to `generate`
    #[error("Both parent and shard are provided")]
    Conflict,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Format(#[from] FormatError),
    /// The input to `restore` is not a base10 integer in range
    #[error("Invalid compacted id: {value:?}")]
    InvalidCompacted { value: String },
}
