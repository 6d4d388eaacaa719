//! # EDID
//!
//! Compact, sortable, sharded identifiers encoded in base58.
//!
//! An id is three zero-padded base58 fields `time | shard | counter`
//! (13 characters in the default layout) that:
//! - 📈 sort by time, then shard, then counter
//! - 🧩 carry a logical shard, inherited from a parent id or chosen explicitly
//! - 🔄 use a per-process loopback counter to separate ids in one millisecond
//! - 🗜️ pack losslessly into a base10 integer for fixed-width storage
//!
//! ```
//! use edid::{Edid, EdidConfig, GenerateOptions};
//!
//! let edid = Edid::new(EdidConfig::default());
//! let id = edid
//!     .generate(GenerateOptions::new().shard(7).time(1_420_070_400_000).counter(10))
//!     .unwrap();
//! assert_eq!(id, "1eJZkzQo1181B");
//!
//! let child = edid.generate(GenerateOptions::new().parent(&id)).unwrap();
//! assert_eq!(edid.parse(&child).shard, 7);
//!
//! let compacted = edid.compact(&id);
//! assert_eq!(edid.restore(&compacted).unwrap(), id);
//! ```

#![forbid(unsafe_code)]

pub mod base58;
mod compact;
mod config;
mod error;
mod generator;
mod parser;
mod time;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{ConfigError, EdidConfig, EdidConfigBuilder, Field};
pub use error::{EdidError, FormatError, ValidationError};
pub use generator::{Edid, GenerateOptions};
pub use parser::ParsedId;
pub use time::{unix_time_ms, SystemClock, TimeSource};

pub use base58::DecodeError as Base58DecodeError;
