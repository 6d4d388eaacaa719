//! Identifier parsing
//!
//! Fields are sliced from the end: the last `counter_len` characters are the
//! counter, the `shard_len` before them the shard, and everything left over
//! is the time. Ids must be parsed with the same widths they were generated
//! with; a codec with a different layout silently reads other values.

use chrono::{DateTime, Utc};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::base58::decode_bytes;
use crate::config::Field;
use crate::error::{EdidError, FormatError};
use crate::generator::Edid;
use crate::time::TimeSource;

/// Fields decoded from an identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedId {
    /// Absolute time in ms since the Unix epoch
    pub time: i64,
    pub shard: u64,
    pub counter: u64,
    /// The identifier that was parsed
    pub source: String,
}

impl ParsedId {
    /// Time as a UTC date, if chrono can represent it
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time)
    }
}

impl<C: TimeSource> Edid<C> {
    /// Parse an identifier, panicking if it is malformed
    ///
    /// A malformed id is a data-integrity failure rather than a normal
    /// condition; use [`try_parse`](Self::try_parse) for untrusted input.
    ///
    /// # Panics
    /// Panics if the id is too short, contains characters outside the
    /// alphabet, or decodes to values the configuration rejects.
    pub fn parse(&self, id: &str) -> ParsedId {
        match self.try_parse(id) {
            Ok(parsed) => parsed,
            Err(err) => panic!("Malformed id {id:?}: {err}"),
        }
    }

    /// Parse an identifier, reporting malformed input as an error
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_parse(&self, id: &str) -> Result<ParsedId, EdidError> {
        let config = &self.config;
        let bytes = id.as_bytes();
        if bytes.len() < config.id_len() {
            return Err(FormatError::TooShort {
                id: id.to_string(),
                min: config.id_len(),
            }
            .into());
        }

        let counter_at = bytes.len() - config.counter_len() as usize;
        let shard_at = counter_at - config.shard_len() as usize;

        let time = decode_field(Field::Time, &bytes[..shard_at])?;
        let shard = decode_field(Field::Shard, &bytes[shard_at..counter_at])?;
        let counter = decode_field(Field::Counter, &bytes[counter_at..])?;

        let time = i64::try_from(time).map_err(|_| FormatError::TimeOutOfRange { value: time })?;
        // Shard and counter fields are at most 10 digits, well inside i64
        self.validate(time, shard as i64, counter as i64)?;

        let absolute = time
            .checked_add(config.epoch())
            .ok_or(FormatError::TimeOutOfRange { value: time as u64 })?;

        Ok(ParsedId {
            time: absolute,
            shard,
            counter,
            source: id.to_string(),
        })
    }
}

fn decode_field(field: Field, digits: &[u8]) -> Result<u64, FormatError> {
    decode_bytes(digits).map_err(|source| FormatError::Field { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base58::DecodeError;
    use crate::config::EdidConfig;
    use crate::error::ValidationError;
    use crate::GenerateOptions;
    use chrono::Datelike;

    fn edid() -> Edid {
        Edid::new(EdidConfig::default())
    }

    #[test]
    fn test_parse_known_id() {
        let parsed = edid().parse("1eJZkzQo1181B");
        assert_eq!(
            parsed,
            ParsedId {
                time: 1_420_070_400_000,
                shard: 7,
                counter: 10,
                source: "1eJZkzQo1181B".to_string(),
            }
        );
        assert_eq!(parsed.datetime().unwrap().year(), 2015);
    }

    #[test]
    fn test_parse_adds_epoch() {
        let epoch = 1_420_070_400_000;
        let config = EdidConfig::builder().epoch(epoch).build().unwrap();
        let parsed = Edid::new(config).parse("111111111181B");
        assert_eq!(parsed.time, epoch);
        assert_eq!(parsed.shard, 7);
        assert_eq!(parsed.counter, 10);
    }

    #[test]
    fn test_too_short() {
        let err = edid().try_parse("1eJZkzQo1181").unwrap_err();
        assert_eq!(
            err,
            EdidError::Format(FormatError::TooShort {
                id: "1eJZkzQo1181".to_string(),
                min: 13,
            })
        );
    }

    #[test]
    #[should_panic(expected = "Short id")]
    fn test_parse_panics_on_short_id() {
        edid().parse("1eJZ");
    }

    #[test]
    #[should_panic(expected = "Invalid shard")]
    fn test_parse_panics_on_invalid_shard() {
        // shard 4000 is one past the default shard count
        let id = format!("1eJZkzQo{}1B", crate::base58::encode_padded(4000, 3));
        edid().parse(&id);
    }

    #[test]
    fn test_invalid_character() {
        let err = edid().try_parse("1eJZkzQo1081B").unwrap_err();
        assert_eq!(
            err,
            EdidError::Format(FormatError::Field {
                field: Field::Shard,
                source: DecodeError::InvalidCharacter('0'),
            })
        );
    }

    #[test]
    fn test_invalid_counter_value() {
        // "zz" = 3363, above the default max counter of 999
        let err = edid().try_parse("1eJZkzQo118zz").unwrap_err();
        assert_eq!(
            err,
            EdidError::Validation(ValidationError::Counter {
                value: 3363,
                max: 999
            })
        );
    }

    #[test]
    fn test_time_takes_leftover_width() {
        let edid = edid();
        // 9 time digits instead of 8
        let parsed = edid.parse("21eJZkzQo1181B");
        assert_eq!(parsed.time, 58i64.pow(8) + 1_420_070_400_000);
        assert_eq!(parsed.shard, 7);
        assert_eq!(parsed.counter, 10);
    }

    #[test]
    fn test_time_field_overflow() {
        let err = edid().try_parse("zzzzzzzzzzzzzz1181B").unwrap_err();
        assert_eq!(
            err,
            EdidError::Format(FormatError::Field {
                field: Field::Time,
                source: DecodeError::Overflow,
            })
        );
    }

    #[test]
    fn test_mismatched_widths_read_other_values() {
        let narrow = Edid::new(
            EdidConfig::builder()
                .counter_len(3)
                .max_counter(9999)
                .build()
                .unwrap(),
        );
        let id = narrow
            .generate(GenerateOptions::new().time(1_420_070_400_000).shard(7).counter(10))
            .unwrap();
        assert_eq!(id.len(), 14);

        // the default layout still parses it, but as different fields
        let parsed = edid().try_parse(&id).unwrap();
        assert_ne!(
            (parsed.time, parsed.shard, parsed.counter),
            (1_420_070_400_000, 7, 10)
        );
    }
}
