/// Base58 encoding and decoding for EDID fields
///
/// This module maps non-negative integers to digit strings over the Bitcoin
/// Base58 alphabet and back, using a lookup table for decoding.
use once_cell::sync::Lazy;

/// Character set for base58 encoding (Bitcoin alphabet, no `0`, `O`, `I`, `l`)
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Number of symbols in the alphabet
pub const BASE: u64 = 58;

/// The zero digit, used for left-padding
pub const ZERO: u8 = ALPHABET[0];

/// Maximum length of a base58 encoded u64 (11 characters)
pub const MAX_LEN: usize = 11;

/// Lookup table for decoding base58 characters to their values
static DECODE_MAP: Lazy<[i8; 256]> = Lazy::new(|| {
    let mut map = [-1i8; 256];
    for (i, &c) in ALPHABET.iter().enumerate() {
        map[c as usize] = i as i8;
    }
    map
});

/// Encode a value to its shortest base58 string
///
/// Zero encodes as a single zero digit.
pub fn encode(value: u64) -> String {
    encode_padded(value, 1)
}

/// Encode a value, left-padding with the zero digit up to `width` characters
///
/// Values that need more than `width` digits are emitted in full, never truncated.
pub fn encode_padded(mut value: u64, width: usize) -> String {
    let mut buffer = [0u8; MAX_LEN];
    let mut position = MAX_LEN;

    loop {
        position -= 1;
        buffer[position] = ALPHABET[(value % BASE) as usize];
        value /= BASE;
        if value == 0 {
            break;
        }
    }

    let digits = &buffer[position..];
    let mut out = String::with_capacity(width.max(digits.len()));
    for _ in digits.len()..width {
        out.push(ZERO as char);
    }
    // Alphabet bytes are ASCII
    out.extend(digits.iter().map(|&b| b as char));
    out
}

/// Decode a base58 string to a u64
pub fn decode(encoded: &str) -> Result<u64, DecodeError> {
    decode_bytes(encoded.as_bytes())
}

pub(crate) fn decode_bytes(encoded: &[u8]) -> Result<u64, DecodeError> {
    if encoded.is_empty() {
        return Err(DecodeError::EmptyString);
    }

    let mut result: u64 = 0;
    for &c in encoded {
        let value = DECODE_MAP[c as usize];
        if value == -1 {
            return Err(DecodeError::InvalidCharacter(c as char));
        }

        result = result
            .checked_mul(BASE)
            .and_then(|r| r.checked_add(value as u64))
            .ok_or(DecodeError::Overflow)?;
    }

    Ok(result)
}

/// `58^len`, or `None` when it does not fit a u64
pub(crate) const fn capacity(len: u32) -> Option<u64> {
    BASE.checked_pow(len)
}

/// Errors that can occur during base58 decoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input string is empty
    #[error("Cannot decode an empty string")]
    EmptyString,

    /// The input string contains a character outside the alphabet
    #[error("Invalid base58 character: {0:?}")]
    InvalidCharacter(char),

    /// The decoded value would overflow a u64
    #[error("Decoded value would overflow u64")]
    Overflow,
}
