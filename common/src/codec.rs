//! Base58 encoding and decoding with the Bitcoin alphabet.
//!
//! Each leading zero byte is written as a leading `'1'`; the remaining bytes are read as a
//! big-endian integer and written in base 58, most significant digit first. An empty input
//! encodes to the empty string.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use crate::{constants::ALPHABET, error::KeyError};

/// Encodes `bytes` as Base58.
pub fn encode(bytes: &[u8]) -> String {
    bs58::encode(bytes)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_string()
}

/// Decodes a Base58 string back into bytes, restoring leading zero bytes.
pub fn decode(text: &str) -> Result<Vec<u8>, KeyError> {
    bs58::decode(text)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| {
            let index = match &e {
                bs58::decode::Error::InvalidCharacter { index, .. } => Some(*index),
                bs58::decode::Error::NonAsciiCharacter { index } => Some(*index),
                _ => None,
            };
            KeyError::InvalidBase58 {
                index,
                message: e.to_string(),
            }
        })
}

/// Checks that every value is a byte, then encodes them.
///
/// The first value outside `0..=255` is reported with its index; nothing is encoded in
/// that case.
pub fn encode_values(values: &[i64]) -> Result<String, KeyError> {
    let bytes = to_bytes(values)?;
    Ok(encode(&bytes))
}

pub(crate) fn to_bytes(values: &[i64]) -> Result<Vec<u8>, KeyError> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            u8::try_from(value).map_err(|_| KeyError::ByteOutOfRange {
                index,
                value: value.to_string(),
            })
        })
        .collect()
}

/// Returns true if `c` belongs to the Base58 alphabet.
pub fn is_base58_char(c: char) -> bool {
    ALPHABET.contains(c)
}
