use alloc::{string::String, vec::Vec};
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::{
    codec,
    constants::{PUBLIC_KEY_OFFSET, SECRET_KEY_LEN},
    error::KeyError,
    parse::{self, KeyFormat},
};

/// Validated secret key material. The bytes are wiped when the key is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: Vec<u8>,
}

impl SecretKey {
    /// Wraps `bytes`, checking the length when `expected_len` is given.
    pub fn new(bytes: Vec<u8>, expected_len: Option<usize>) -> Result<Self, KeyError> {
        let key = SecretKey { bytes };
        if let Some(expected) = expected_len {
            if key.bytes.len() != expected {
                return Err(KeyError::LengthMismatch {
                    expected,
                    actual: key.bytes.len(),
                });
            }
        }
        Ok(key)
    }

    /// Builds a key from raw integer values, each of which must be in `0..=255`.
    pub fn from_values(values: &[i64], expected_len: Option<usize>) -> Result<Self, KeyError> {
        Self::new(codec::to_bytes(values)?, expected_len)
    }

    pub fn parse(
        text: &str,
        format: KeyFormat,
        expected_len: Option<usize>,
    ) -> Result<Self, KeyError> {
        let bytes = parse::parse_bytes(text, format)?;
        Self::new(bytes.to_vec(), expected_len)
    }

    pub fn from_base58(text: &str, expected_len: Option<usize>) -> Result<Self, KeyError> {
        Self::parse(text, KeyFormat::Base58, expected_len)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_base58(&self) -> Zeroizing<String> {
        Zeroizing::new(codec::encode(&self.bytes))
    }

    /// The key as a JSON array of integers, the layout used by keypair files.
    pub fn to_json(&self) -> Result<Zeroizing<String>, serde_json::Error> {
        serde_json::to_string(&self.bytes).map(Zeroizing::new)
    }

    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&self.bytes))
    }

    /// For a 64-byte seed + public key keypair, returns the public key.
    pub fn public_half(&self) -> Option<&[u8]> {
        if self.bytes.len() == SECRET_KEY_LEN {
            Some(&self.bytes[PUBLIC_KEY_OFFSET..])
        } else {
            None
        }
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
