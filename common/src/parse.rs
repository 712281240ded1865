//! Parsers for the textual forms key material is usually stored in.

use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
use serde_json::Number;
use zeroize::Zeroizing;

use crate::{codec, error::KeyError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFormat {
    /// Pick `Json` or `Hex` from the shape of the input.
    Auto,
    /// A JSON array of integers, e.g. `[156, 167, 232, ...]`.
    Json,
    /// A hex string, with or without a `0x` prefix.
    Hex,
    Base58,
}

/// A concrete format, as chosen by [`KeyFormat::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedFormat {
    Json,
    Hex,
    Base58,
}

impl KeyFormat {
    /// Resolves `Auto` against the given input; other formats map one to one.
    pub fn resolve(self, text: &str) -> Result<ResolvedFormat, KeyError> {
        match self {
            KeyFormat::Json => return Ok(ResolvedFormat::Json),
            KeyFormat::Hex => return Ok(ResolvedFormat::Hex),
            KeyFormat::Base58 => return Ok(ResolvedFormat::Base58),
            KeyFormat::Auto => {}
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(KeyError::Empty);
        }
        if text.starts_with('[') {
            return Ok(ResolvedFormat::Json);
        }
        let digits = strip_hex_prefix(text);
        if !digits.is_empty()
            && digits.len() % 2 == 0
            && digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Ok(ResolvedFormat::Hex);
        }
        Err(KeyError::AmbiguousFormat)
    }
}

/// Parses `text` in the given format into raw bytes.
pub fn parse_bytes(text: &str, format: KeyFormat) -> Result<Zeroizing<Vec<u8>>, KeyError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(KeyError::Empty);
    }

    let format = format.resolve(text)?;
    log::debug!("parsing key material as {:?}", format);

    let bytes = match format {
        ResolvedFormat::Json => parse_json_array(text)?,
        ResolvedFormat::Hex => hex::decode(strip_hex_prefix(text))
            .map_err(|e| KeyError::InvalidFormat(e.to_string()))?,
        ResolvedFormat::Base58 => codec::decode(text)?,
    };
    Ok(Zeroizing::new(bytes))
}

/// Parses a JSON integer array, checking every element is a byte.
///
/// The first element that is not a byte is reported with its index, however large it is.
pub fn parse_json_array(text: &str) -> Result<Vec<u8>, KeyError> {
    let numbers: Vec<Number> =
        serde_json::from_str(text).map_err(|e| KeyError::InvalidFormat(e.to_string()))?;
    numbers
        .iter()
        .enumerate()
        .map(|(index, n)| number_to_byte(index, n))
        .collect()
}

fn number_to_byte(index: usize, n: &Number) -> Result<u8, KeyError> {
    let out_of_range = |value: String| KeyError::ByteOutOfRange { index, value };

    if let Some(v) = n.as_u64() {
        return u8::try_from(v).map_err(|_| out_of_range(v.to_string()));
    }
    if let Some(v) = n.as_i64() {
        return Err(out_of_range(v.to_string()));
    }
    // Without arbitrary precision, integers beyond 64 bits arrive as f64. `{}` on an f64
    // never uses exponent notation, so an integral value prints without a '.'.
    let v = n.as_f64().unwrap_or(f64::NAN);
    let decimal = format!("{v}");
    if !decimal.contains('.') && (v < 0.0 || v > 255.0) {
        Err(out_of_range(decimal))
    } else {
        Err(KeyError::InvalidFormat(format!(
            "element {index} is not an integer: {n}"
        )))
    }
}

fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}
