use alloc::string::String;
use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// A raw value at `index` does not fit in a byte. `value` is its decimal text, so
    /// integers wider than any machine type are still reported as written.
    ByteOutOfRange { index: usize, value: String },
    LengthMismatch { expected: usize, actual: usize },
    InvalidFormat(String),
    InvalidBase58 {
        index: Option<usize>,
        message: String,
    },
    /// The input could not be classified as JSON or hex.
    AmbiguousFormat,
    Empty,
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::ByteOutOfRange { index, value } => {
                write!(f, "value {value} at index {index} is not a byte (0-255)")
            }
            KeyError::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} bytes of key material, got {actual}")
            }
            KeyError::InvalidFormat(msg) => write!(f, "malformed key: {msg}"),
            KeyError::InvalidBase58 {
                index: Some(index),
                message,
            } => write!(f, "invalid base58 at position {index}: {message}"),
            KeyError::InvalidBase58 {
                index: None,
                message,
            } => write!(f, "invalid base58: {message}"),
            KeyError::AmbiguousFormat => write!(
                f,
                "cannot tell the input format; expected a JSON array or a hex string"
            ),
            KeyError::Empty => write!(f, "no key material provided"),
        }
    }
}

impl core::error::Error for KeyError {}
