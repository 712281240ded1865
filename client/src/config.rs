use clap::ValueEnum;
use common::{
    constants::{DEFAULT_PUBLIC_LABEL, DEFAULT_SECRET_LABEL, SECRET_KEY_LEN},
    KeyFormat,
};

use crate::input::InputSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Auto,
    Json,
    Hex,
}

impl From<InputFormat> for KeyFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Auto => KeyFormat::Auto,
            InputFormat::Json => KeyFormat::Json,
            InputFormat::Hex => KeyFormat::Hex,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Hex,
}

/// Settings for the `encode` command.
#[derive(Debug, Clone)]
pub struct EncodeConfig {
    pub source: InputSource,
    pub format: KeyFormat,
    /// `None` accepts any length.
    pub expected_len: Option<usize>,
    pub label: String,
    pub public_label: String,
    /// Print the bare value without a label.
    pub raw: bool,
    /// Also print the public half of a 64-byte keypair.
    pub public: bool,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            source: InputSource::Stdin,
            format: KeyFormat::Auto,
            expected_len: Some(SECRET_KEY_LEN),
            label: DEFAULT_SECRET_LABEL.to_string(),
            public_label: DEFAULT_PUBLIC_LABEL.to_string(),
            raw: false,
            public: false,
        }
    }
}

/// Settings for the `decode` command.
#[derive(Debug, Clone)]
pub struct DecodeConfig {
    pub source: InputSource,
    pub expected_len: Option<usize>,
    pub output: OutputFormat,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            source: InputSource::Stdin,
            expected_len: Some(SECRET_KEY_LEN),
            output: OutputFormat::Json,
        }
    }
}

/// Maps the `--length`/`--any-length` pair to an optional length constraint.
pub fn expected_len(length: usize, any_length: bool) -> Option<usize> {
    if any_length {
        None
    } else {
        Some(length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EncodeConfig::default();
        assert_eq!(config.expected_len, Some(64));
        assert_eq!(config.label, "Base58 비밀키");
        assert_eq!(config.format, KeyFormat::Auto);
        assert!(!config.raw);

        assert_eq!(DecodeConfig::default().output, OutputFormat::Json);
    }

    #[test]
    fn test_expected_len() {
        assert_eq!(expected_len(64, false), Some(64));
        assert_eq!(expected_len(32, false), Some(32));
        assert_eq!(expected_len(64, true), None);
    }
}
