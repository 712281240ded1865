use anyhow::{Context, Result};
use common::KeyError;
use std::io::Read;
use std::path::PathBuf;
use zeroize::Zeroizing;

/// Where key material is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    /// Passed directly on the command line.
    Inline(String),
}

impl InputSource {
    /// An inline value wins over a file; with neither, stdin is used.
    pub fn from_args(inline: Option<String>, file: Option<PathBuf>) -> Self {
        match (inline, file) {
            (Some(text), _) => InputSource::Inline(text),
            (None, Some(path)) => InputSource::File(path),
            (None, None) => InputSource::Stdin,
        }
    }

    /// Reads the whole input. The returned buffer is wiped on drop.
    pub fn read(&self) -> Result<Zeroizing<String>> {
        let text = match self {
            InputSource::Stdin => {
                read_all(std::io::stdin().lock()).context("Failed to read stdin")?
            }
            InputSource::File(path) => {
                let file = std::fs::File::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                read_all(file).with_context(|| format!("Failed to read {}", path.display()))?
            }
            InputSource::Inline(text) => {
                log::warn!("key material given as an argument may be visible to other processes");
                Zeroizing::new(text.clone())
            }
        };

        if text.trim().is_empty() {
            return Err(KeyError::Empty.into());
        }
        log::debug!("read {} bytes of input from {}", text.len(), self.describe());
        Ok(text)
    }

    fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
            InputSource::Inline(_) => "argument".to_string(),
        }
    }
}

pub fn read_all<R: Read>(mut reader: R) -> std::io::Result<Zeroizing<String>> {
    let mut text = Zeroizing::new(String::new());
    reader.read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args_precedence() {
        assert_eq!(
            InputSource::from_args(Some("00".into()), Some("k.json".into())),
            InputSource::Inline("00".into())
        );
        assert_eq!(
            InputSource::from_args(None, Some("k.json".into())),
            InputSource::File("k.json".into())
        );
        assert_eq!(InputSource::from_args(None, None), InputSource::Stdin);
    }

    #[test]
    fn test_read_inline() {
        let text = InputSource::Inline("[1, 2]".into()).read().unwrap();
        assert_eq!(text.as_str(), "[1, 2]");
    }

    #[test]
    fn test_read_all() {
        let text = read_all(&b"00ff\n"[..]).unwrap();
        assert_eq!(text.as_str(), "00ff\n");
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = InputSource::Inline("  \n".into()).read().unwrap_err();
        assert_eq!(err.downcast_ref::<KeyError>(), Some(&KeyError::Empty));
    }

    #[test]
    fn test_missing_file() {
        let err = InputSource::File("/nonexistent/b58key/key.json".into())
            .read()
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to open"));
    }
}
