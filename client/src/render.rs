use common::SecretKey;
use zeroize::Zeroizing;

use crate::config::OutputFormat;

/// `"<label>: <value>"`, or just the value when `raw` is set.
pub fn encode_line(label: &str, value: &str, raw: bool) -> Zeroizing<String> {
    if raw {
        Zeroizing::new(value.to_string())
    } else {
        Zeroizing::new(format!("{label}: {value}"))
    }
}

pub fn decoded(key: &SecretKey, output: OutputFormat) -> serde_json::Result<Zeroizing<String>> {
    match output {
        OutputFormat::Json => key.to_json(),
        OutputFormat::Hex => Ok(key.to_hex()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_line() {
        assert_eq!(
            encode_line("Base58 비밀키", "5Q", false).as_str(),
            "Base58 비밀키: 5Q"
        );
        assert_eq!(encode_line("Base58 비밀키", "5Q", true).as_str(), "5Q");
        assert_eq!(encode_line("Secret", "", false).as_str(), "Secret: ");
    }

    #[test]
    fn test_decoded() {
        let key = SecretKey::new(vec![0, 16, 255], None).unwrap();
        assert_eq!(
            decoded(&key, OutputFormat::Json).unwrap().as_str(),
            "[0,16,255]"
        );
        assert_eq!(decoded(&key, OutputFormat::Hex).unwrap().as_str(), "0010ff");
    }
}
