use anyhow::{Context, Result};
use common::{codec, KeyFormat, SecretKey};
use std::io::Write;

use crate::config::{DecodeConfig, EncodeConfig};
use crate::render;

/// Reads the key, encodes it and writes the labelled line(s) to `out`.
///
/// Nothing is written unless the whole input is valid.
pub fn run_encode<W: Write>(config: &EncodeConfig, out: &mut W) -> Result<()> {
    let text = config.source.read()?;
    let key = SecretKey::parse(&text, config.format, config.expected_len)
        .context("Failed to parse key material")?;
    log::info!("encoding {} bytes of key material", key.len());

    let mut lines = vec![render::encode_line(
        &config.label,
        &key.to_base58(),
        config.raw,
    )];
    if config.public {
        let public = key.public_half().with_context(|| {
            format!(
                "the public key is only defined for 64-byte keypairs, got {} bytes",
                key.len()
            )
        })?;
        lines.push(render::encode_line(
            &config.public_label,
            &codec::encode(public),
            config.raw,
        ));
    }

    for line in lines {
        writeln!(out, "{}", line.as_str()).context("Failed to write output")?;
    }
    Ok(())
}

/// Reads a Base58 string and writes the decoded bytes to `out`.
pub fn run_decode<W: Write>(config: &DecodeConfig, out: &mut W) -> Result<()> {
    let text = config.source.read()?;
    let key = SecretKey::parse(&text, KeyFormat::Base58, config.expected_len)
        .context("Failed to decode Base58 input")?;
    log::info!("decoded {} bytes of key material", key.len());

    let rendered =
        render::decoded(&key, config.output).context("Failed to render decoded key")?;
    writeln!(out, "{}", rendered.as_str()).context("Failed to write output")?;
    Ok(())
}
