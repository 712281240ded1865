/*
Encodes secret key material as Base58 for display, and decodes it back.

Usage:
  b58key encode [KEY] [--file PATH] [--format auto|json|hex] [--length N | --any-length]
                [--label TEXT] [--raw] [--public]
  b58key decode [TEXT] [--file PATH] [--length N | --any-length] [--output json|hex]

When neither KEY/TEXT nor --file is given, the input is read from stdin.
*/

use anyhow::Result;
use b58key_client::config::{self, DecodeConfig, EncodeConfig, InputFormat, OutputFormat};
use b58key_client::input::InputSource;
use b58key_client::{run_decode, run_encode};
use clap::{Args, Parser, Subcommand};
use common::constants::{DEFAULT_PUBLIC_LABEL, DEFAULT_SECRET_LABEL, SECRET_KEY_LEN};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "b58key", version, about = "Base58 encoding of secret key material")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct LengthArgs {
    /// Number of bytes the key must have
    #[arg(long, value_name = "N", default_value_t = SECRET_KEY_LEN)]
    length: usize,

    /// Accept keys of any length
    #[arg(long, conflicts_with = "length")]
    any_length: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode key bytes (JSON array or hex) as Base58
    Encode {
        /// Key material; prefer --file or stdin, arguments can leak through the process list
        #[arg(conflicts_with = "file")]
        key: Option<String>,

        /// Read the key from a file
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// How to read the key material
        #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
        format: InputFormat,

        #[command(flatten)]
        length: LengthArgs,

        /// Label printed before the encoded key
        #[arg(long, default_value = DEFAULT_SECRET_LABEL)]
        label: String,

        /// Label printed before the encoded public key
        #[arg(long, default_value = DEFAULT_PUBLIC_LABEL)]
        public_label: String,

        /// Print only the encoded value
        #[arg(long)]
        raw: bool,

        /// Also print the public half of a 64-byte keypair
        #[arg(long)]
        public: bool,
    },
    /// Decode a Base58 key back into bytes
    Decode {
        #[arg(conflicts_with = "file")]
        text: Option<String>,

        /// Read the Base58 text from a file
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,

        #[command(flatten)]
        length: LengthArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        output: OutputFormat,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Encode {
            key,
            file,
            format,
            length,
            label,
            public_label,
            raw,
            public,
        } => {
            let config = EncodeConfig {
                source: InputSource::from_args(key, file),
                format: format.into(),
                expected_len: config::expected_len(length.length, length.any_length),
                label,
                public_label,
                raw,
                public,
            };
            run_encode(&config, &mut stdout)?;
        }
        Commands::Decode {
            text,
            file,
            length,
            output,
        } => {
            let config = DecodeConfig {
                source: InputSource::from_args(text, file),
                expected_len: config::expected_len(length.length, length.any_length),
                output,
            };
            run_decode(&config, &mut stdout)?;
        }
    }
    Ok(())
}
