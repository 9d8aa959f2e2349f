use anyhow::Context;
use binuuid_codec::{decode, encode, hex, TextFormat, KEY_LEN};
use clap::{Parser, Subcommand};
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "binuuid")]
#[command(about = "Convert UUID text to and from the index-optimized 16-byte key")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert UUID text to the optimized binary key
    Encode {
        /// UUID text (36 characters, or 32 with --no-dashes)
        uuid: String,
        /// Accept the 32-character undashed form
        #[arg(long)]
        no_dashes: bool,
        /// Write the raw 16 bytes to stdout instead of hex
        #[arg(long)]
        raw: bool,
    },
    /// Convert an optimized binary key back to UUID text
    Decode {
        /// Key as 32 hex characters (as printed by `encode`)
        key: String,
        /// Emit the 32-character undashed form
        #[arg(long)]
        no_dashes: bool,
    },
}

fn text_format(no_dashes: bool) -> TextFormat {
    if no_dashes {
        TextFormat::Simple
    } else {
        TextFormat::Hyphenated
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("binuuid=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            uuid,
            no_dashes,
            raw,
        } => {
            let key = encode(&uuid, text_format(no_dashes))
                .with_context(|| format!("failed to encode '{}'", uuid))?;
            tracing::debug!("encoded {} to 16-byte key", uuid);
            if raw {
                std::io::stdout().write_all(&key)?;
            } else {
                println!("{}", key_to_hex(&key));
            }
        }
        Commands::Decode { key, no_dashes } => {
            let bytes = parse_key_hex(&key)?;
            let text = decode(&bytes, text_format(no_dashes))
                .with_context(|| format!("failed to decode '{}'", key))?;
            tracing::debug!("decoded key to {}", text);
            println!("{}", text);
        }
    }

    Ok(())
}

/// Renders key bytes as lowercase hex for terminal-safe output.
fn key_to_hex(key: &[u8; KEY_LEN]) -> String {
    let mut out = String::with_capacity(2 * KEY_LEN);
    for &byte in key {
        let [hi, lo] = hex::byte_to_hex_pair(byte);
        out.push(hi as char);
        out.push(lo as char);
    }
    out
}

/// Parses the 32-hex-character key form printed by `encode`.
fn parse_key_hex(input: &str) -> anyhow::Result<[u8; KEY_LEN]> {
    let digits = input.as_bytes();
    anyhow::ensure!(
        digits.len() == 2 * KEY_LEN,
        "key must be {} hex characters, got {}",
        2 * KEY_LEN,
        digits.len()
    );

    let mut key = [0u8; KEY_LEN];
    for (index, byte) in key.iter_mut().enumerate() {
        *byte = hex::hex_pair_to_byte(digits[2 * index], digits[2 * index + 1]).with_context(
            || format!("key contains a non-hex character near position {}", 2 * index),
        )?;
    }
    Ok(key)
}
