//! Fieldbind - normalize stored table payload files.
//!
//! # Usage
//!
//! ```bash
//! fieldbind payload.json            # print the canonical payload, pretty
//! fieldbind payload.json --compact  # print the wire form
//! fieldbind payload.json --write    # rewrite the file in place
//! ```
//!
//! Content that fails to parse is not an error: it normalizes to the
//! default payload, exactly as the table binder treats an empty field.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use fieldbind::payload::{load_payload_file, render, write_payload_file};

#[derive(Parser, Debug)]
#[command(name = "fieldbind", version, about = "Normalize stored table payload files")]
struct Cli {
    /// Payload file to normalize
    file: PathBuf,

    /// Print the compact wire form instead of pretty JSON
    #[arg(long)]
    compact: bool,

    /// Rewrite the file in place instead of printing
    #[arg(long)]
    write: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if !cli.file.exists() {
        anyhow::bail!("File not found: {}", cli.file.display());
    }

    let payload = load_payload_file(&cli.file)
        .with_context(|| format!("Failed to load {}", cli.file.display()))?;

    if cli.write {
        write_payload_file(&cli.file, &payload, !cli.compact)
            .with_context(|| format!("Failed to rewrite {}", cli.file.display()))?;
    } else {
        println!("{}", render(&payload, !cli.compact).context("Failed to render payload")?);
    }

    Ok(())
}
