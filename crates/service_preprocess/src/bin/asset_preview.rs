//! Prints the leading entries of a preprocessed asset table.

use anyhow::Context;
use clap::Parser;
use service_preprocess::{format_entry, load_asset_table};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Preview an asset table written by optionsdx-preprocess
#[derive(Parser)]
#[command(name = "asset-preview")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Asset table to read
    #[arg(short, long, default_value = "Data/nvda_data.csv")]
    file: String,

    /// Number of entries to print
    #[arg(short = 'n', long, default_value = "5")]
    limit: usize,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    let args = Args::parse();

    let entries = load_asset_table(&args.file)
        .with_context(|| format!("Failed to load asset table {}", args.file))?;
    tracing::debug!(file = %args.file, entries = entries.len(), "Loaded asset table");

    for (index, entry) in entries.iter().take(args.limit).enumerate() {
        println!("{}", format_entry(index, entry));
    }

    Ok(())
}
