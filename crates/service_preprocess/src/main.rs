//! OptionsDX preprocessor
//!
//! Reads every `OptionsDX_Raw_Data/<asset>/*.txt` file relative to the
//! working directory and writes one `Data/<asset>_data.csv` per asset.
//! Takes no arguments. Log verbosity follows `RUST_LOG` and defaults to
//! `info`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialise tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    service_preprocess::run()?;
    Ok(())
}
