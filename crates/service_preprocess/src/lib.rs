//! # service_preprocess: OptionsDX Chain Preprocessing Service
//!
//! ## Service Layer Role
//!
//! This crate wires the adapter and pricer layers into a batch job that
//! turns `OptionsDX_Raw_Data/<asset>/*.txt` into `Data/<asset>_data.csv`:
//! - Run settings and fixed directory names (`config`)
//! - Pricer inputs from parsed rows (`derive`)
//! - The 22-column output schema (`projector`)
//! - Per-asset accumulation, ordering and CSV output (`aggregator`)
//! - The batch driver (`pipeline`)
//! - Read-back of written tables (`preview`)
//!
//! ## Usage Examples
//!
//! ```no_run
//! use service_preprocess::{Pipeline, PreprocessConfig};
//!
//! let report = Pipeline::new(PreprocessConfig::new("raw", "out")).run()?;
//! for asset in &report.assets {
//!     println!("{}: {} rows", asset.asset, asset.rows_written);
//! }
//! # Ok::<(), service_preprocess::PreprocessError>(())
//! ```

pub mod aggregator;
pub mod config;
pub mod derive;
pub mod error;
pub mod pipeline;
pub mod preview;
pub mod projector;

pub use aggregator::AssetTable;
pub use config::{ConfigError, PreprocessConfig};
pub use error::{PreprocessError, Result};
pub use pipeline::{AssetSummary, Pipeline, PipelineReport};
pub use preview::{format_entry, load_asset_table, OptionSpread};
pub use projector::{OutputRow, OUTPUT_COLUMNS};

/// Runs the pipeline with the default directory layout.
pub fn run() -> Result<PipelineReport> {
    Pipeline::new(PreprocessConfig::default()).run()
}
