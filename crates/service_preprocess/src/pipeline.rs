//! Batch driver: walk assets, parse files, derive, aggregate, write.
//!
//! Failure handling is layered:
//! - invalid configuration, an unreadable input root, or an output root that
//!   cannot be created abort the run
//! - an unreadable asset directory skips that asset
//! - a rejected quote file skips that file; its siblings are still processed
//! - a row whose rate cannot be implied keeps a missing `RISK_FREE_RATE`
//!
//! Assets are processed one at a time; at most one asset table is in memory.

use std::fs;
use std::path::PathBuf;

use adapter_optionsdx::{parse_quote_file, AssetDirectory, AssetWalker, LoaderError};
use tracing::{debug, info, warn};

use crate::aggregator::AssetTable;
use crate::config::PreprocessConfig;
use crate::derive::{derive_fields, RateTally};
use crate::error::{PreprocessError, Result};
use crate::projector::OutputRow;

/// Outcome for one asset directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetSummary {
    /// Asset identifier (directory name)
    pub asset: String,
    /// Files parsed and merged into the table
    pub files_processed: usize,
    /// Files rejected
    pub files_skipped: usize,
    /// One `Skipping <file>: <reason>` line per rejected file, as logged
    pub diagnostics: Vec<String>,
    /// Rows written to the output table
    pub rows_written: usize,
    /// Output table path, `None` when nothing was written
    pub output: Option<PathBuf>,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// One entry per asset directory that could be listed, in walk order
    pub assets: Vec<AssetSummary>,
    /// Asset directories that could not be listed
    pub unreadable_assets: Vec<PathBuf>,
}

impl PipelineReport {
    /// Summary for a named asset.
    pub fn asset(&self, name: &str) -> Option<&AssetSummary> {
        self.assets.iter().find(|a| a.asset == name)
    }

    /// Number of output tables written.
    pub fn tables_written(&self) -> usize {
        self.assets.iter().filter(|a| a.output.is_some()).count()
    }
}

/// Preprocessing pipeline
pub struct Pipeline {
    config: PreprocessConfig,
}

impl Pipeline {
    /// Create a pipeline for the given configuration
    pub fn new(config: PreprocessConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &PreprocessConfig {
        &self.config
    }

    /// Processes every asset under the input root.
    ///
    /// # Errors
    /// Returns an error only for run-level failures: invalid configuration,
    /// an unreadable input root, an output root that cannot be created, or
    /// an asset table that cannot be written.
    pub fn run(&self) -> Result<PipelineReport> {
        self.config.validate()?;

        let output_root = &self.config.output_root;
        fs::create_dir_all(output_root).map_err(|source| PreprocessError::OutputDir {
            path: output_root.clone(),
            source,
        })?;

        let walker = AssetWalker::open(&self.config.input_root, self.config.file_suffix.as_str())?;
        debug!(
            root = %self.config.input_root.display(),
            assets = walker.len(),
            "Walking input root"
        );

        let report = self.process_assets(walker)?;
        info!("Processing complete.");
        Ok(report)
    }

    /// Processes walked assets in order into an existing output root.
    ///
    /// An `AssetUnreadable` item is logged and recorded in
    /// [`PipelineReport::unreadable_assets`]; the remaining assets are still
    /// processed. Any other loader error aborts.
    pub fn process_assets<I>(&self, assets: I) -> Result<PipelineReport>
    where
        I: IntoIterator<Item = std::result::Result<AssetDirectory, LoaderError>>,
    {
        let mut report = PipelineReport::default();
        for entry in assets {
            match entry {
                Ok(asset) => report.assets.push(self.process_asset(&asset)?),
                Err(LoaderError::AssetUnreadable { path, source }) => {
                    warn!("Skipping asset {}: {}", path.display(), source);
                    report.unreadable_assets.push(path);
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(report)
    }

    /// Parses, derives and writes the table for one asset.
    ///
    /// An asset whose files were all rejected (or that has none) produces no
    /// output file.
    pub fn process_asset(&self, asset: &AssetDirectory) -> Result<AssetSummary> {
        let mut summary = AssetSummary {
            asset: asset.name.clone(),
            ..AssetSummary::default()
        };
        let mut table = AssetTable::new(&asset.name);
        let mut tally = RateTally::default();

        for file in &asset.files {
            match parse_quote_file(file) {
                Ok(rows) => {
                    summary.files_processed += 1;
                    table.extend(rows.iter().map(|row| {
                        let derived = derive_fields(row);
                        tally.record(&derived);
                        OutputRow::project(row, &derived)
                    }));
                }
                Err(err) => {
                    let diagnostic = format!("Skipping {}: {}", display_name(file), err);
                    warn!("{}", diagnostic);
                    summary.files_skipped += 1;
                    summary.diagnostics.push(diagnostic);
                }
            }
        }

        debug!(
            asset = %asset.name,
            rows = table.len(),
            rates_defined = tally.defined,
            rates_missing = tally.missing_total(),
            reasons = ?tally.missing,
            "Derived asset fields"
        );

        if table.is_empty() {
            debug!(asset = %asset.name, "No rows, nothing written");
            return Ok(summary);
        }

        table.sort_chronologically();
        let path = self.config.output_path(table.asset());
        table.write_csv(&path)?;
        info!("Saved: {}", path.display());

        summary.rows_written = table.len();
        summary.output = Some(path);
        Ok(summary)
    }
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
