//! Per-asset accumulation, chronological ordering and persistence.

use std::cmp::Ordering;
use std::path::Path;

use crate::error::{PreprocessError, Result};
use crate::projector::OutputRow;

/// All output rows collected for one asset.
#[derive(Debug, Clone, Default)]
pub struct AssetTable {
    asset: String,
    rows: Vec<OutputRow>,
}

impl AssetTable {
    /// Create an empty table for an asset
    pub fn new(asset: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            rows: Vec::new(),
        }
    }

    /// Asset identifier
    pub fn asset(&self) -> &str {
        &self.asset
    }

    /// Appends rows in the order given.
    pub fn extend<I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = OutputRow>,
    {
        self.rows.extend(rows);
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in their current order
    pub fn rows(&self) -> &[OutputRow] {
        &self.rows
    }

    /// Sorts rows by `QUOTE_UNIXTIME` ascending.
    ///
    /// The sort is stable: rows with equal timestamps keep their insertion
    /// order. Rows without a numeric timestamp go last.
    pub fn sort_chronologically(&mut self) {
        self.rows.sort_by(|a, b| compare_timestamps(a.sort_key, b.sort_key));
    }

    /// Writes the table as CSV with a header row and no index column.
    ///
    /// An existing file at `path` is overwritten.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let write_err = |source: csv::Error| PreprocessError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = csv::Writer::from_path(path).map_err(write_err)?;
        for row in &self.rows {
            writer.serialize(row).map_err(write_err)?;
        }
        writer.flush().map_err(|e| write_err(e.into()))?;
        Ok(())
    }
}

/// Orders present timestamps ascending, missing ones last.
fn compare_timestamps(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
