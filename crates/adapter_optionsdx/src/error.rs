//! Error types for raw chain discovery and parsing.
//!
//! This module provides:
//! - `LoaderError`: Failures while enumerating the input directory tree
//! - `ParseError`: File-level failures that reject a single quote file

use std::path::PathBuf;
use thiserror::Error;

/// Directory enumeration errors.
///
/// # Variants
/// - `RootUnreadable`: The input root cannot be listed (fatal for a run)
/// - `AssetUnreadable`: One asset directory cannot be listed (skip that asset)
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The input root could not be read.
    #[error("Cannot read input root {}: {source}", path.display())]
    RootUnreadable {
        /// Input root path
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// An asset subdirectory could not be read.
    #[error("Cannot read asset directory {}: {source}", path.display())]
    AssetUnreadable {
        /// Asset directory path
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },
}

/// Quote file rejection reasons.
///
/// Every variant rejects the whole file; none of them is fatal for the run.
///
/// # Examples
/// ```
/// use adapter_optionsdx::ParseError;
///
/// let err = ParseError::ColumnMismatch { found: 30, expected: 33 };
/// assert_eq!(err.to_string(), "column mismatch (30 found, 33 expected)");
/// ```
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file's field count differs from the raw schema.
    #[error("column mismatch ({found} found, {expected} expected)")]
    ColumnMismatch {
        /// Observed field count
        found: usize,
        /// Schema field count
        expected: usize,
    },

    /// The file could not be opened or read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file content is not valid delimited text.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ParseError {
    /// Whether this rejection came from the schema check rather than IO.
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, ParseError::ColumnMismatch { .. })
    }
}
