//! Error types for the preprocessing service.
//!
//! Only process-level failures surface here. Per-file rejections and
//! per-row gaps are absorbed by the pipeline and never reach the caller.

use std::path::PathBuf;

use adapter_optionsdx::LoaderError;
use thiserror::Error;

use crate::config::ConfigError;

/// Preprocessing error type
#[derive(Debug, Error)]
pub enum PreprocessError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input tree could not be enumerated
    #[error("Input error: {0}")]
    Loader(#[from] LoaderError),

    /// Output root could not be created
    #[error("Cannot create output directory {}: {source}", path.display())]
    OutputDir {
        /// Output root path
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// An asset table could not be written
    #[error("Cannot write asset table {}: {source}", path.display())]
    Write {
        /// Output file path
        path: PathBuf,
        /// Underlying CSV/IO failure
        #[source]
        source: csv::Error,
    },

    /// An asset table could not be read back
    #[error("Cannot read asset table {}: {source}", path.display())]
    Read {
        /// Table file path
        path: PathBuf,
        /// Underlying CSV/IO failure
        #[source]
        source: csv::Error,
    },
}

/// Result type for preprocessing operations
pub type Result<T> = std::result::Result<T, PreprocessError>;
