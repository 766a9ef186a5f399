//! Preprocessor configuration.
//!
//! The preprocessor runs against fixed directory names; this module gathers
//! them in one place so the pipeline can also be pointed at other roots
//! (tests, ad-hoc runs from library code). Nothing is read from files or the
//! environment.

use std::path::PathBuf;

use thiserror::Error;

/// Input root holding one directory per asset.
pub const DEFAULT_INPUT_ROOT: &str = "OptionsDX_Raw_Data";

/// Output root receiving one table per asset.
pub const DEFAULT_OUTPUT_ROOT: &str = "Data";

/// Suffix of raw quote files inside an asset directory.
pub const QUOTE_FILE_SUFFIX: &str = ".txt";

/// Suffix appended to the asset name for its output table.
pub const OUTPUT_FILE_SUFFIX: &str = "_data.csv";

/// Preprocessor configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessConfig {
    /// Root directory of raw asset folders
    pub input_root: PathBuf,

    /// Directory receiving `<asset>_data.csv` tables
    pub output_root: PathBuf,

    /// Quote file suffix filter
    pub file_suffix: String,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from(DEFAULT_INPUT_ROOT),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            file_suffix: QUOTE_FILE_SUFFIX.to_string(),
        }
    }
}

impl PreprocessConfig {
    /// Configuration with custom roots and the standard file suffix.
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            ..Self::default()
        }
    }

    /// Output table path for an asset.
    ///
    /// # Examples
    /// ```
    /// use service_preprocess::config::PreprocessConfig;
    /// use std::path::Path;
    ///
    /// let config = PreprocessConfig::default();
    /// assert_eq!(config.output_path("nvda"), Path::new("Data/nvda_data.csv"));
    /// ```
    pub fn output_path(&self, asset: &str) -> PathBuf {
        self.output_root.join(format!("{}{}", asset, OUTPUT_FILE_SUFFIX))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.input_root.as_os_str().is_empty() {
            errors.push("input_root cannot be empty".to_string());
        }

        if self.output_root.as_os_str().is_empty() {
            errors.push("output_root cannot be empty".to_string());
        }

        if self.file_suffix.is_empty() {
            errors.push("file_suffix cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more settings are invalid
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
