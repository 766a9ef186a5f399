//! Read-back of written asset tables.
//!
//! Downstream consumers load `Data/<asset>_data.csv` into fixed-layout
//! records; this module provides that loader and a human-readable rendering
//! used by the `asset-preview` binary.

use std::io::Read;
use std::path::Path;

use chrono::DateTime;
use serde::Deserialize;

use crate::error::{PreprocessError, Result};

/// One row of an asset table, every column read as an optional float.
///
/// Empty or non-numeric fields deserialise to `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct OptionSpread {
    #[serde(deserialize_with = "csv::invalid_option")]
    pub quote_unixtime: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub underlying_last: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub expire_unix: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub dte: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub strike: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub c_delta: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub c_gamma: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub c_vega: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub c_theta: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub c_rho: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub c_iv: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub c_volume: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub c_mid_price: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub p_delta: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub p_gamma: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub p_vega: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub p_theta: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub p_rho: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub p_iv: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub p_volume: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub p_mid_price: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub risk_free_rate: Option<f64>,
}

/// Loads an asset table written by the pipeline.
///
/// # Errors
/// `PreprocessError::Read` if the file cannot be opened or a record does
/// not match the header.
pub fn load_asset_table(path: impl AsRef<Path>) -> Result<Vec<OptionSpread>> {
    let path = path.as_ref();
    let read_err = |source: csv::Error| PreprocessError::Read {
        path: path.to_path_buf(),
        source,
    };

    let reader = csv::Reader::from_path(path).map_err(read_err)?;
    collect_rows(reader).map_err(read_err)
}

/// Loads asset table rows from any reader with a header line.
pub fn load_asset_reader<R: Read>(
    reader: R,
) -> std::result::Result<Vec<OptionSpread>, csv::Error> {
    collect_rows(csv::Reader::from_reader(reader))
}

fn collect_rows<R: Read>(
    mut reader: csv::Reader<R>,
) -> std::result::Result<Vec<OptionSpread>, csv::Error> {
    reader.deserialize().collect()
}

/// Renders one entry as a block of text, one line per leg.
///
/// Missing values print as `NA`. Quote and expiry times are followed by
/// their UTC calendar form when they are valid Unix timestamps.
///
/// # Examples
/// ```
/// use service_preprocess::preview::{format_entry, OptionSpread};
///
/// let entry = OptionSpread {
///     quote_unixtime: Some(1_672_779_600.0),
///     strike: Some(100.0),
///     ..OptionSpread::default()
/// };
/// let text = format_entry(0, &entry);
/// assert!(text.starts_with("Entry 0:\n  Time: 1672779600 (2023-01-03 21:00:00 UTC)"));
/// assert!(text.contains("Strike: 100.00"));
/// assert!(text.contains("Risk-Free Rate: NA"));
/// ```
pub fn format_entry(index: usize, entry: &OptionSpread) -> String {
    format!(
        "Entry {}:\n\
         \x20 Time: {}, Underlying: {}, Expire Time: {}, DTE: {}, Strike: {}\n\
         \x20 Call - Delta: {}, Gamma: {}, Vega: {}, Theta: {}, Rho: {}, IV: {}, Volume: {}, Mid: {}\n\
         \x20 Put  - Delta: {}, Gamma: {}, Vega: {}, Theta: {}, Rho: {}, IV: {}, Volume: {}, Mid: {}\n\
         \x20 Risk-Free Rate: {}",
        index,
        timestamp(entry.quote_unixtime),
        fixed(entry.underlying_last, 2),
        timestamp(entry.expire_unix),
        fixed(entry.dte, 2),
        fixed(entry.strike, 2),
        fixed(entry.c_delta, 6),
        fixed(entry.c_gamma, 6),
        fixed(entry.c_vega, 6),
        fixed(entry.c_theta, 6),
        fixed(entry.c_rho, 6),
        fixed(entry.c_iv, 6),
        fixed(entry.c_volume, 2),
        fixed(entry.c_mid_price, 6),
        fixed(entry.p_delta, 6),
        fixed(entry.p_gamma, 6),
        fixed(entry.p_vega, 6),
        fixed(entry.p_theta, 6),
        fixed(entry.p_rho, 6),
        fixed(entry.p_iv, 6),
        fixed(entry.p_volume, 2),
        fixed(entry.p_mid_price, 6),
        fixed(entry.risk_free_rate, 6),
    )
}

fn fixed(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "NA".to_string(),
    }
}

fn timestamp(value: Option<f64>) -> String {
    let Some(secs) = value else {
        return "NA".to_string();
    };

    // i64 range check before the cast
    let calendar = (secs.fract() == 0.0 && secs.abs() < 9.0e15)
        .then(|| DateTime::from_timestamp(secs as i64, 0))
        .flatten();

    match calendar {
        Some(dt) => format!("{:.0} ({})", secs, dt.format("%Y-%m-%d %H:%M:%S UTC")),
        None => format!("{:.0}", secs),
    }
}
