//! Header-less quote file parsing with schema validation.
//!
//! Files are read as comma-delimited text with every field taken as a
//! string; only the schema's numeric columns are coerced afterwards, so no
//! type is ever inferred from the data itself.
//!
//! A file is accepted or rejected as a whole: if any record's width differs
//! from [`RAW_FIELD_COUNT`], no rows are returned.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::ParseError;
use crate::row::QuoteRow;
use crate::schema::RAW_FIELD_COUNT;

/// Parses one quote file from disk.
///
/// # Errors
/// - `ParseError::ColumnMismatch` if the file is empty or any record has
///   the wrong number of fields
/// - `ParseError::Io` if the file cannot be opened
/// - `ParseError::Csv` if the content cannot be decoded
pub fn parse_quote_file(path: impl AsRef<Path>) -> Result<Vec<QuoteRow>, ParseError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let rows = parse_quote_reader(file)?;
    debug!(path = %path.display(), rows = rows.len(), "Parsed quote file");
    Ok(rows)
}

/// Parses quote records from any reader.
///
/// # Examples
///
/// ```
/// use adapter_optionsdx::{parse_quote_reader, ParseError, RAW_FIELD_COUNT};
///
/// let line = vec!["1"; RAW_FIELD_COUNT].join(",");
/// let rows = parse_quote_reader(line.as_bytes()).unwrap();
/// assert_eq!(rows.len(), 1);
///
/// let short = vec!["1"; 5].join(",");
/// assert!(matches!(
///     parse_quote_reader(short.as_bytes()),
///     Err(ParseError::ColumnMismatch { found: 5, .. })
/// ));
/// ```
pub fn parse_quote_reader<R: Read>(reader: R) -> Result<Vec<QuoteRow>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let found = record.len();
        let row = QuoteRow::from_fields(record.iter()).ok_or(ParseError::ColumnMismatch {
            found,
            expected: RAW_FIELD_COUNT,
        })?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ParseError::ColumnMismatch {
            found: 0,
            expected: RAW_FIELD_COUNT,
        });
    }

    Ok(rows)
}
