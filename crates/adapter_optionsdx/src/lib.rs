//! # adapter_optionsdx: OptionsDX Raw Chain Adapter
//!
//! ## Adapter Layer Role
//!
//! This crate sits at the input edge of the A-I-P-S architecture. It turns
//! the OptionsDX end-of-day chain dumps on disk into schema-checked rows:
//! - Asset directory discovery (`walker`)
//! - The fixed positional raw schema (`schema`)
//! - Header-less file parsing with column-count validation (`parser`)
//! - Name-addressed rows with optional numeric cells (`row`)
//!
//! Nothing here knows about pricing; derived quantities live in the pricer
//! layer and are combined with these rows by the service layer.
//!
//! ## Usage Examples
//!
//! ```no_run
//! use adapter_optionsdx::{parse_quote_file, AssetWalker, RawColumn};
//!
//! for asset in AssetWalker::open("OptionsDX_Raw_Data", ".txt").unwrap() {
//!     let asset = asset.unwrap();
//!     for file in &asset.files {
//!         if let Ok(rows) = parse_quote_file(file) {
//!             let strike = rows[0].numeric(RawColumn::Strike);
//!             println!("{} {:?}", asset.name, strike);
//!         }
//!     }
//! }
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod parser;
pub mod row;
pub mod schema;
pub mod walker;

pub use error::{LoaderError, ParseError};
pub use parser::{parse_quote_file, parse_quote_reader};
pub use row::{Cell, QuoteRow};
pub use schema::{coerce_numeric, ColumnKind, RawColumn, RAW_FIELD_COUNT};
pub use walker::{AssetDirectory, AssetWalker};
