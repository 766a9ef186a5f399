//! # pricer_parity: Quote-Derived Quantities for Option Chains
//!
//! ## Pricer Layer Role
//!
//! pricer_parity holds the small amount of genuine pricing logic the
//! preprocessing pipeline needs:
//! - Bid/ask mid-prices (`quote::mid_price`)
//! - Calendar-day expiry to year fractions (`quote::expiry_in_years`)
//! - Put-call parity implied risk-free rate (`parity`)
//! - Error types: `ParityError` (`error`)
//!
//! ## Zero Dependency Principle
//!
//! This crate has no dependencies on adapter or service crates. Inputs are
//! plain optional scalars; a missing input is `None` and every function
//! propagates it instead of failing.
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_parity::{DerivedFields, ParityQuote};
//!
//! let quote = ParityQuote {
//!     call_bid: Some(1.0_f64),
//!     call_ask: Some(1.2),
//!     put_bid: Some(0.8),
//!     put_ask: Some(1.0),
//!     spot: Some(100.0),
//!     strike: Some(100.0),
//!     days_to_expiry: Some(30.0),
//! };
//! let derived = DerivedFields::from_quote(&quote);
//!
//! assert!((derived.call_mid.unwrap() - 1.10).abs() < 1e-12);
//! assert!((derived.risk_free_rate().unwrap() - 0.0243577).abs() < 1e-6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod parity;
pub mod quote;

pub use error::ParityError;
pub use parity::{implied_risk_free_rate, try_implied_risk_free_rate};
pub use quote::{expiry_in_years, mid_price, DerivedFields, ParityQuote, DAYS_PER_YEAR};
