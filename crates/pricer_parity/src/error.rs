//! Error types for parity-implied rates.
//!
//! This module provides:
//! - `ParityError`: Why an implied risk-free rate is undefined for a quote

use thiserror::Error;

/// Reasons the put-call parity rate cannot be backed out.
///
/// None of these are failures of the pipeline; each one maps to a missing
/// rate on the affected row.
///
/// # Variants
/// - `MissingInput`: A mid-price, the spot or the strike is missing
/// - `NonPositiveExpiry`: Expired or same-day quote (T ≤ 0)
/// - `NonPositiveRatio`: The discount factor estimate is ≤ 0 (log undefined)
/// - `NonFiniteRatio`: The discount factor estimate overflowed (e.g. S = 0)
/// - `NonFiniteResult`: The rate itself is not finite
///
/// # Examples
/// ```
/// use pricer_parity::ParityError;
///
/// let err = ParityError::NonPositiveExpiry { expiry: 0.0 };
/// assert_eq!(err.to_string(), "Non-positive time to expiry: T = 0");
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum ParityError {
    /// A required input is missing.
    #[error("Missing input for parity rate")]
    MissingInput,

    /// Time to expiry is zero or negative.
    #[error("Non-positive time to expiry: T = {expiry}")]
    NonPositiveExpiry {
        /// Time to expiry in years
        expiry: f64,
    },

    /// Implied discount factor is zero or negative.
    #[error("Non-positive parity ratio: {ratio}")]
    NonPositiveRatio {
        /// The offending ratio
        ratio: f64,
    },

    /// Implied discount factor is infinite or NaN.
    #[error("Non-finite parity ratio")]
    NonFiniteRatio,

    /// The implied rate is infinite or NaN.
    #[error("Non-finite implied rate")]
    NonFiniteResult,
}

impl ParityError {
    /// Short stable label, suitable for tallies and structured logs.
    pub fn label(&self) -> &'static str {
        match self {
            ParityError::MissingInput => "missing_input",
            ParityError::NonPositiveExpiry { .. } => "non_positive_expiry",
            ParityError::NonPositiveRatio { .. } => "non_positive_ratio",
            ParityError::NonFiniteRatio => "non_finite_ratio",
            ParityError::NonFiniteResult => "non_finite_result",
        }
    }
}
