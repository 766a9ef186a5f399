//! Risk-free rate implied by European put-call parity.
//!
//! ## Mathematical Formulas
//!
//! With zero dividend yield, parity states
//!
//! **C - P = S - K·e^(-rT)**
//!
//! Solving for the discount factor and then the rate:
//!
//! - ratio = e^(-rT) = (K/S)·(1 - (C - P)/S)
//! - r = -ln(ratio) / T
//!
//! The ratio coincides with the direct inversion e^(-rT) = (S - C + P)/K
//! only when K = S; away from the money the two differ.
//!
//! T is expressed in years of 365 calendar days.

use num_traits::Float;

use crate::error::ParityError;

/// Backs out the implied risk-free rate, reporting why it is undefined.
///
/// # Arguments
/// * `call` - Call mid-price (C)
/// * `put` - Put mid-price (P)
/// * `spot` - Underlying price (S)
/// * `strike` - Strike price (K)
/// * `expiry` - Time to expiry in years (T)
///
/// # Errors
/// - `ParityError::MissingInput` if any input is `None`
/// - `ParityError::NonPositiveExpiry` if T ≤ 0
/// - `ParityError::NonFiniteRatio` if the ratio is infinite or NaN
/// - `ParityError::NonPositiveRatio` if the ratio is ≤ 0
/// - `ParityError::NonFiniteResult` if the rate is infinite or NaN
///
/// # Examples
/// ```
/// use pricer_parity::{try_implied_risk_free_rate, ParityError};
///
/// let r = try_implied_risk_free_rate(Some(1.1_f64), Some(0.9), Some(100.0), Some(100.0), Some(30.0 / 365.0));
/// assert!((r.unwrap() - 0.0243577).abs() < 1e-6);
///
/// let expired = try_implied_risk_free_rate(Some(1.1_f64), Some(0.9), Some(100.0), Some(100.0), Some(0.0));
/// assert!(matches!(expired, Err(ParityError::NonPositiveExpiry { .. })));
/// ```
pub fn try_implied_risk_free_rate<T: Float>(
    call: Option<T>,
    put: Option<T>,
    spot: Option<T>,
    strike: Option<T>,
    expiry: Option<T>,
) -> Result<T, ParityError> {
    let (c, p, s, k, t) = match (call, put, spot, strike, expiry) {
        (Some(c), Some(p), Some(s), Some(k), Some(t)) => (c, p, s, k, t),
        _ => return Err(ParityError::MissingInput),
    };

    let zero = T::zero();
    // NaN expiries fall through here as well.
    if !(t > zero) {
        return Err(ParityError::NonPositiveExpiry {
            expiry: to_f64(t),
        });
    }

    let ratio = (k / s) * (T::one() - (c - p) / s);
    if !ratio.is_finite() {
        return Err(ParityError::NonFiniteRatio);
    }
    if ratio <= zero {
        return Err(ParityError::NonPositiveRatio {
            ratio: to_f64(ratio),
        });
    }

    let rate = -ratio.ln() / t;
    if rate.is_finite() {
        Ok(rate)
    } else {
        Err(ParityError::NonFiniteResult)
    }
}

/// Backs out the implied risk-free rate, or `None` where it is undefined.
///
/// See [`try_implied_risk_free_rate`] for the formula and domain guards.
///
/// # Examples
/// ```
/// use pricer_parity::implied_risk_free_rate;
///
/// // Deep in-the-money call with C - P > S gives a negative ratio.
/// assert_eq!(implied_risk_free_rate(Some(150.0_f64), Some(0.0), Some(100.0), Some(50.0), Some(1.0)), None);
/// ```
#[inline]
pub fn implied_risk_free_rate<T: Float>(
    call: Option<T>,
    put: Option<T>,
    spot: Option<T>,
    strike: Option<T>,
    expiry: Option<T>,
) -> Option<T> {
    try_implied_risk_free_rate(call, put, spot, strike, expiry).ok()
}

#[inline]
fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
