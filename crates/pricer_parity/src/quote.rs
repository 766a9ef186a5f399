//! Per-quote derived quantities.
//!
//! Every function takes optional inputs and returns `None` as soon as one
//! of them is missing, so gaps in the raw chain flow through to the derived
//! columns instead of turning into NaN.

use num_traits::Float;

use crate::error::ParityError;
use crate::parity::try_implied_risk_free_rate;

/// Calendar days per year used to convert DTE into a year fraction.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Arithmetic mean of bid and ask.
///
/// # Examples
/// ```
/// use pricer_parity::mid_price;
///
/// assert_eq!(mid_price(Some(1.0_f64), Some(1.2)), Some(1.1));
/// assert_eq!(mid_price(Some(1.0_f64), None), None);
/// ```
#[inline]
pub fn mid_price<T: Float>(bid: Option<T>, ask: Option<T>) -> Option<T> {
    let two = T::one() + T::one();
    Some((bid? + ask?) / two)
}

/// Converts calendar days to expiry into years (`DTE / 365`).
///
/// The result is not clamped; expired and same-day quotes give values ≤ 0.
///
/// # Examples
/// ```
/// use pricer_parity::expiry_in_years;
///
/// assert_eq!(expiry_in_years(Some(365.0_f64)), Some(1.0));
/// assert_eq!(expiry_in_years(Some(0.0_f64)), Some(0.0));
/// assert_eq!(expiry_in_years::<f64>(None), None);
/// ```
#[inline]
pub fn expiry_in_years<T: Float>(days_to_expiry: Option<T>) -> Option<T> {
    let days_per_year = T::from(DAYS_PER_YEAR)?;
    Some(days_to_expiry? / days_per_year)
}

/// The raw quote values the derivations depend on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParityQuote<T> {
    /// Call bid
    pub call_bid: Option<T>,
    /// Call ask
    pub call_ask: Option<T>,
    /// Put bid
    pub put_bid: Option<T>,
    /// Put ask
    pub put_ask: Option<T>,
    /// Underlying price (S)
    pub spot: Option<T>,
    /// Strike price (K)
    pub strike: Option<T>,
    /// Calendar days to expiry
    pub days_to_expiry: Option<T>,
}

/// Quantities derived from one [`ParityQuote`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedFields<T> {
    /// Call mid-price
    pub call_mid: Option<T>,
    /// Put mid-price
    pub put_mid: Option<T>,
    /// Time to expiry in years
    pub expiry: Option<T>,
    /// Parity-implied rate, or the reason it is undefined
    pub implied_rate: Result<T, ParityError>,
}

impl<T: Float> DerivedFields<T> {
    /// Derives mid-prices, year fraction and implied rate for a quote.
    pub fn from_quote(quote: &ParityQuote<T>) -> Self {
        let call_mid = mid_price(quote.call_bid, quote.call_ask);
        let put_mid = mid_price(quote.put_bid, quote.put_ask);
        let expiry = expiry_in_years(quote.days_to_expiry);
        let implied_rate =
            try_implied_risk_free_rate(call_mid, put_mid, quote.spot, quote.strike, expiry);

        Self {
            call_mid,
            put_mid,
            expiry,
            implied_rate,
        }
    }

    /// The implied risk-free rate, `None` where undefined.
    #[inline]
    pub fn risk_free_rate(&self) -> Option<T> {
        self.implied_rate.ok()
    }
}
