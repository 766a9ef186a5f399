//! Fixed positional schema of an OptionsDX raw chain file.
//!
//! OptionsDX files carry no usable header, so column meaning is purely
//! positional. The schema is an explicit ordered list: each column has a
//! name and a [`ColumnKind`] telling the parser whether to keep the text
//! as-is or coerce it to a number.
//!
//! # Examples
//!
//! ```
//! use adapter_optionsdx::schema::{ColumnKind, RawColumn, RAW_FIELD_COUNT};
//!
//! assert_eq!(RawColumn::ALL.len(), RAW_FIELD_COUNT);
//! assert_eq!(RawColumn::Strike.name(), "STRIKE");
//! assert_eq!(RawColumn::Strike.kind(), ColumnKind::Numeric);
//! assert_eq!(RawColumn::CDelta.kind(), ColumnKind::Text);
//! ```

use std::fmt;

/// How the parser treats the values of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Kept as trimmed text and carried through untouched.
    Text,
    /// Coerced with [`coerce_numeric`]; failures become missing.
    Numeric,
}

/// One column of the raw OptionsDX schema, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RawColumn {
    /// Quote snapshot time as Unix seconds
    QuoteUnixtime,
    /// Human-readable quote snapshot time
    QuoteReadtime,
    /// Quote date
    QuoteDate,
    /// Quote time of day in hours
    QuoteTimeHours,
    /// Last underlying price
    UnderlyingLast,
    /// Expiry date
    ExpireDate,
    /// Expiry as Unix seconds
    ExpireUnix,
    /// Calendar days to expiry
    Dte,
    /// Call delta
    CDelta,
    /// Call gamma
    CGamma,
    /// Call vega
    CVega,
    /// Call theta
    CTheta,
    /// Call rho
    CRho,
    /// Call implied volatility
    CIv,
    /// Call volume
    CVolume,
    /// Call last trade price
    CLast,
    /// Call bid/ask size
    CSize,
    /// Call bid
    CBid,
    /// Call ask
    CAsk,
    /// Strike price
    Strike,
    /// Put bid
    PBid,
    /// Put ask
    PAsk,
    /// Put bid/ask size
    PSize,
    /// Put last trade price
    PLast,
    /// Put delta
    PDelta,
    /// Put gamma
    PGamma,
    /// Put vega
    PVega,
    /// Put theta
    PTheta,
    /// Put rho
    PRho,
    /// Put implied volatility
    PIv,
    /// Put volume
    PVolume,
    /// Absolute distance between strike and underlying
    StrikeDistance,
    /// Strike distance as a fraction of the underlying
    StrikeDistancePct,
}

/// Number of positional fields every raw row must carry.
pub const RAW_FIELD_COUNT: usize = RawColumn::ALL.len();

impl RawColumn {
    /// Every column in file order.
    pub const ALL: [RawColumn; 33] = [
        RawColumn::QuoteUnixtime,
        RawColumn::QuoteReadtime,
        RawColumn::QuoteDate,
        RawColumn::QuoteTimeHours,
        RawColumn::UnderlyingLast,
        RawColumn::ExpireDate,
        RawColumn::ExpireUnix,
        RawColumn::Dte,
        RawColumn::CDelta,
        RawColumn::CGamma,
        RawColumn::CVega,
        RawColumn::CTheta,
        RawColumn::CRho,
        RawColumn::CIv,
        RawColumn::CVolume,
        RawColumn::CLast,
        RawColumn::CSize,
        RawColumn::CBid,
        RawColumn::CAsk,
        RawColumn::Strike,
        RawColumn::PBid,
        RawColumn::PAsk,
        RawColumn::PSize,
        RawColumn::PLast,
        RawColumn::PDelta,
        RawColumn::PGamma,
        RawColumn::PVega,
        RawColumn::PTheta,
        RawColumn::PRho,
        RawColumn::PIv,
        RawColumn::PVolume,
        RawColumn::StrikeDistance,
        RawColumn::StrikeDistancePct,
    ];

    /// Columns coerced to numbers at parse time.
    pub const NUMERIC: [RawColumn; 7] = [
        RawColumn::UnderlyingLast,
        RawColumn::Dte,
        RawColumn::CBid,
        RawColumn::CAsk,
        RawColumn::PBid,
        RawColumn::PAsk,
        RawColumn::Strike,
    ];

    /// Zero-based position of the column in a raw record.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical upper-case column name.
    pub fn name(self) -> &'static str {
        match self {
            RawColumn::QuoteUnixtime => "QUOTE_UNIXTIME",
            RawColumn::QuoteReadtime => "QUOTE_READTIME",
            RawColumn::QuoteDate => "QUOTE_DATE",
            RawColumn::QuoteTimeHours => "QUOTE_TIME_HOURS",
            RawColumn::UnderlyingLast => "UNDERLYING_LAST",
            RawColumn::ExpireDate => "EXPIRE_DATE",
            RawColumn::ExpireUnix => "EXPIRE_UNIX",
            RawColumn::Dte => "DTE",
            RawColumn::CDelta => "C_DELTA",
            RawColumn::CGamma => "C_GAMMA",
            RawColumn::CVega => "C_VEGA",
            RawColumn::CTheta => "C_THETA",
            RawColumn::CRho => "C_RHO",
            RawColumn::CIv => "C_IV",
            RawColumn::CVolume => "C_VOLUME",
            RawColumn::CLast => "C_LAST",
            RawColumn::CSize => "C_SIZE",
            RawColumn::CBid => "C_BID",
            RawColumn::CAsk => "C_ASK",
            RawColumn::Strike => "STRIKE",
            RawColumn::PBid => "P_BID",
            RawColumn::PAsk => "P_ASK",
            RawColumn::PSize => "P_SIZE",
            RawColumn::PLast => "P_LAST",
            RawColumn::PDelta => "P_DELTA",
            RawColumn::PGamma => "P_GAMMA",
            RawColumn::PVega => "P_VEGA",
            RawColumn::PTheta => "P_THETA",
            RawColumn::PRho => "P_RHO",
            RawColumn::PIv => "P_IV",
            RawColumn::PVolume => "P_VOLUME",
            RawColumn::StrikeDistance => "STRIKE_DISTANCE",
            RawColumn::StrikeDistancePct => "STRIKE_DISTANCE_PCT",
        }
    }

    /// Parse-time treatment of this column.
    pub fn kind(self) -> ColumnKind {
        if Self::NUMERIC.contains(&self) {
            ColumnKind::Numeric
        } else {
            ColumnKind::Text
        }
    }

    /// Looks a column up by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for RawColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coerces one raw value to a number.
///
/// Surrounding whitespace is ignored. Empty, unparseable and NaN values
/// yield `None`; this never fails.
///
/// # Examples
///
/// ```
/// use adapter_optionsdx::schema::coerce_numeric;
///
/// assert_eq!(coerce_numeric(" 101.5 "), Some(101.5));
/// assert_eq!(coerce_numeric(""), None);
/// assert_eq!(coerce_numeric("[STRIKE]"), None);
/// ```
pub fn coerce_numeric(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_count_matches_column_list() {
        assert_eq!(RAW_FIELD_COUNT, 33);
        assert_eq!(RawColumn::ALL.len(), RAW_FIELD_COUNT);
    }

    #[test]
    fn test_index_matches_position() {
        for (pos, column) in RawColumn::ALL.iter().enumerate() {
            assert_eq!(column.index(), pos, "{} out of place", column);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = RawColumn::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), RAW_FIELD_COUNT);
    }

    #[test]
    fn test_numeric_subset() {
        let numeric: Vec<_> = RawColumn::ALL
            .iter()
            .filter(|c| c.kind() == ColumnKind::Numeric)
            .map(|c| c.name())
            .collect();
        assert_eq!(
            numeric,
            vec!["UNDERLYING_LAST", "DTE", "C_BID", "C_ASK", "STRIKE", "P_BID", "P_ASK"]
        );
    }

    #[test]
    fn test_timestamps_stay_text() {
        assert_eq!(RawColumn::QuoteUnixtime.kind(), ColumnKind::Text);
        assert_eq!(RawColumn::ExpireUnix.kind(), ColumnKind::Text);
    }

    #[test]
    fn test_from_name_round_trip() {
        for column in RawColumn::ALL {
            assert_eq!(RawColumn::from_name(column.name()), Some(column));
        }
        assert_eq!(RawColumn::from_name("T"), None);
    }

    #[test]
    fn test_coerce_numeric() {
        assert_eq!(coerce_numeric("30"), Some(30.0));
        assert_eq!(coerce_numeric("  0.25"), Some(0.25));
        assert_eq!(coerce_numeric("-1e-3"), Some(-0.001));
        assert_eq!(coerce_numeric("   "), None);
        assert_eq!(coerce_numeric("NaN"), None);
        assert_eq!(coerce_numeric("12,5"), None);
        assert_eq!(coerce_numeric("abc"), None);
    }
}
