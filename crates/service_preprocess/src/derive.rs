//! Field derivation for parsed quote rows.
//!
//! Feeds the numeric cells of a [`QuoteRow`] into the pricer layer and keeps
//! a tally of why implied rates came out missing.

use std::collections::BTreeMap;

use adapter_optionsdx::{QuoteRow, RawColumn};
use pricer_parity::{DerivedFields, ParityQuote};

/// Pricer inputs taken from a parsed row.
pub fn parity_quote(row: &QuoteRow) -> ParityQuote<f64> {
    ParityQuote {
        call_bid: row.numeric(RawColumn::CBid),
        call_ask: row.numeric(RawColumn::CAsk),
        put_bid: row.numeric(RawColumn::PBid),
        put_ask: row.numeric(RawColumn::PAsk),
        spot: row.numeric(RawColumn::UnderlyingLast),
        strike: row.numeric(RawColumn::Strike),
        days_to_expiry: row.numeric(RawColumn::Dte),
    }
}

/// Mid-prices, year fraction and implied rate for a parsed row.
pub fn derive_fields(row: &QuoteRow) -> DerivedFields<f64> {
    DerivedFields::from_quote(&parity_quote(row))
}

/// Counts of defined and undefined implied rates, keyed by failure label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateTally {
    /// Rows with a defined rate
    pub defined: usize,
    /// Rows without a rate, by reason
    pub missing: BTreeMap<&'static str, usize>,
}

impl RateTally {
    /// Records the outcome for one row.
    pub fn record(&mut self, derived: &DerivedFields<f64>) {
        match &derived.implied_rate {
            Ok(_) => self.defined += 1,
            Err(reason) => *self.missing.entry(reason.label()).or_default() += 1,
        }
    }

    /// Rows without a rate.
    pub fn missing_total(&self) -> usize {
        self.missing.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapter_optionsdx::RAW_FIELD_COUNT;
    use approx::assert_relative_eq;

    fn row(overrides: &[(RawColumn, &'static str)]) -> QuoteRow {
        let mut fields = vec![""; RAW_FIELD_COUNT];
        for (column, value) in overrides {
            fields[column.index()] = *value;
        }
        QuoteRow::from_fields(fields).unwrap()
    }

    fn example_row() -> QuoteRow {
        row(&[
            (RawColumn::CBid, "1.0"),
            (RawColumn::CAsk, "1.2"),
            (RawColumn::PBid, "0.8"),
            (RawColumn::PAsk, "1.0"),
            (RawColumn::Strike, "100"),
            (RawColumn::UnderlyingLast, "100"),
            (RawColumn::Dte, "30"),
        ])
    }

    #[test]
    fn test_worked_example() {
        let derived = derive_fields(&example_row());

        assert_relative_eq!(derived.call_mid.unwrap(), 1.10, epsilon = 1e-12);
        assert_relative_eq!(derived.put_mid.unwrap(), 0.90, epsilon = 1e-12);
        assert_relative_eq!(derived.expiry.unwrap(), 30.0 / 365.0);
        assert_relative_eq!(
            derived.risk_free_rate().unwrap(),
            -(0.998_f64).ln() / (30.0 / 365.0),
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_non_numeric_cells_propagate_as_missing() {
        let derived = derive_fields(&row(&[(RawColumn::CBid, "x"), (RawColumn::CAsk, "1.2")]));
        assert_eq!(derived.call_mid, None);
        assert_eq!(derived.expiry, None);
        assert_eq!(derived.risk_free_rate(), None);
    }

    #[test]
    fn test_rate_tally() {
        let mut tally = RateTally::default();
        tally.record(&derive_fields(&example_row()));
        tally.record(&derive_fields(&row(&[])));
        tally.record(&derive_fields(&row(&[])));

        assert_eq!(tally.defined, 1);
        assert_eq!(tally.missing_total(), 2);
        assert_eq!(tally.missing.get("missing_input"), Some(&2));
    }
}
