//! Projection of parsed and derived rows onto the output table schema.
//!
//! The output keeps 22 columns: quote and expiry identifiers, the coerced
//! underlying/DTE/strike values, each leg's Greeks, IV and volume as they
//! appeared in the raw file, both mid-prices and the implied rate.

use adapter_optionsdx::{QuoteRow, RawColumn};
use pricer_parity::DerivedFields;
use serde::{Serialize, Serializer};

/// Output column names, in file order.
pub const OUTPUT_COLUMNS: [&str; 22] = [
    "QUOTE_UNIXTIME",
    "UNDERLYING_LAST",
    "EXPIRE_UNIX",
    "DTE",
    "STRIKE",
    "C_DELTA",
    "C_GAMMA",
    "C_VEGA",
    "C_THETA",
    "C_RHO",
    "C_IV",
    "C_VOLUME",
    "C_MID_PRICE",
    "P_DELTA",
    "P_GAMMA",
    "P_VEGA",
    "P_THETA",
    "P_RHO",
    "P_IV",
    "P_VOLUME",
    "P_MID_PRICE",
    "RISK_FREE_RATE",
];

/// One row of an asset output table.
///
/// Field order matches [`OUTPUT_COLUMNS`]; serde renames each field to its
/// column name so the CSV header is produced from the struct itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct OutputRow {
    pub quote_unixtime: String,
    #[serde(serialize_with = "serialize_float")]
    pub underlying_last: Option<f64>,
    pub expire_unix: String,
    #[serde(serialize_with = "serialize_float")]
    pub dte: Option<f64>,
    #[serde(serialize_with = "serialize_float")]
    pub strike: Option<f64>,
    pub c_delta: String,
    pub c_gamma: String,
    pub c_vega: String,
    pub c_theta: String,
    pub c_rho: String,
    pub c_iv: String,
    pub c_volume: String,
    #[serde(serialize_with = "serialize_float")]
    pub c_mid_price: Option<f64>,
    pub p_delta: String,
    pub p_gamma: String,
    pub p_vega: String,
    pub p_theta: String,
    pub p_rho: String,
    pub p_iv: String,
    pub p_volume: String,
    #[serde(serialize_with = "serialize_float")]
    pub p_mid_price: Option<f64>,
    #[serde(serialize_with = "serialize_float")]
    pub risk_free_rate: Option<f64>,

    /// Integer `QUOTE_UNIXTIME`, `None` if missing or non-numeric
    #[serde(skip)]
    pub sort_key: Option<i64>,
}

impl OutputRow {
    /// Selects the output columns from a parsed row and its derived fields.
    pub fn project(row: &QuoteRow, derived: &DerivedFields<f64>) -> Self {
        let text = |column: RawColumn| row.text(column).to_string();

        Self {
            quote_unixtime: text(RawColumn::QuoteUnixtime),
            underlying_last: row.numeric(RawColumn::UnderlyingLast),
            expire_unix: text(RawColumn::ExpireUnix),
            dte: row.numeric(RawColumn::Dte),
            strike: row.numeric(RawColumn::Strike),
            c_delta: text(RawColumn::CDelta),
            c_gamma: text(RawColumn::CGamma),
            c_vega: text(RawColumn::CVega),
            c_theta: text(RawColumn::CTheta),
            c_rho: text(RawColumn::CRho),
            c_iv: text(RawColumn::CIv),
            c_volume: text(RawColumn::CVolume),
            c_mid_price: derived.call_mid,
            p_delta: text(RawColumn::PDelta),
            p_gamma: text(RawColumn::PGamma),
            p_vega: text(RawColumn::PVega),
            p_theta: text(RawColumn::PTheta),
            p_rho: text(RawColumn::PRho),
            p_iv: text(RawColumn::PIv),
            p_volume: text(RawColumn::PVolume),
            p_mid_price: derived.put_mid,
            risk_free_rate: derived.risk_free_rate(),
            sort_key: row.quote_unixtime(),
        }
    }
}

/// Formats a float for CSV output.
///
/// Whole values keep one decimal (`100.0`) so numeric columns read back as
/// floats; everything else uses the shortest round-trip form.
///
/// # Examples
/// ```
/// use service_preprocess::projector::format_float;
///
/// assert_eq!(format_float(100.0), "100.0");
/// assert_eq!(format_float(1.1), "1.1");
/// assert_eq!(format_float(-0.5), "-0.5");
/// ```
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

fn serialize_float<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_str(&format_float(*v)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::derive_fields;
    use adapter_optionsdx::RAW_FIELD_COUNT;

    fn raw_row() -> QuoteRow {
        let mut fields: Vec<String> = RawColumn::ALL
            .iter()
            .map(|c| format!("{}-text", c.name()))
            .collect();
        for (column, value) in [
            (RawColumn::QuoteUnixtime, "1672779600"),
            (RawColumn::UnderlyingLast, "100"),
            (RawColumn::Dte, "30"),
            (RawColumn::CBid, "1.0"),
            (RawColumn::CAsk, "1.2"),
            (RawColumn::PBid, "0.8"),
            (RawColumn::PAsk, "1.0"),
            (RawColumn::Strike, "100"),
        ] {
            fields[column.index()] = value.to_string();
        }
        assert_eq!(fields.len(), RAW_FIELD_COUNT);
        QuoteRow::from_fields(fields.iter().map(String::as_str)).unwrap()
    }

    fn to_csv(rows: &[OutputRow]) -> String {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in rows {
            writer.serialize(row).unwrap();
        }
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_header_matches_output_columns() {
        let row = raw_row();
        let output = OutputRow::project(&row, &derive_fields(&row));
        let csv = to_csv(&[output]);

        let header = csv.lines().next().unwrap();
        assert_eq!(header, OUTPUT_COLUMNS.join(","));
    }

    #[test]
    fn test_projection_carries_raw_text() {
        let row = raw_row();
        let output = OutputRow::project(&row, &derive_fields(&row));

        assert_eq!(output.quote_unixtime, "1672779600");
        assert_eq!(output.expire_unix, "EXPIRE_UNIX-text");
        assert_eq!(output.c_delta, "C_DELTA-text");
        assert_eq!(output.p_volume, "P_VOLUME-text");
        assert_eq!(output.sort_key, Some(1_672_779_600));
    }

    #[test]
    fn test_projection_carries_numeric_and_derived_values() {
        let row = raw_row();
        let output = OutputRow::project(&row, &derive_fields(&row));

        assert_eq!(output.underlying_last, Some(100.0));
        assert_eq!(output.dte, Some(30.0));
        assert_eq!(output.strike, Some(100.0));
        assert_eq!(output.c_mid_price, Some(1.1));
        assert_eq!(output.p_mid_price, Some(0.9));
        assert!(output.risk_free_rate.is_some());
    }

    #[test]
    fn test_row_serialisation() {
        let row = raw_row();
        let mut output = OutputRow::project(&row, &derive_fields(&row));
        output.risk_free_rate = None;
        let csv = to_csv(&[output]);

        let record = csv.lines().nth(1).unwrap();
        let fields: Vec<&str> = record.split(',').collect();
        assert_eq!(fields.len(), OUTPUT_COLUMNS.len());
        assert_eq!(fields[1], "100.0");
        assert_eq!(fields[3], "30.0");
        assert_eq!(fields[12], "1.1");
        assert_eq!(fields[20], "0.9");
        assert_eq!(fields[21], "");
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(472.65), "472.65");
        assert_eq!(format_float(0.024357699159855800), "0.0243576991598558");
        assert_eq!(format_float(f64::INFINITY), "inf");
    }
}
