//! Schema-bound quote rows.

use crate::schema::{coerce_numeric, ColumnKind, RawColumn, RAW_FIELD_COUNT};

/// A single parsed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Trimmed text of a `Text` column
    Text(String),
    /// Coerced value of a `Numeric` column; `None` when coercion failed
    Numeric(Option<f64>),
}

/// One raw record bound to the OptionsDX schema.
///
/// Cells are stored in schema order, so every [`RawColumn`] resolves to a
/// cell of the kind the schema declares for it.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRow {
    cells: Vec<Cell>,
}

impl QuoteRow {
    /// Binds positional fields to the schema, coercing numeric columns.
    ///
    /// Returns `None` when the field count does not match the schema.
    ///
    /// # Examples
    ///
    /// ```
    /// use adapter_optionsdx::{QuoteRow, RawColumn, RAW_FIELD_COUNT};
    ///
    /// let mut fields = vec!["0"; RAW_FIELD_COUNT];
    /// fields[RawColumn::Strike.index()] = " 450";
    /// fields[RawColumn::CBid.index()] = "n/a";
    ///
    /// let row = QuoteRow::from_fields(fields).unwrap();
    /// assert_eq!(row.numeric(RawColumn::Strike), Some(450.0));
    /// assert_eq!(row.numeric(RawColumn::CBid), None);
    /// ```
    pub fn from_fields<'a, I>(fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let fields: Vec<&str> = fields.into_iter().collect();
        if fields.len() != RAW_FIELD_COUNT {
            return None;
        }

        let cells = RawColumn::ALL
            .iter()
            .zip(fields)
            .map(|(column, raw)| match column.kind() {
                ColumnKind::Text => Cell::Text(raw.trim().to_string()),
                ColumnKind::Numeric => Cell::Numeric(coerce_numeric(raw)),
            })
            .collect();

        Some(Self { cells })
    }

    /// The cell bound to `column`.
    #[inline]
    pub fn cell(&self, column: RawColumn) -> &Cell {
        &self.cells[column.index()]
    }

    /// Coerced value of a numeric column.
    ///
    /// Text columns always report `None`; use [`QuoteRow::text`] for them.
    pub fn numeric(&self, column: RawColumn) -> Option<f64> {
        match self.cell(column) {
            Cell::Numeric(value) => *value,
            Cell::Text(_) => None,
        }
    }

    /// Trimmed text of a text column.
    ///
    /// Numeric columns report an empty string; use [`QuoteRow::numeric`].
    pub fn text(&self, column: RawColumn) -> &str {
        match self.cell(column) {
            Cell::Text(value) => value,
            Cell::Numeric(_) => "",
        }
    }

    /// Quote snapshot time as integer Unix seconds.
    ///
    /// Decimal text is accepted and floored to whole seconds
    /// (`1704204000.5` becomes `1704204000`), so fractional timestamps keep
    /// their numeric position when sorting. Missing or non-numeric
    /// timestamps yield `None`.
    pub fn quote_unixtime(&self) -> Option<i64> {
        parse_unix_seconds(self.text(RawColumn::QuoteUnixtime))
    }
}

/// Parses a Unix-seconds field that may have been written as a float.
///
/// Float text is floored to whole seconds.
pub(crate) fn parse_unix_seconds(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(seconds) = value.parse::<i64>() {
        return Some(seconds);
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields_with(overrides: &[(RawColumn, &'static str)]) -> Vec<&'static str> {
        let mut fields = vec![""; RAW_FIELD_COUNT];
        for (column, value) in overrides {
            fields[column.index()] = *value;
        }
        fields
    }

    #[test]
    fn test_from_fields_binds_by_position() {
        let fields = fields_with(&[
            (RawColumn::QuoteUnixtime, "1704204000"),
            (RawColumn::CDelta, " 0.51 "),
            (RawColumn::UnderlyingLast, "472.65"),
        ]);
        let row = QuoteRow::from_fields(fields).unwrap();

        assert_eq!(row.text(RawColumn::QuoteUnixtime), "1704204000");
        assert_eq!(row.text(RawColumn::CDelta), "0.51");
        assert_eq!(row.numeric(RawColumn::UnderlyingLast), Some(472.65));
    }

    #[test]
    fn test_from_fields_rejects_wrong_width() {
        assert!(QuoteRow::from_fields(vec!["1"; RAW_FIELD_COUNT - 1]).is_none());
        assert!(QuoteRow::from_fields(vec!["1"; RAW_FIELD_COUNT + 1]).is_none());
    }

    #[test]
    fn test_kind_mismatched_accessors() {
        let row = QuoteRow::from_fields(vec!["7"; RAW_FIELD_COUNT]).unwrap();
        assert_eq!(row.numeric(RawColumn::CDelta), None);
        assert_eq!(row.text(RawColumn::Strike), "");
    }

    #[test]
    fn test_quote_unixtime() {
        let row = QuoteRow::from_fields(fields_with(&[(RawColumn::QuoteUnixtime, "1704204000.0")]))
            .unwrap();
        assert_eq!(row.quote_unixtime(), Some(1_704_204_000));

        let row = QuoteRow::from_fields(fields_with(&[(
            RawColumn::QuoteUnixtime,
            "[QUOTE_UNIXTIME]",
        )]))
        .unwrap();
        assert_eq!(row.quote_unixtime(), None);
    }

    #[test]
    fn test_fractional_unixtime_orders_numerically() {
        let unixtime = |text: &'static str| {
            QuoteRow::from_fields(fields_with(&[(RawColumn::QuoteUnixtime, text)]))
                .unwrap()
                .quote_unixtime()
        };

        let fractional = unixtime("1672779600.5").unwrap();
        assert_eq!(fractional, 1_672_779_600);
        assert!(fractional < unixtime("1672779601").unwrap());
    }

    #[test]
    fn test_parse_unix_seconds() {
        assert_eq!(parse_unix_seconds(" 42 "), Some(42));
        assert_eq!(parse_unix_seconds("42.5"), Some(42));
        assert_eq!(parse_unix_seconds("-0.5"), Some(-1));
        assert_eq!(parse_unix_seconds(""), None);
        assert_eq!(parse_unix_seconds("inf"), None);
    }
}
