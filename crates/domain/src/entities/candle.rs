use crate::entities::fields;
use crate::error::RecordError;
use crate::value_objects::{Price, Ticker};
use serde::{Deserialize, Serialize};

/// One price-range observation for an instrument.
///
/// Columns: `[0]` ticker, `[1]` time label, `[2]` unused, `[3]` window
/// maximum, `[4]` window minimum. The time label is kept as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandleRecord {
    pub ticker: Ticker,
    pub time: String,
    pub max_price: Price,
    pub min_price: Price,
}

impl CandleRecord {
    pub const TICKER_COLUMN: usize = 0;
    pub const TIME_COLUMN: usize = 1;
    pub const MAX_COLUMN: usize = 3;
    pub const MIN_COLUMN: usize = 4;

    /// Parses a raw row. `row` is the 1-based position used in error reports.
    ///
    /// # Errors
    /// Returns [`RecordError`] when a column is missing or a price is not a
    /// decimal.
    pub fn from_fields<S: AsRef<str>>(row: usize, record: &[S]) -> Result<Self, RecordError> {
        let ticker = fields::text(record, row, Self::TICKER_COLUMN, "ticker")?;
        let time = fields::text(record, row, Self::TIME_COLUMN, "time")?;
        let max_price = fields::price(record, row, Self::MAX_COLUMN, "max price")?;
        let min_price = fields::price(record, row, Self::MIN_COLUMN, "min price")?;

        Ok(Self {
            ticker: Ticker::new(ticker),
            time: time.to_string(),
            max_price,
            min_price,
        })
    }
}
