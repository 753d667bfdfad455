use crate::entities::fields;
use crate::enums::Leg;
use crate::error::RecordError;
use crate::value_objects::{AccountId, Price, Ticker};
use serde::{Deserialize, Serialize};

/// One executed trade row.
///
/// Columns: `[0]` account id, `[1]` unused, `[2]` ticker, `[3]` buy price,
/// `[4]` sell price. A zero price means the row is not that leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub account: AccountId,
    pub ticker: Ticker,
    pub buy_price: Price,
    pub sell_price: Price,
}

impl TradeRecord {
    pub const ACCOUNT_COLUMN: usize = 0;
    pub const TICKER_COLUMN: usize = 2;
    pub const BUY_COLUMN: usize = 3;
    pub const SELL_COLUMN: usize = 4;

    /// Parses a raw row. `row` is the 1-based position used in error reports.
    ///
    /// # Errors
    /// Returns [`RecordError`] when a column is missing, the account id is
    /// not an integer, or a price is not a decimal.
    pub fn from_fields<S: AsRef<str>>(row: usize, record: &[S]) -> Result<Self, RecordError> {
        let account = fields::account(record, row, Self::ACCOUNT_COLUMN, "account id")?;
        let ticker = fields::text(record, row, Self::TICKER_COLUMN, "ticker")?;
        let buy_price = fields::price(record, row, Self::BUY_COLUMN, "buy price")?;
        let sell_price = fields::price(record, row, Self::SELL_COLUMN, "sell price")?;

        Ok(Self {
            account,
            ticker: Ticker::new(ticker),
            buy_price,
            sell_price,
        })
    }

    /// Which leg this row records, and at what price.
    ///
    /// A non-zero buy price wins even when the sell price is also set; a row
    /// with both prices at zero is a zero-priced sell leg.
    #[must_use]
    pub fn leg(&self) -> (Leg, Price) {
        if self.buy_price.is_zero() {
            (Leg::Sell, self.sell_price)
        } else {
            (Leg::Buy, self.buy_price)
        }
    }
}
