//! One line of the shortfall report.

use crate::value_objects::account_id::AccountId;
use crate::value_objects::ticker::Ticker;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};

/// Number of text columns in a rendered report row.
pub const OUTPUT_COLUMNS: usize = 7;

/// Realized versus best-possible gain for one account on one instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    pub account: AccountId,
    pub ticker: Ticker,
    /// Sell price minus buy price.
    #[serde(serialize_with = "serialize_money")]
    pub realized_gain: Decimal,
    /// Window maximum minus window minimum.
    #[serde(serialize_with = "serialize_money")]
    pub max_gain: Decimal,
    /// `max_gain - realized_gain`.
    #[serde(serialize_with = "serialize_money")]
    pub shortfall: Decimal,
    pub time_of_max: String,
    pub time_of_min: String,
}

impl OutputRow {
    /// Renders the row as text columns:
    /// account, ticker, realized gain, max gain, shortfall, time of max, time of min.
    #[must_use]
    pub fn fields(&self) -> [String; OUTPUT_COLUMNS] {
        [
            self.account.to_string(),
            self.ticker.to_string(),
            format_money(self.realized_gain),
            format_money(self.max_gain),
            format_money(self.shortfall),
            self.time_of_max.clone(),
            self.time_of_min.clone(),
        ]
    }
}

/// Fixed two-decimal text, rounding half away from zero.
///
/// No grouping, no currency symbol, and never `-0.00`.
#[must_use]
pub fn format_money(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let rounded = if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    };
    format!("{rounded:.2}")
}

fn serialize_money<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_money(*value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_money_pads_and_rounds() {
        assert_eq!(format_money(dec!(2.5)), "2.50");
        assert_eq!(format_money(dec!(15)), "15.00");
        assert_eq!(format_money(dec!(12.345)), "12.35");
        assert_eq!(format_money(dec!(-1.005)), "-1.01");
        assert_eq!(format_money(dec!(1234567.891)), "1234567.89");
    }

    #[test]
    fn test_format_money_has_no_negative_zero() {
        assert_eq!(format_money(dec!(-0.001)), "0.00");
        assert_eq!(format_money(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_fields_layout() {
        let row = OutputRow {
            account: AccountId(1),
            ticker: Ticker::new("X"),
            realized_gain: dec!(2.5),
            max_gain: dec!(15),
            shortfall: dec!(12.5),
            time_of_max: "t1".to_string(),
            time_of_min: "t2".to_string(),
        };
        assert_eq!(
            row.fields(),
            ["1", "X", "2.50", "15.00", "12.50", "t1", "t2"].map(String::from)
        );
    }
}
