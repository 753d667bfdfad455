//! Running best-low / best-high summary of an instrument's candles.

use crate::entities::candle::CandleRecord;
use crate::value_objects::price::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price extreme together with the time label of the candle that set it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: Price,
    pub time: String,
}

/// Lowest window-low and highest window-high seen for one instrument.
///
/// A summary only exists once a first candle has been folded in, so there
/// is no "nothing seen yet" sentinel to carry around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub min: PricePoint,
    pub max: PricePoint,
}

impl PriceSummary {
    /// Starts a summary from the first candle observed for an instrument.
    #[must_use]
    pub fn from_candle(candle: &CandleRecord) -> Self {
        Self {
            min: PricePoint {
                price: candle.min_price,
                time: candle.time.clone(),
            },
            max: PricePoint {
                price: candle.max_price,
                time: candle.time.clone(),
            },
        }
    }

    /// Summary used for instruments that never appeared in the candle input:
    /// both extremes at zero with empty time labels.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: PricePoint {
                price: Price::ZERO,
                time: String::new(),
            },
            max: PricePoint {
                price: Price::ZERO,
                time: String::new(),
            },
        }
    }

    /// Folds one more candle in.
    ///
    /// Comparisons are strict, so on an exact tie the earlier observation
    /// and its time label are kept.
    pub fn fold(&mut self, candle: &CandleRecord) {
        if candle.max_price > self.max.price {
            self.max.price = candle.max_price;
            self.max.time.clone_from(&candle.time);
        }
        if candle.min_price < self.min.price {
            self.min.price = candle.min_price;
            self.min.time.clone_from(&candle.time);
        }
    }

    /// Best possible gain over the window: highest high minus lowest low.
    /// `None` if the difference does not fit a `Decimal`.
    #[must_use]
    pub fn range(&self) -> Option<Decimal> {
        self.max.price.checked_sub(self.min.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::ticker::Ticker;
    use rust_decimal_macros::dec;

    fn candle(time: &str, max: Decimal, min: Decimal) -> CandleRecord {
        CandleRecord {
            ticker: Ticker::new("X"),
            time: time.to_string(),
            max_price: Price::new(max),
            min_price: Price::new(min),
        }
    }

    #[test]
    fn test_first_candle_sets_both_extremes() {
        let summary = PriceSummary::from_candle(&candle("t1", dec!(20), dec!(5)));
        assert_eq!(summary.max.price.value, dec!(20));
        assert_eq!(summary.max.time, "t1");
        assert_eq!(summary.min.price.value, dec!(5));
        assert_eq!(summary.min.time, "t1");
        assert_eq!(summary.range(), Some(dec!(15)));
    }

    #[test]
    fn test_fold_keeps_global_extremes() {
        let mut summary = PriceSummary::from_candle(&candle("t1", dec!(20), dec!(5)));
        summary.fold(&candle("t2", dec!(15), dec!(3)));

        assert_eq!(summary.max.price.value, dec!(20));
        assert_eq!(summary.max.time, "t1");
        assert_eq!(summary.min.price.value, dec!(3));
        assert_eq!(summary.min.time, "t2");
    }

    #[test]
    fn test_ties_keep_first_observation() {
        let mut summary = PriceSummary::from_candle(&candle("t1", dec!(20), dec!(5)));
        summary.fold(&candle("t2", dec!(20), dec!(5)));
        summary.fold(&candle("t3", dec!(20.00), dec!(5.0)));

        assert_eq!(summary.max.time, "t1");
        assert_eq!(summary.min.time, "t1");
    }

    #[test]
    fn test_range_overflow_is_none() {
        let summary = PriceSummary::from_candle(&candle("t1", Decimal::MAX, Decimal::MIN));
        assert_eq!(summary.range(), None);
    }

    #[test]
    fn test_empty_summary_has_zero_range() {
        let summary = PriceSummary::empty();
        assert_eq!(summary.range(), Some(Decimal::ZERO));
        assert!(summary.max.time.is_empty());
        assert!(summary.min.time.is_empty());
    }
}
