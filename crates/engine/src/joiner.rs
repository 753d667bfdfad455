//! Joins accumulated trades with candle summaries into report rows.

use crate::accumulator::TradeAccumulator;
use crate::config::JoinOptions;
use crate::error::{EngineError, EngineResult};
use crate::reducer::CandleReducer;
use shortfall_domain::GainError;
use shortfall_domain::entities::AccountPosition;
use shortfall_domain::value_objects::{AccountId, OutputRow, PriceSummary, Ticker};
use std::borrow::Cow;
use tracing::{info, warn};

/// Builds one [`OutputRow`] per (account, ticker) pair known to `trades`.
///
/// Instruments that only appear in the candle input produce no rows. Rows
/// are ordered by account id, then ticker.
///
/// # Errors
/// Returns [`EngineError::InsufficientData`] for a pair missing a leg, and
/// [`EngineError::MissingCandles`] for a traded instrument without candles
/// when `options.require_candles` is set.
pub fn join(
    trades: &TradeAccumulator,
    candles: &CandleReducer,
    options: JoinOptions,
) -> EngineResult<Vec<OutputRow>> {
    let mut rows = Vec::with_capacity(trades.pair_count());

    for (account, ticker, position) in trades.iter() {
        let summary = match candles.summary(ticker.as_str()) {
            Some(summary) => Cow::Borrowed(summary),
            None if options.require_candles => {
                return Err(EngineError::MissingCandles(ticker.clone()));
            }
            None => {
                warn!(%account, %ticker, "No candle data, using zero price range");
                Cow::Owned(PriceSummary::empty())
            }
        };
        rows.push(make_row(account, ticker, position, &summary)?);
    }

    info!(rows = rows.len(), "Joined trades with candles");
    Ok(rows)
}

/// Computes the realized gain, best possible gain and shortfall of one pair.
///
/// # Errors
/// Returns [`EngineError::InsufficientData`] if the position lacks a leg, and
/// [`EngineError::ArithmeticOverflow`] if any difference overflows.
pub fn make_row(
    account: AccountId,
    ticker: &Ticker,
    position: &AccountPosition,
    summary: &PriceSummary,
) -> EngineResult<OutputRow> {
    let overflow = || EngineError::ArithmeticOverflow {
        account,
        ticker: ticker.clone(),
    };
    let realized_gain = position.realized_gain().map_err(|err| match err {
        GainError::MissingLeg(missing) => EngineError::InsufficientData {
            account,
            ticker: ticker.clone(),
            missing,
        },
        GainError::Overflow => overflow(),
    })?;
    let max_gain = summary.range().ok_or_else(overflow)?;
    let shortfall = max_gain.checked_sub(realized_gain).ok_or_else(overflow)?;

    Ok(OutputRow {
        account,
        ticker: ticker.clone(),
        realized_gain,
        max_gain,
        shortfall,
        time_of_max: summary.max.time.clone(),
        time_of_min: summary.min.time.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ErrorPolicy;
    use rust_decimal_macros::dec;
    use shortfall_domain::enums::Leg;

    fn trades(rows: &[Vec<&str>]) -> TradeAccumulator {
        TradeAccumulator::from_rows(rows, ErrorPolicy::FailFast).unwrap()
    }

    fn candles(rows: &[Vec<&str>]) -> CandleReducer {
        CandleReducer::from_rows(rows, ErrorPolicy::FailFast).unwrap()
    }

    #[test]
    fn test_single_candle_example() {
        let trades = trades(&[
            vec!["1", "", "X", "0", "12.5"],
            vec!["1", "", "X", "10.0", "0"],
        ]);
        let candles = candles(&[vec!["X", "t1", "", "20", "5"]]);

        let rows = join(&trades, &candles, JoinOptions::default()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].fields(),
            ["1", "X", "2.50", "15.00", "12.50", "t1", "t1"].map(String::from)
        );
    }

    #[test]
    fn test_folded_candles_example() {
        let trades = trades(&[
            vec!["1", "", "X", "0", "12.5"],
            vec!["1", "", "X", "10.0", "0"],
        ]);
        let candles = candles(&[
            vec!["X", "t1", "", "20", "5"],
            vec!["X", "t2", "", "15", "3"],
        ]);

        let rows = join(&trades, &candles, JoinOptions::default()).unwrap();
        let row = &rows[0];
        assert_eq!(row.realized_gain, dec!(2.5));
        assert_eq!(row.max_gain, dec!(17));
        assert_eq!(row.shortfall, dec!(14.5));
        assert_eq!(
            row.fields(),
            ["1", "X", "2.50", "17.00", "14.50", "t1", "t2"].map(String::from)
        );
    }

    #[test]
    fn test_candle_only_instruments_produce_no_rows() {
        let trades = trades(&[
            vec!["1", "", "X", "10", "0"],
            vec!["1", "", "X", "0", "11"],
        ]);
        let candles = candles(&[
            vec!["X", "t1", "", "12", "9"],
            vec!["Y", "t1", "", "100", "1"],
        ]);

        let rows = join(&trades, &candles, JoinOptions::default()).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows.iter().all(|row| row.ticker.as_str() == "X"));
    }

    #[test]
    fn test_no_cross_join() {
        let trades = trades(&[
            vec!["1", "", "X", "10", "0"],
            vec!["1", "", "X", "0", "11"],
            vec!["2", "", "Y", "5", "0"],
            vec!["2", "", "Y", "0", "4"],
        ]);
        let candles = candles(&[
            vec!["X", "t1", "", "12", "9"],
            vec!["Y", "t2", "", "6", "3"],
        ]);

        let rows = join(&trades, &candles, JoinOptions::default()).unwrap();
        let keys: Vec<(i64, &str)> = rows
            .iter()
            .map(|row| (row.account.0, row.ticker.as_str()))
            .collect();
        assert_eq!(keys, vec![(1, "X"), (2, "Y")]);
        assert_eq!(rows[1].realized_gain, dec!(-1));
        assert_eq!(rows[1].shortfall, dec!(4));
    }

    #[test]
    fn test_single_leg_is_insufficient_data() {
        let trades = trades(&[vec!["3", "", "X", "10", "0"]]);
        let candles = candles(&[vec!["X", "t1", "", "12", "9"]]);

        let err = join(&trades, &candles, JoinOptions::default()).unwrap_err();
        assert_eq!(
            err,
            EngineError::InsufficientData {
                account: AccountId(3),
                ticker: Ticker::new("X"),
                missing: Leg::Sell,
            }
        );
    }

    #[test]
    fn test_shortfall_overflow_is_an_error() {
        let max = "79228162514264337593543950335";
        let trades = trades(&[vec!["1", "", "X", max, "0"], vec!["1", "", "X", "0", "0"]]);
        let candles = candles(&[vec!["X", "t1", "", max, "0"]]);

        let err = join(&trades, &candles, JoinOptions::default()).unwrap_err();
        assert_eq!(
            err,
            EngineError::ArithmeticOverflow {
                account: AccountId(1),
                ticker: Ticker::new("X"),
            }
        );
    }

    #[test]
    fn test_range_overflow_is_an_error() {
        let trades = trades(&[vec!["1", "", "X", "1", "0"], vec!["1", "", "X", "0", "2"]]);
        let candles = candles(&[vec![
            "X",
            "t1",
            "",
            "79228162514264337593543950335",
            "-79228162514264337593543950335",
        ]]);

        let err = join(&trades, &candles, JoinOptions::default()).unwrap_err();
        assert!(matches!(err, EngineError::ArithmeticOverflow { .. }));
    }

    #[test]
    fn test_missing_candles_defaults_to_zero_range() {
        let trades = trades(&[
            vec!["1", "", "Z", "10", "0"],
            vec!["1", "", "Z", "0", "12"],
        ]);
        let candles = CandleReducer::new();

        let rows = join(&trades, &candles, JoinOptions::default()).unwrap();
        assert_eq!(
            rows[0].fields(),
            ["1", "Z", "2.00", "0.00", "-2.00", "", ""].map(String::from)
        );
    }

    #[test]
    fn test_missing_candles_can_be_required() {
        let trades = trades(&[
            vec!["1", "", "Z", "10", "0"],
            vec!["1", "", "Z", "0", "12"],
        ]);
        let options = JoinOptions {
            require_candles: true,
        };

        let err = join(&trades, &CandleReducer::new(), options).unwrap_err();
        assert_eq!(err, EngineError::MissingCandles(Ticker::new("Z")));
    }
}
