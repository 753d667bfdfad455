//! Full batch run: accumulate trades, reduce candles, join.

use crate::accumulator::TradeAccumulator;
use crate::config::{EngineConfig, ErrorPolicy};
use crate::error::EngineResult;
use crate::joiner::join;
use crate::parsing::merge_failures;
use crate::reducer::CandleReducer;
use serde::Serialize;
use shortfall_domain::value_objects::OutputRow;
use tracing::info;

/// Counters describing one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Trade rows read.
    pub trade_rows: usize,
    /// Candle rows read.
    pub candle_rows: usize,
    /// Distinct (account, ticker) pairs, one output row each.
    pub pairs: usize,
    /// Instruments with candle data.
    pub instruments: usize,
    /// Traded instruments that had no candle data.
    pub unpriced_instruments: usize,
}

/// The report rows of a completed run, ordered by account then ticker.
#[derive(Debug, Clone)]
pub struct ShortfallReport {
    pub rows: Vec<OutputRow>,
    pub stats: RunStats,
}

impl ShortfallReport {
    /// Runs the whole engine over raw trade and candle rows.
    ///
    /// Nothing is returned unless every row parses and every pair has both
    /// legs.
    ///
    /// # Errors
    /// Any [`crate::EngineError`]. Under [`ErrorPolicy::Collect`] malformed
    /// rows of both inputs are reported together.
    pub fn build<R1, S1, R2, S2>(
        trade_rows: &[R1],
        candle_rows: &[R2],
        config: &EngineConfig,
    ) -> EngineResult<Self>
    where
        R1: AsRef<[S1]>,
        S1: AsRef<str>,
        R2: AsRef<[S2]>,
        S2: AsRef<str>,
    {
        let (trades, candles) = match config.error_policy {
            ErrorPolicy::FailFast => {
                let trades = TradeAccumulator::from_rows(trade_rows, config.error_policy)?;
                let candles = CandleReducer::from_rows(candle_rows, config.error_policy)?;
                (trades, candles)
            }
            ErrorPolicy::Collect => {
                let trades = TradeAccumulator::from_rows(trade_rows, config.error_policy);
                let candles = CandleReducer::from_rows(candle_rows, config.error_policy);
                match (trades, candles) {
                    (Ok(trades), Ok(candles)) => (trades, candles),
                    (Err(err), Ok(_)) | (Ok(_), Err(err)) => return Err(err),
                    (Err(first), Err(second)) => return Err(merge_failures(first, second)),
                }
            }
        };

        let rows = join(&trades, &candles, config.join)?;
        let stats = RunStats {
            trade_rows: trades.row_count(),
            candle_rows: candles.row_count(),
            pairs: rows.len(),
            instruments: candles.len(),
            unpriced_instruments: trades
                .tickers()
                .into_iter()
                .filter(|ticker| candles.summary(ticker.as_str()).is_none())
                .count(),
        };

        info!(
            trade_rows = stats.trade_rows,
            candle_rows = stats.candle_rows,
            pairs = stats.pairs,
            unpriced = stats.unpriced_instruments,
            "Report built"
        );
        Ok(Self { rows, stats })
    }

    /// The rows rendered as text columns, ready for a tabular sink.
    #[must_use]
    pub fn records(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|row| row.fields().to_vec()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn trade_rows() -> Vec<Vec<String>> {
        [
            ["2", "a", "Y", "0", "30"],
            ["1", "b", "X", "0", "12.5"],
            ["2", "c", "Y", "25", "0"],
            ["1", "d", "X", "10.0", "0"],
        ]
        .iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
    }

    fn candle_rows() -> Vec<Vec<String>> {
        [
            ["X", "t1", "", "20", "5"],
            ["Y", "t1", "", "31", "24"],
            ["X", "t2", "", "15", "3"],
            ["Q", "t1", "", "1", "0.1"],
        ]
        .iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
    }

    #[test]
    fn test_build_report() {
        let report =
            ShortfallReport::build(&trade_rows(), &candle_rows(), &EngineConfig::default())
                .unwrap();

        assert_eq!(
            report.records(),
            vec![
                vec!["1", "X", "2.50", "17.00", "14.50", "t1", "t2"],
                vec!["2", "Y", "5.00", "7.00", "2.00", "t1", "t1"],
            ]
        );
        assert_eq!(
            report.stats,
            RunStats {
                trade_rows: 4,
                candle_rows: 4,
                pairs: 2,
                instruments: 3,
                unpriced_instruments: 0,
            }
        );
    }

    #[test]
    fn test_build_is_idempotent() {
        let config = EngineConfig::default();
        let first = ShortfallReport::build(&trade_rows(), &candle_rows(), &config).unwrap();
        let second = ShortfallReport::build(&trade_rows(), &candle_rows(), &config).unwrap();
        assert_eq!(first.records(), second.records());
    }

    #[test]
    fn test_malformed_row_prevents_output() {
        let mut trades = trade_rows();
        trades[2][3] = "2S".to_string();

        let err = ShortfallReport::build(&trades, &candle_rows(), &EngineConfig::default())
            .unwrap_err();
        assert!(matches!(err, EngineError::MalformedRecord(_)));
    }

    #[test]
    fn test_collect_reports_both_inputs() {
        let mut trades = trade_rows();
        trades[0][0] = "two".to_string();
        let mut candles = candle_rows();
        candles[1][4] = "".to_string();
        candles[3][3] = "?".to_string();

        let config = EngineConfig::default().with_error_policy(ErrorPolicy::Collect);
        let err = ShortfallReport::build(&trades, &candles, &config).unwrap_err();
        assert_eq!(err.record_errors().len(), 3);
    }

    #[test]
    fn test_unpriced_instruments_are_counted() {
        let trades = vec![vec!["1", "", "Z", "1", "0"], vec!["1", "", "Z", "0", "2"]];
        let candles: Vec<Vec<&str>> = Vec::new();

        let report = ShortfallReport::build(&trades, &candles, &EngineConfig::default()).unwrap();
        assert_eq!(report.stats.unpriced_instruments, 1);
        assert_eq!(report.len(), 1);

        let config = EngineConfig::default().with_required_candles(true);
        assert!(ShortfallReport::build(&trades, &candles, &config).is_err());
    }
}
