//! Candle reduction.
//!
//! Folds every candle row into one [`PriceSummary`] per instrument.

use crate::config::ErrorPolicy;
use crate::error::EngineResult;
use crate::parsing::parse_rows;
use shortfall_domain::entities::CandleRecord;
use shortfall_domain::value_objects::{PriceSummary, Ticker};
use std::collections::HashMap;
use tracing::{debug, info};

/// Per-instrument best low and best high over all candles seen.
#[derive(Debug, Clone, Default)]
pub struct CandleReducer {
    summaries: HashMap<Ticker, PriceSummary>,
    rows: usize,
}

impl CandleReducer {
    /// Creates an empty reducer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and folds raw candle rows.
    ///
    /// # Errors
    /// Returns [`crate::EngineError::MalformedRecord`] (or `MalformedRecords`
    /// under [`ErrorPolicy::Collect`]) for unparseable rows.
    pub fn from_rows<R, S>(rows: &[R], policy: ErrorPolicy) -> EngineResult<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let candles = parse_rows(rows, policy, CandleRecord::from_fields)?;

        let mut reducer = Self::new();
        for candle in &candles {
            reducer.add(candle);
        }

        info!(
            rows = reducer.rows,
            instruments = reducer.summaries.len(),
            "Reduced candles"
        );
        Ok(reducer)
    }

    /// Folds one candle into its instrument's summary, creating the summary
    /// on first sight.
    pub fn add(&mut self, candle: &CandleRecord) {
        self.summaries
            .entry(candle.ticker.clone())
            .and_modify(|summary| summary.fold(candle))
            .or_insert_with(|| PriceSummary::from_candle(candle));
        self.rows += 1;

        debug!(
            ticker = %candle.ticker,
            time = %candle.time,
            max = %candle.max_price,
            min = %candle.min_price,
            "Folded candle"
        );
    }

    /// Summary for one instrument, if any candle was seen for it.
    #[must_use]
    pub fn summary(&self, ticker: &str) -> Option<&PriceSummary> {
        self.summaries.get(ticker)
    }

    /// Iterates over the summaries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Ticker, &PriceSummary)> {
        self.summaries.iter()
    }

    /// Summaries ordered by ticker.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&Ticker, &PriceSummary)> {
        let mut summaries: Vec<_> = self.summaries.iter().collect();
        summaries.sort_by(|a, b| a.0.cmp(b.0));
        summaries
    }

    /// Number of instruments with at least one candle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Number of candle rows folded.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reduce_keeps_extremes_and_times() {
        let rows = vec![
            vec!["X", "t1", "", "20", "5"],
            vec!["X", "t2", "", "15", "3"],
        ];
        let reducer = CandleReducer::from_rows(&rows, ErrorPolicy::FailFast).unwrap();

        let summary = reducer.summary("X").unwrap();
        assert_eq!(summary.max.price.value, dec!(20));
        assert_eq!(summary.max.time, "t1");
        assert_eq!(summary.min.price.value, dec!(3));
        assert_eq!(summary.min.time, "t2");
    }

    #[test]
    fn test_reduce_ties_keep_first_seen() {
        let rows = vec![
            vec!["X", "t1", "", "20", "5"],
            vec!["X", "t2", "", "20", "5"],
        ];
        let reducer = CandleReducer::from_rows(&rows, ErrorPolicy::FailFast).unwrap();

        let summary = reducer.summary("X").unwrap();
        assert_eq!(summary.max.time, "t1");
        assert_eq!(summary.min.time, "t1");
    }

    #[test]
    fn test_instruments_are_independent() {
        let rows = vec![
            vec!["B", "t1", "", "2", "1"],
            vec!["A", "t1", "", "200", "100"],
            vec!["B", "t2", "", "4", "0.5"],
        ];
        let reducer = CandleReducer::from_rows(&rows, ErrorPolicy::FailFast).unwrap();

        assert_eq!(reducer.len(), 2);
        assert_eq!(reducer.row_count(), 3);
        assert_eq!(reducer.summary("A").unwrap().range(), Some(dec!(100)));
        assert_eq!(reducer.summary("B").unwrap().range(), Some(dec!(3.5)));
        assert!(reducer.summary("C").is_none());

        let order: Vec<&str> = reducer.sorted().iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(order, vec!["A", "B"]);
    }

    #[test]
    fn test_malformed_candle_aborts() {
        let rows = vec![vec!["X", "t1", "", "20", "low"]];
        let err = CandleReducer::from_rows(&rows, ErrorPolicy::FailFast).unwrap_err();
        assert!(matches!(err, EngineError::MalformedRecord(_)));
    }
}
