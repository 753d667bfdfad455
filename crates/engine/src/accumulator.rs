//! Trade accumulation.
//!
//! Groups trade rows by account and instrument, slotting each row into the
//! buy or sell side of the pair's [`AccountPosition`].

use crate::config::ErrorPolicy;
use crate::error::{EngineError, EngineResult};
use crate::parsing::parse_rows;
use shortfall_domain::entities::{AccountPosition, TradeRecord};
use shortfall_domain::value_objects::{AccountId, Ticker};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// Positions keyed by account, then by instrument.
pub type PositionMap = BTreeMap<AccountId, BTreeMap<Ticker, AccountPosition>>;

/// Collects the buy and sell legs of every (account, instrument) pair.
#[derive(Debug, Clone, Default)]
pub struct TradeAccumulator {
    positions: PositionMap,
    rows: usize,
}

impl TradeAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and accumulates raw trade rows.
    ///
    /// # Errors
    /// Returns [`EngineError::MalformedRecord`] (or `MalformedRecords` under
    /// [`ErrorPolicy::Collect`]) for unparseable rows, and
    /// [`EngineError::DuplicateLeg`] when a pair records the same leg twice.
    pub fn from_rows<R, S>(rows: &[R], policy: ErrorPolicy) -> EngineResult<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let trades = parse_rows(rows, policy, TradeRecord::from_fields)?;

        let mut accumulator = Self::new();
        for (index, trade) in trades.iter().enumerate() {
            accumulator.add(index + 1, trade)?;
        }

        info!(
            rows = accumulator.rows,
            accounts = accumulator.positions.len(),
            pairs = accumulator.pair_count(),
            "Accumulated trades"
        );
        Ok(accumulator)
    }

    /// Records one trade row. `row` is only used for error reporting.
    ///
    /// # Errors
    /// Returns [`EngineError::DuplicateLeg`] if the pair already holds this leg.
    pub fn add(&mut self, row: usize, trade: &TradeRecord) -> EngineResult<()> {
        let (leg, price) = trade.leg();
        let position = self
            .positions
            .entry(trade.account)
            .or_default()
            .entry(trade.ticker.clone())
            .or_default();

        position
            .record(leg, price)
            .map_err(|existing| EngineError::DuplicateLeg {
                row,
                account: trade.account,
                ticker: trade.ticker.clone(),
                leg,
                existing,
            })?;

        debug!(
            row,
            account = %trade.account,
            ticker = %trade.ticker,
            %leg,
            %price,
            "Recorded leg"
        );
        self.rows += 1;
        Ok(())
    }

    /// All positions, ordered by account then ticker.
    #[must_use]
    pub fn positions(&self) -> &PositionMap {
        &self.positions
    }

    /// Position of one account on one instrument.
    #[must_use]
    pub fn position(&self, account: AccountId, ticker: &str) -> Option<&AccountPosition> {
        self.positions.get(&account)?.get(ticker)
    }

    /// Iterates over every (account, ticker, position) in key order.
    pub fn iter(&self) -> impl Iterator<Item = (AccountId, &Ticker, &AccountPosition)> {
        self.positions.iter().flat_map(|(account, tickers)| {
            tickers
                .iter()
                .map(move |(ticker, position)| (*account, ticker, position))
        })
    }

    /// Number of distinct (account, ticker) pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.positions.values().map(BTreeMap::len).sum()
    }

    /// Distinct instruments traded by any account.
    #[must_use]
    pub fn tickers(&self) -> BTreeSet<&Ticker> {
        self.positions.values().flat_map(BTreeMap::keys).collect()
    }

    /// Number of trade rows accumulated.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows
    }
}
