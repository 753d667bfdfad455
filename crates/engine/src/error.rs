//! Errors that abort a report run.

use shortfall_domain::RecordError;
use shortfall_domain::enums::Leg;
use shortfall_domain::value_objects::{AccountId, Price, Ticker};
use thiserror::Error;

/// Everything that stops the engine from producing output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A row could not be converted into a record.
    #[error("malformed record: {0}")]
    MalformedRecord(#[from] RecordError),

    /// Several rows could not be converted; only raised when errors are
    /// collected rather than failing on the first one.
    #[error("{} malformed records", .0.len())]
    MalformedRecords(Vec<RecordError>),

    /// An account has only one leg for an instrument.
    #[error("account {account} has no {missing} leg for {ticker}")]
    InsufficientData {
        account: AccountId,
        ticker: Ticker,
        missing: Leg,
    },

    /// An account recorded the same leg twice for an instrument.
    ///
    /// A position holds exactly one buy and one sell, so repeated executions
    /// of the same side for a pair are rejected rather than appended.
    #[error("row {row}: account {account} already has a {leg} leg for {ticker} at {existing}")]
    DuplicateLeg {
        row: usize,
        account: AccountId,
        ticker: Ticker,
        leg: Leg,
        existing: Price,
    },

    /// A traded instrument has no candle data and candles are required.
    #[error("no candle data for traded instrument {0}")]
    MissingCandles(Ticker),

    /// A gain or shortfall for the pair does not fit a `Decimal`.
    #[error("arithmetic overflow computing gains for account {account} on {ticker}")]
    ArithmeticOverflow { account: AccountId, ticker: Ticker },
}

impl EngineError {
    /// Every record error carried by this error, in row order.
    #[must_use]
    pub fn record_errors(&self) -> &[RecordError] {
        match self {
            Self::MalformedRecord(err) => std::slice::from_ref(err),
            Self::MalformedRecords(errs) => errs,
            _ => &[],
        }
    }
}

/// Convenience alias for engine results.
pub type EngineResult<T> = Result<T, EngineError>;
