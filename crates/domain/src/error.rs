//! Record-level errors raised while converting raw rows into records.

use crate::enums::Leg;
use thiserror::Error;

/// A row that cannot be converted into a trade or candle record.
///
/// Any of these aborts the batch: a single malformed row invalidates the
/// whole run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The row has fewer columns than the record layout needs.
    #[error("row {row}: missing column {column} ({name})")]
    MissingField {
        /// 1-based row number in the source.
        row: usize,
        /// 0-based column index.
        column: usize,
        /// Column name in the record layout.
        name: &'static str,
    },
    /// The account id column is not integer text.
    #[error("row {row}: column {column} ({name}) is not an integer: {value:?}")]
    InvalidInteger {
        /// 1-based row number in the source.
        row: usize,
        /// 0-based column index.
        column: usize,
        /// Column name in the record layout.
        name: &'static str,
        /// The offending text.
        value: String,
    },
    /// A price column is not decimal text.
    #[error("row {row}: column {column} ({name}) is not a decimal: {value:?}")]
    InvalidDecimal {
        /// 1-based row number in the source.
        row: usize,
        /// 0-based column index.
        column: usize,
        /// Column name in the record layout.
        name: &'static str,
        /// The offending text.
        value: String,
    },
}

impl RecordError {
    /// Returns the 1-based row number the error was raised on.
    #[must_use]
    pub fn row(&self) -> usize {
        match self {
            Self::MissingField { row, .. }
            | Self::InvalidInteger { row, .. }
            | Self::InvalidDecimal { row, .. } => *row,
        }
    }
}

/// Why a realized gain could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GainError {
    /// The position lacks this leg.
    #[error("missing {0} leg")]
    MissingLeg(Leg),
    /// Sell minus buy does not fit a `Decimal`.
    #[error("arithmetic overflow")]
    Overflow,
}
