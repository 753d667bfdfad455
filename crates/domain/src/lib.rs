//! Domain types for the trade shortfall report.
//!
//! Records parsed from the trade and candle inputs, the per-instrument
//! price summary, the per-account position, and the report row.

pub mod entities;
pub mod enums;
pub mod error;
pub mod value_objects;

pub use error::{GainError, RecordError};
