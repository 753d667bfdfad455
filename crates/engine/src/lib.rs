//! Aggregation engine for the trade shortfall report.
//!
//! This crate provides:
//! - Trade accumulation per account and instrument
//! - Candle reduction into per-instrument price summaries
//! - The join producing one report row per traded pair
//! - A batch entry point running all three

/// Prelude module for convenient imports.
pub mod prelude;

/// Trade accumulation.
pub mod accumulator;
/// Engine settings.
pub mod config;
/// Engine errors.
pub mod error;
/// Trades joined with candle summaries.
pub mod joiner;
mod parsing;
/// Candle reduction.
pub mod reducer;
/// Batch report.
pub mod report;

pub use error::{EngineError, EngineResult};
