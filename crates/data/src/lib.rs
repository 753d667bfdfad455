//! Tabular input and output for the shortfall report.
//!
//! Turns files into rows of text fields and rows back into files. Nothing
//! here knows what the columns mean.

/// I/O errors.
pub mod error;
/// JSON output.
pub mod json;
/// CSV sources and sinks.
pub mod tabular;

pub use error::DataError;
pub use tabular::{CsvOptions, CsvSink, CsvSource, RowSink, RowSource, Rows};
