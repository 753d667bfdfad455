//! CSV-backed row sources and sinks.

mod options;
mod sink;
mod source;

pub use options::CsvOptions;
pub use sink::{CsvSink, RowSink};
pub use source::{CsvSource, RowSource, read_rows};

/// Rows of text fields, in file order.
pub type Rows = Vec<Vec<String>>;
