//! Row-to-record conversion under an [`ErrorPolicy`].

use crate::config::ErrorPolicy;
use crate::error::{EngineError, EngineResult};
use shortfall_domain::RecordError;
use tracing::warn;

/// Converts every row with `parse`, numbering rows from 1.
///
/// With [`ErrorPolicy::FailFast`] the first failure is returned as is. With
/// [`ErrorPolicy::Collect`] all rows are visited and the failures come back
/// together.
pub(crate) fn parse_rows<R, S, T, F>(
    rows: &[R],
    policy: ErrorPolicy,
    parse: F,
) -> EngineResult<Vec<T>>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
    F: Fn(usize, &[S]) -> Result<T, RecordError>,
{
    let mut records = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        match parse(index + 1, row.as_ref()) {
            Ok(record) => records.push(record),
            Err(err) if policy == ErrorPolicy::FailFast => return Err(err.into()),
            Err(err) => {
                warn!(row = err.row(), error = %err, "Malformed record");
                errors.push(err);
            }
        }
    }

    match errors.len() {
        0 => Ok(records),
        1 => Err(EngineError::MalformedRecord(errors.remove(0))),
        _ => Err(EngineError::MalformedRecords(errors)),
    }
}

/// Combines the failures of two independent parsing passes so that every
/// malformed row is reported. Non-record errors take precedence.
pub(crate) fn merge_failures(first: EngineError, second: EngineError) -> EngineError {
    if first.record_errors().is_empty() {
        return first;
    }
    if second.record_errors().is_empty() {
        return second;
    }
    let mut errors = first.record_errors().to_vec();
    errors.extend_from_slice(second.record_errors());
    EngineError::MalformedRecords(errors)
}
