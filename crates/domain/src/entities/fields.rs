//! Positional column access shared by the record parsers.

use crate::error::RecordError;
use crate::value_objects::{AccountId, Price};

pub(crate) fn text<'a, S: AsRef<str>>(
    fields: &'a [S],
    row: usize,
    column: usize,
    name: &'static str,
) -> Result<&'a str, RecordError> {
    fields
        .get(column)
        .map(|value| value.as_ref())
        .ok_or(RecordError::MissingField { row, column, name })
}

pub(crate) fn account<S: AsRef<str>>(
    fields: &[S],
    row: usize,
    column: usize,
    name: &'static str,
) -> Result<AccountId, RecordError> {
    let value = text(fields, row, column, name)?;
    AccountId::parse(value).ok_or_else(|| RecordError::InvalidInteger {
        row,
        column,
        name,
        value: value.to_string(),
    })
}

pub(crate) fn price<S: AsRef<str>>(
    fields: &[S],
    row: usize,
    column: usize,
    name: &'static str,
) -> Result<Price, RecordError> {
    let value = text(fields, row, column, name)?;
    Price::parse(value).ok_or_else(|| RecordError::InvalidDecimal {
        row,
        column,
        name,
        value: value.to_string(),
    })
}
