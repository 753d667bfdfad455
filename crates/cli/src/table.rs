//! Terminal tables for report rows and candle summaries.

use prettytable::{Cell, Row, Table};
use shortfall_domain::value_objects::{OutputRow, PriceSummary, Ticker, format_money};

fn titles(names: &[&str]) -> Row {
    Row::new(names.iter().map(|name| Cell::new(name)).collect())
}

/// Table of report rows, one line per (account, ticker).
pub fn report_table(rows: &[OutputRow]) -> Table {
    let mut table = Table::new();
    table.set_titles(titles(&[
        "Account", "Ticker", "Realized", "Best", "Shortfall", "Max at", "Min at",
    ]));
    for row in rows {
        table.add_row(Row::new(row.fields().iter().map(|f| Cell::new(f)).collect()));
    }
    table
}

/// Table of per-ticker price summaries.
pub fn candle_table(summaries: &[(&Ticker, &PriceSummary)]) -> Table {
    let mut table = Table::new();
    table.set_titles(titles(&["Ticker", "Min", "Min at", "Max", "Max at", "Range"]));
    for (ticker, summary) in summaries {
        table.add_row(Row::new(vec![
            Cell::new(ticker.as_str()),
            Cell::new(&summary.min.price.to_string()),
            Cell::new(&summary.min.time),
            Cell::new(&summary.max.price.to_string()),
            Cell::new(&summary.max.time),
            Cell::new(&summary.range().map_or_else(|| "overflow".to_string(), format_money)),
        ]));
    }
    table
}
