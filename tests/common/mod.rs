// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::sync::Arc;

use budget_tracker::domain::{FixedClock, Ledger};
use chrono::NaiveDate;

/// Helper to parse a date string into NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Helper to create an empty ledger whose clock is pinned to `date_str`
pub fn ledger_on(date_str: &str) -> Ledger {
    Ledger::with_clock(Arc::new(FixedClock::on(parse_date(date_str))))
}

/// One exported CSV row, as read back from disk
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedRow {
    pub id: u64,
    pub amount: String,
    pub category: String,
    pub date: String,
    pub kind: String,
}

/// Read an exported CSV file, returning its header and rows
pub fn read_export(path: &std::path::Path) -> (Vec<String>, Vec<ExportedRow>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let header = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();

    let rows = reader
        .records()
        .map(|record| {
            let record = record.unwrap();
            ExportedRow {
                id: record[0].parse().unwrap(),
                amount: record[1].to_string(),
                category: record[2].to_string(),
                date: record[3].to_string(),
                kind: record[4].to_string(),
            }
        })
        .collect();

    (header, rows)
}
