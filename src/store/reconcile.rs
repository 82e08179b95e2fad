//! Schema reconciliation: turn raw parsed cells into rows that expose every
//! column of the current schema.
//!
//! The migration is additive and never destructive:
//!  - a declared column missing from the file is filled with its sentinel
//!    (or seeded from a legacy alias when the file has one);
//!  - columns no longer declared are kept as text and written back;
//!  - a cell that cannot be read as its declared type becomes the sentinel.
//!
//! This module does no I/O so the rules can be tested on plain tables.

use crate::models::row::typed;
use crate::models::{CellValue, LogRow, LogSchema};

/// Raw table as read from a log file, before typing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub header: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(header: Vec<String>, records: Vec<Vec<String>>) -> Self {
        Self { header, records }
    }
}

/// What reconciliation had to repair. Only used for diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconcileReport {
    /// Declared columns absent from the file header.
    pub filled_columns: Vec<&'static str>,
    /// Declared columns seeded from a legacy header: `(legacy, current)`.
    pub aliased_columns: Vec<(&'static str, &'static str)>,
    /// Header columns the schema does not declare.
    pub extra_columns: Vec<String>,
    /// Non-blank cells that could not be coerced (dates included).
    pub bad_cells: usize,
}

impl ReconcileReport {
    pub fn is_clean(&self) -> bool {
        self.filled_columns.is_empty() && self.aliased_columns.is_empty() && self.bad_cells == 0
    }
}

/// Normalize `raw` against `schema`. Total: never fails, never drops a row.
pub fn reconcile(schema: &LogSchema, raw: &RawTable) -> (Vec<LogRow>, ReconcileReport) {
    let header = normalized_header(&raw.header);
    let mut report = ReconcileReport::default();

    for name in &header {
        if schema.column(name).is_none() && !report.extra_columns.contains(name) {
            report.extra_columns.push(name.clone());
        }
    }

    // Resolve, per declared column absent from the header, where its value comes from.
    let mut seeds: Vec<(&'static str, Option<usize>)> = Vec::new();
    for column in schema.columns {
        if header.iter().any(|h| h == column.name) {
            continue;
        }
        let alias = schema
            .aliases_of(column.name)
            .find_map(|legacy| header.iter().position(|h| h == legacy).map(|i| (legacy, i)));
        match alias {
            Some((legacy, idx)) => {
                report.aliased_columns.push((legacy, column.name));
                seeds.push((column.name, Some(idx)));
            }
            None => {
                report.filled_columns.push(column.name);
                seeds.push((column.name, None));
            }
        }
    }

    let mut rows = Vec::with_capacity(raw.records.len());
    for record in &raw.records {
        let mut row = LogRow::new();

        for (i, cell) in record.iter().enumerate() {
            let name = match header.get(i) {
                Some(n) => n.clone(),
                // more cells than header names: keep them under a positional name
                None => format!("_col{}", i + 1),
            };
            let kind = schema.column(&name).map(|c| c.kind);
            let (value, bad) = typed(cell, kind);
            if bad {
                report.bad_cells += 1;
            }
            row.set(&name, value);
        }

        for (name, source) in &seeds {
            let kind = schema.column(name).map(|c| c.kind);
            let value = match source.and_then(|i| record.get(i)) {
                Some(cell) => {
                    let (value, bad) = typed(cell, kind);
                    if bad {
                        report.bad_cells += 1;
                    }
                    value
                }
                None => kind.map(CellValue::empty).unwrap_or(CellValue::Text(String::new())),
            };
            row.set(name, value);
        }

        // short records: declared columns present in the header but not in this line
        row.fill_missing(schema);
        rows.push(row);
    }

    (rows, report)
}

/// Trim header names and drop a UTF-8 byte-order mark left by spreadsheets.
fn normalized_header(header: &[String]) -> Vec<String> {
    header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let h = if i == 0 {
                h.trim_start_matches('\u{feff}')
            } else {
                h.as_str()
            };
            h.trim().to_string()
        })
        .collect()
}
