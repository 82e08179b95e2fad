//! Log store: one flat file per log kind, read whole and rewritten whole.
//!
//! Every mutation is load → modify → rewrite. Row identity is the position in
//! the loaded sequence. Two processes editing the same file concurrently are
//! not detected: the last rewrite wins and the other change is lost. A single
//! rewrite never leaves a half-written file behind (see `csv_file::write_all`).

mod csv_file;
pub mod journal;
pub mod reconcile;

use crate::errors::{AppError, AppResult};
use crate::models::{LogKind, LogRow, LogSchema, schema_for};
use reconcile::{ReconcileReport, reconcile};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub use journal::{read_journal, ttlog, ttlog_quiet};

#[derive(Debug, Clone)]
pub struct LogStore {
    data_dir: PathBuf,
}

impl LogStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, kind: LogKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }

    /// Load all rows of `kind` in append order, reconciled with the current schema.
    /// A missing file yields no rows.
    pub fn load(&self, kind: LogKind) -> AppResult<Vec<LogRow>> {
        let path = self.path_for(kind);
        let raw = csv_file::read_raw(&path)?;
        let (rows, report) = reconcile(schema_for(kind), &raw);
        log_report(kind, &report);
        Ok(rows)
    }

    /// Append `row` at the end of the log and rewrite the file.
    /// Duplicates are accepted as-is.
    pub fn append(&self, row: &LogRow, kind: LogKind) -> AppResult<()> {
        let mut rows = self.load(kind)?;
        let mut row = row.clone();
        row.fill_missing(schema_for(kind));
        rows.push(row);
        self.write(kind, &rows)?;
        tracing::info!(kind = %kind, rows = rows.len(), "row appended");
        Ok(())
    }

    /// Overwrite the whole log with exactly `rows`, in order.
    pub fn replace_all(&self, rows: &[LogRow], kind: LogKind) -> AppResult<()> {
        let schema = schema_for(kind);
        let rows: Vec<LogRow> = rows
            .iter()
            .map(|r| {
                let mut r = r.clone();
                r.fill_missing(schema);
                r
            })
            .collect();
        self.write(kind, &rows)?;
        tracing::info!(kind = %kind, rows = rows.len(), "log rewritten");
        Ok(())
    }

    /// Replace the row at `index` (0-based) and rewrite the log.
    pub fn update(&self, kind: LogKind, index: usize, row: LogRow) -> AppResult<()> {
        let mut rows = self.load(kind)?;
        let slot = rows.get_mut(index).ok_or(AppError::InvalidRow(index + 1))?;
        *slot = row;
        self.replace_all(&rows, kind)
    }

    /// Remove the row at `index` (0-based) and rewrite the log.
    /// Returns the removed row.
    pub fn remove(&self, kind: LogKind, index: usize) -> AppResult<LogRow> {
        let mut rows = self.load(kind)?;
        if index >= rows.len() {
            return Err(AppError::InvalidRow(index + 1));
        }
        let removed = rows.remove(index);
        self.replace_all(&rows, kind)?;
        Ok(removed)
    }

    /// Create the file with only its header if it does not exist yet.
    pub fn ensure_file(&self, kind: LogKind) -> AppResult<bool> {
        let path = self.path_for(kind);
        if path.exists() {
            return Ok(false);
        }
        self.write(kind, &[])?;
        Ok(true)
    }

    fn write(&self, kind: LogKind, rows: &[LogRow]) -> AppResult<()> {
        let schema = schema_for(kind);
        let header = header_for(schema, rows);
        let records: Vec<Vec<String>> = rows.iter().map(|r| r.to_record(&header)).collect();
        csv_file::write_all(&self.path_for(kind), &header, &records)
    }
}

/// Declared columns in schema order, then every extra column in sorted order.
pub fn header_for(schema: &LogSchema, rows: &[LogRow]) -> Vec<String> {
    let extras: BTreeSet<&str> = rows.iter().flat_map(|r| r.extra_columns(schema)).collect();
    schema
        .names()
        .map(str::to_string)
        .chain(extras.into_iter().map(str::to_string))
        .collect()
}

fn log_report(kind: LogKind, report: &ReconcileReport) {
    if report.is_clean() && report.extra_columns.is_empty() {
        return;
    }
    for name in &report.filled_columns {
        tracing::debug!(kind = %kind, column = name, "missing column filled with sentinel");
    }
    for (legacy, current) in &report.aliased_columns {
        tracing::debug!(kind = %kind, legacy, current, "column seeded from legacy header");
    }
    if !report.extra_columns.is_empty() {
        tracing::debug!(kind = %kind, extras = ?report.extra_columns, "undeclared columns kept");
    }
    if report.bad_cells > 0 {
        tracing::debug!(kind = %kind, cells = report.bad_cells, "unreadable cells replaced with sentinels");
    }
}
