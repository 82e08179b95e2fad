use super::schema::{ColumnKind, LogSchema};
use super::value::CellValue;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// One row of a log: column name → typed value.
///
/// Rows loaded from disk expose every column of the current schema, plus any
/// legacy columns the file carried (held as text).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LogRow {
    values: BTreeMap<String, CellValue>,
}

impl LogRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, name: &str, value: CellValue) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: CellValue) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<CellValue> {
        self.values.remove(name)
    }

    /// Numeric value of `name`, `0.0` if absent or not numeric.
    pub fn numeric(&self, name: &str) -> f64 {
        self.get(name).and_then(CellValue::as_f64).unwrap_or(0.0)
    }

    /// Text value of `name`, `""` if absent or not text.
    pub fn text(&self, name: &str) -> &str {
        self.get(name).and_then(CellValue::as_text).unwrap_or("")
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        self.get(name).and_then(CellValue::as_date)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Columns present in the row but not declared by `schema`.
    pub fn extra_columns<'a>(&'a self, schema: &'a LogSchema) -> impl Iterator<Item = &'a str> {
        self.names().filter(move |n| schema.column(n).is_none())
    }

    /// Make sure every declared column is present, using sentinels for gaps.
    /// Returns the names that had to be filled.
    pub fn fill_missing(&mut self, schema: &LogSchema) -> Vec<&'static str> {
        let mut filled = Vec::new();
        for column in schema.columns {
            if !self.values.contains_key(column.name) {
                self.values
                    .insert(column.name.to_string(), CellValue::empty(column.kind));
                filled.push(column.name);
            }
        }
        filled
    }

    /// Cells in `header` order, ready for the CSV writer.
    pub fn to_record(&self, header: &[String]) -> Vec<String> {
        header
            .iter()
            .map(|name| {
                self.values
                    .get(name)
                    .map(CellValue::to_persisted)
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Declared-column equality: extra columns are ignored.
    pub fn same_declared(&self, other: &LogRow, schema: &LogSchema) -> bool {
        schema.columns.iter().all(|c| {
            let empty = CellValue::empty(c.kind);
            let a = self.get(c.name).unwrap_or(&empty);
            let b = other.get(c.name).unwrap_or(&empty);
            a == b
        })
    }
}

/// Type a raw text value for a declared column kind (extras stay text).
pub(crate) fn typed(raw: &str, kind: Option<ColumnKind>) -> (CellValue, bool) {
    match kind {
        Some(k) => CellValue::coerce(raw, k),
        None => (CellValue::Text(raw.to_string()), false),
    }
}
