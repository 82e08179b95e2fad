use super::schema::ColumnKind;
use crate::utils::date::{format_date, parse_date_permissive};
use chrono::NaiveDate;
use serde::Serialize;

/// A single typed cell of a log row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Numeric(f64),
    Text(String),
    Date(Option<NaiveDate>),
}

impl CellValue {
    /// Sentinel used when a value is absent or unreadable:
    /// `0.0` for numbers, `""` for text, unset for dates.
    pub fn empty(kind: ColumnKind) -> Self {
        match kind {
            ColumnKind::Numeric => CellValue::Numeric(0.0),
            ColumnKind::Text => CellValue::Text(String::new()),
            ColumnKind::Date => CellValue::Date(None),
        }
    }

    /// Coerce a raw persisted string into `kind`. Never fails: unreadable
    /// input yields the sentinel, and the second field reports whether that
    /// happened for a non-blank input.
    pub fn coerce(raw: &str, kind: ColumnKind) -> (Self, bool) {
        let trimmed = raw.trim();
        match kind {
            ColumnKind::Text => (CellValue::Text(raw.to_string()), false),
            ColumnKind::Numeric => match parse_number(trimmed) {
                Some(v) => (CellValue::Numeric(v), false),
                None => (CellValue::Numeric(0.0), !trimmed.is_empty()),
            },
            ColumnKind::Date => match parse_date_permissive(trimmed) {
                Some(d) => (CellValue::Date(Some(d)), false),
                None => (CellValue::Date(None), !trimmed.is_empty()),
            },
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            CellValue::Numeric(_) => ColumnKind::Numeric,
            CellValue::Text(_) => ColumnKind::Text,
            CellValue::Date(_) => ColumnKind::Date,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Numeric(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(d) => *d,
            _ => None,
        }
    }

    /// Textual form written to the log file.
    pub fn to_persisted(&self) -> String {
        match self {
            CellValue::Numeric(v) => format_number(*v),
            CellValue::Text(s) => s.clone(),
            CellValue::Date(Some(d)) => format_date(d),
            CellValue::Date(None) => String::new(),
        }
    }
}

/// Parse a decimal number as written by hand or by older versions.
///
/// Commas followed by groups of exactly three digits are thousands
/// separators (`12,345`, `1,234.5`). Otherwise a single comma without a dot
/// is a decimal separator (`14,2`).
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let normalized = if !s.contains(',') {
        s.to_string()
    } else if is_digit_grouped(s) {
        s.replace(',', "")
    } else if !s.contains('.') && s.matches(',').count() == 1 {
        s.replacen(',', ".", 1)
    } else {
        return None;
    };

    let parsed = normalized.parse::<f64>().ok()?;
    parsed.is_finite().then_some(parsed)
}

fn is_digit_grouped(s: &str) -> bool {
    let int_part = s.split('.').next().unwrap_or(s);
    let int_part = int_part.trim_start_matches(['-', '+']);
    let all_digits = |g: &str| g.chars().all(|c| c.is_ascii_digit());

    let mut groups = int_part.split(',');
    let lead = groups.next().unwrap_or("");
    !lead.is_empty()
        && lead.len() <= 3
        && all_digits(lead)
        && groups.all(|g| g.len() == 3 && all_digits(g))
}

/// Shortest decimal form: `42` rather than `42.0`, `13.5` stays `13.5`.
pub fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
