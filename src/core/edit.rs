use crate::errors::{AppError, AppResult};
use crate::models::refill::recompute_total_in_row;
use crate::models::schema::{MODE, TOTAL_COST};
use crate::models::value::parse_number;
use crate::models::{CellValue, ColumnKind, DrivingMode, LogKind, LogRow, schema_for};
use crate::store::{LogStore, ttlog_quiet};
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_date_permissive;

/// A parsed `Column=value` assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: CellValue,
}

/// Parse `Column=value` for `kind`. Column names are matched case-insensitively
/// against the schema; values must be valid for the column type.
pub fn parse_assignment(kind: LogKind, raw: &str) -> AppResult<Assignment> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| AppError::InvalidField(format!("expected COLUMN=VALUE, got '{}'", raw)))?;

    let schema = schema_for(kind);
    let column = schema
        .columns
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| {
            AppError::InvalidField(format!(
                "'{}' is not a {} column (use one of: {})",
                name.trim(),
                kind,
                schema.names().collect::<Vec<_>>().join(", ")
            ))
        })?;

    if column.name == TOTAL_COST {
        return Err(AppError::InvalidField(
            "TotalCost is computed from PricePerUnit and Quantity".into(),
        ));
    }

    let value = match column.kind {
        ColumnKind::Numeric => CellValue::Numeric(
            parse_number(value).ok_or_else(|| AppError::InvalidNumber(value.to_string()))?,
        ),
        ColumnKind::Date => CellValue::Date(Some(
            parse_date_permissive(value).ok_or_else(|| AppError::InvalidDate(value.to_string()))?,
        )),
        ColumnKind::Text if column.name == MODE => {
            let (mode, known) = DrivingMode::normalize(value);
            if !known {
                warning(format!("Unknown driving mode '{}' stored as free text.", mode));
            }
            CellValue::Text(mode)
        }
        ColumnKind::Text => CellValue::Text(value.to_string()),
    };

    Ok(Assignment {
        column: column.name.to_string(),
        value,
    })
}

pub struct EditLogic;

impl EditLogic {
    /// Apply assignments to row number `row_no` (1-based, as listed) and
    /// rewrite the whole log. Refill totals are recomputed.
    pub fn apply(
        store: &LogStore,
        kind: LogKind,
        row_no: usize,
        assignments: &[Assignment],
    ) -> AppResult<LogRow> {
        let mut rows = store.load(kind)?;
        let index = row_no.checked_sub(1).ok_or(AppError::InvalidRow(row_no))?;
        let row = rows.get_mut(index).ok_or(AppError::InvalidRow(row_no))?;

        for a in assignments {
            row.set(&a.column, a.value.clone());
        }
        if kind == LogKind::Refill {
            recompute_total_in_row(row);
        }
        let updated = row.clone();

        store.replace_all(&rows, kind)?;

        let changed: Vec<&str> = assignments.iter().map(|a| a.column.as_str()).collect();
        success(format!("{} row #{} updated ({}).", kind, row_no, changed.join(", ")));
        ttlog_quiet(
            store.data_dir(),
            "edit",
            &format!("{} #{}", kind, row_no),
            &format!("changed {}", changed.join(", ")),
        );
        Ok(updated)
    }
}
