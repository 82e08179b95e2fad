use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{CellValue, LogKind, LogRow, schema_for};
use crate::store::header_for;
use crate::ui::messages::{header, info};
use crate::utils::date::{self, format_date};
use crate::utils::formatting::number_cell;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

use super::open_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { kind, period } = cmd {
        let kind = LogKind::from_code(kind)?;
        let bounds = resolve_period(period)?;

        let store = open_store(cfg);
        let rows = store.load(kind)?;

        // keep the original position: it is the row number used by edit/del
        let selected: Vec<(usize, &LogRow)> = rows
            .iter()
            .enumerate()
            .filter(|(_, r)| in_period(r, bounds))
            .collect();

        if selected.is_empty() {
            info(format!("No {} rows{}.", kind, describe_period(period)));
            return Ok(());
        }

        header(format!("{} log{}", kind, describe_period(period)));
        print_table(kind, &rows, &selected, cfg);
    }
    Ok(())
}

fn resolve_period(period: &Option<String>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match period {
        None => Ok(None),
        Some(p) if p.eq_ignore_ascii_case("all") => Ok(None),
        Some(p) => date::period_bounds(p)
            .map(Some)
            .map_err(AppError::InvalidDate),
    }
}

fn describe_period(period: &Option<String>) -> String {
    match period {
        Some(p) if !p.eq_ignore_ascii_case("all") => format!(" for {}", p),
        _ => String::new(),
    }
}

/// Rows without a date never match a period filter.
fn in_period(row: &LogRow, bounds: Option<(NaiveDate, NaiveDate)>) -> bool {
    match bounds {
        None => true,
        Some((start, end)) => row
            .date(crate::models::schema::DATE)
            .is_some_and(|d| d >= start && d <= end),
    }
}

fn print_table(kind: LogKind, all: &[LogRow], selected: &[(usize, &LogRow)], cfg: &Config) {
    let schema = schema_for(kind);
    let names = header_for(schema, all);

    let mut columns = vec![Column::right("#")];
    for name in &names {
        let numeric = matches!(
            schema.column(name).map(|c| c.kind),
            Some(crate::models::ColumnKind::Numeric)
        );
        columns.push(if numeric {
            Column::right(name)
        } else {
            Column::left(name)
        });
    }

    let mut table = Table::new(columns).with_separator(&cfg.separator_char);
    for (idx, row) in selected {
        let mut cells = vec![(idx + 1).to_string()];
        for name in &names {
            cells.push(match row.get(name) {
                Some(CellValue::Numeric(v)) => number_cell(*v),
                Some(CellValue::Text(s)) => s.clone(),
                Some(CellValue::Date(Some(d))) => format_date(d),
                Some(CellValue::Date(None)) | None => "--".to_string(),
            });
        }
        table.add_row(cells);
    }

    print!("{}", table.render());
    println!("{} of {} rows", selected.len(), all.len());
}
