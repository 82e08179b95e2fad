// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::{LogKind, schema_for};
use crate::store::{LogStore, header_for};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every row of `kind`, reconciled, in append order.
    ///
    /// `file` must be an absolute path.
    pub fn export(
        store: &LogStore,
        kind: LogKind,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let rows = store.load(kind)?;
        if rows.is_empty() {
            warning(format!("No {} rows to export.", kind));
            return Ok(());
        }

        match format {
            ExportFormat::Csv => {
                let header = header_for(schema_for(kind), &rows);
                export_csv(&rows, &header, path)?
            }
            ExportFormat::Json => export_json(&rows, path)?,
        }

        crate::store::ttlog_quiet(
            store.data_dir(),
            "export",
            &path.to_string_lossy(),
            &format!("{} rows exported as {}", kind, format.as_str()),
        );
        Ok(())
    }
}
