use crate::errors::{AppError, AppResult};
use crate::models::{LogKind, LogRow};
use crate::store::{LogStore, ttlog_quiet};
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove row number `row_no` (1-based) and rewrite the log.
    /// Later rows shift up by one.
    pub fn apply(store: &LogStore, kind: LogKind, row_no: usize) -> AppResult<LogRow> {
        let index = row_no.checked_sub(1).ok_or(AppError::InvalidRow(row_no))?;
        let removed = store.remove(kind, index)?;

        info(format!("Deleted {} row #{}", kind, row_no));
        ttlog_quiet(
            store.data_dir(),
            "del",
            &format!("{} #{}", kind, row_no),
            "row removed",
        );
        Ok(removed)
    }
}
