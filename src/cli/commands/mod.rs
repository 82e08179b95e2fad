pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod scan;
pub mod stats;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::LogStore;
use crate::utils::date::{parse_date_permissive, today};
use chrono::NaiveDate;

/// Store rooted at the configured (or overridden) data directory.
pub(crate) fn open_store(cfg: &Config) -> LogStore {
    LogStore::new(cfg.data_path())
}

/// Optional CLI date: today when omitted, any common layout accepted.
pub(crate) fn resolve_date(date: &Option<String>) -> AppResult<NaiveDate> {
    match date {
        Some(d) => parse_date_permissive(d).ok_or_else(|| AppError::InvalidDate(d.to_string())),
        None => Ok(today()),
    }
}
