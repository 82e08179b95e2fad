use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::Path;

pub const JOURNAL_FILE: &str = "journal.csv";

/// One line of the internal operations journal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append an entry to the journal inside `data_dir`.
pub fn ttlog(data_dir: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    std::fs::create_dir_all(data_dir)?;
    let path = data_dir.join(JOURNAL_FILE);
    let is_new = !path.exists() || std::fs::metadata(&path)?.len() == 0;

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(is_new)
        .from_writer(file);

    wtr.serialize(JournalEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    })?;
    wtr.flush()?;
    Ok(())
}

/// Journal write that never aborts the caller.
pub fn ttlog_quiet(data_dir: &Path, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(data_dir, operation, target, message) {
        tracing::warn!(error = %e, operation, "failed to write journal entry");
        crate::ui::messages::warning(format!("Failed to write internal log: {}", e));
    }
}

/// All entries, oldest first. Missing journal → empty list.
pub fn read_journal(data_dir: &Path) -> AppResult<Vec<JournalEntry>> {
    let path = data_dir.join(JOURNAL_FILE);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = csv::Reader::from_path(&path)?;
    let mut out = Vec::new();
    for entry in rdr.deserialize() {
        match entry {
            Ok(e) => out.push(e),
            Err(e) => tracing::debug!(error = %e, "skipping unreadable journal line"),
        }
    }
    Ok(out)
}
