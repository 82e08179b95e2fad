//! Flat-file codec of the log store: one CSV file per log kind, UTF-8,
//! header line first.

use super::reconcile::RawTable;
use crate::errors::AppResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Read the whole file as raw strings. A missing file is an empty table.
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub(crate) fn read_raw(path: &Path) -> AppResult<RawTable> {
    if !path.exists() {
        return Ok(RawTable::default());
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let header = rdr
        .byte_headers()?
        .iter()
        .map(|f| String::from_utf8_lossy(f).into_owned())
        .collect();

    let mut records = Vec::new();
    for rec in rdr.byte_records() {
        let rec = rec?;
        // blank lines come back as a single empty field
        if rec.len() == 1 && rec.get(0).is_some_and(<[u8]>::is_empty) {
            continue;
        }
        records.push(
            rec.iter()
                .map(|f| String::from_utf8_lossy(f).into_owned())
                .collect(),
        );
    }

    Ok(RawTable::new(header, records))
}

/// Rewrite the whole file: write a sibling temp file, then rename over the
/// target. A crash mid-write leaves the previous file intact.
pub(crate) fn write_all(path: &Path, header: &[String], records: &[Vec<String>]) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_sibling(path);
    let written = write_records(&tmp, header, records);
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

fn write_records(path: &Path, header: &[String], records: &[Vec<String>]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(header)?;
    for rec in records {
        wtr.write_record(rec)?;
    }
    wtr.flush()?;
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "log".into());
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}
