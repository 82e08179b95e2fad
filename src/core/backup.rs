use crate::errors::AppResult;
use crate::models::LogKind;
use crate::store::journal::JOURNAL_FILE;
use crate::store::{LogStore, ttlog_quiet};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the log files next to `dest_file`, or pack them into a zip
    /// archive at `dest_file` (extension forced to `.zip`) when `compress`.
    ///
    /// Without compression `dest_file` is used as a directory.
    /// Returns the path that was written.
    pub fn backup(store: &LogStore, dest_file: &str, compress: bool) -> AppResult<PathBuf> {
        let sources = Self::sources(store);

        if sources.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("No log files found in {}", store.data_dir().display()),
            )
            .into());
        }

        let dest = Path::new(dest_file);

        let final_path = if compress {
            let zip_path = dest.with_extension("zip");
            if let Some(parent) = zip_path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            if zip_path.exists() {
                warning(format!("Overwriting existing archive {}", zip_path.display()));
            }
            compress_backup(&sources, &zip_path)?;
            zip_path
        } else {
            fs::create_dir_all(dest)?;
            for src in &sources {
                if let Some(name) = src.file_name() {
                    fs::copy(src, dest.join(name))?;
                }
            }
            dest.to_path_buf()
        };

        success(format!("Backup created: {}", final_path.display()));

        ttlog_quiet(
            store.data_dir(),
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }

    /// Existing files among the two logs and the journal.
    fn sources(store: &LogStore) -> Vec<PathBuf> {
        LogKind::ALL
            .iter()
            .map(|k| store.path_for(*k))
            .chain(std::iter::once(store.data_dir().join(JOURNAL_FILE)))
            .filter(|p| p.exists())
            .collect()
    }
}

/// Write every source into a deflated zip archive.
fn compress_backup(sources: &[PathBuf], zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for src in sources {
        let Some(name) = src.file_name() else {
            continue;
        };
        zip.start_file(name.to_string_lossy(), options)
            .map_err(io::Error::other)?;
        let mut f = fs::File::open(src)?;
        io::copy(&mut f, &mut zip)?;
    }

    zip.finish().map_err(io::Error::other)?;
    info(format!("📦 Compressed: {}", zip_path.display()));
    Ok(())
}
