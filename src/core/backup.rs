//! Timestamped backups of the export directory

use chrono::Local;
use std::fmt::Write;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

use crate::core::config::Config;
use crate::core::error::{RecordsError, Result};

/// Prefix of every backup directory name
pub const BACKUP_PREFIX: &str = "backup_";

/// Copy the export directory tree into `backup_dir/backup_<timestamp>`
///
/// Files keep their path relative to the export directory; an existing file at
/// the destination is overwritten.
///
/// # Errors
/// Returns `Io` if the export directory does not exist or any copy fails, and
/// `Validation` if the configured timestamp pattern is not valid `strftime`.
pub fn create_backup(config: &Config) -> Result<PathBuf> {
    let export_dir = config.export_dir();
    if !export_dir.is_dir() {
        return Err(RecordsError::io(
            &export_dir,
            io::Error::new(io::ErrorKind::NotFound, "export folder not found"),
        ));
    }

    let pattern = config.timestamp_format();
    let mut stamp = String::new();
    write!(stamp, "{}", Local::now().format(pattern)).map_err(|_| {
        RecordsError::validation(
            "timestamp format",
            format!("'{pattern}' is not a valid strftime pattern"),
        )
    })?;
    let target = config.backup_dir().join(format!("{BACKUP_PREFIX}{stamp}"));
    fs::create_dir_all(&target).map_err(|e| RecordsError::io(&target, e))?;

    copy_tree(&export_dir, &target)?;
    info!("Backed up {} to {}", export_dir.display(), target.display());
    Ok(target)
}

fn copy_tree(source: &Path, target: &Path) -> Result<()> {
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| walk_error(source, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(source)
            .unwrap_or_else(|_| entry.path());
        let dest = target.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| RecordsError::io(parent, e))?;
        }
        fs::copy(entry.path(), &dest).map_err(|e| RecordsError::io(&dest, e))?;
    }
    Ok(())
}

/// Total size in bytes of all regular files under `root`; 0 if it does not exist
///
/// # Errors
/// Returns `Io` if part of the tree cannot be read.
pub fn directory_size(root: &Path) -> Result<u64> {
    if !root.exists() {
        return Ok(0);
    }
    let mut total = 0;
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if entry.file_type().is_file() {
            let meta = entry.metadata().map_err(|e| walk_error(entry.path(), e))?;
            total += meta.len();
        }
    }
    Ok(total)
}

/// Names of the entries in the backup directory, sorted; empty if it does not exist yet
///
/// # Errors
/// Returns `Io` if the directory exists but cannot be listed.
pub fn list_backups(config: &Config) -> Result<Vec<String>> {
    let backup_dir = config.backup_dir();
    if !backup_dir.exists() {
        return Ok(Vec::new());
    }
    let entries = fs::read_dir(&backup_dir).map_err(|e| RecordsError::io(&backup_dir, e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| RecordsError::io(&backup_dir, e))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

fn walk_error(path: &Path, err: walkdir::Error) -> RecordsError {
    let path = err.path().unwrap_or(path).to_path_buf();
    RecordsError::io(path, io::Error::other(err))
}
