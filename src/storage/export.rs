use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use super::error::StorageError;

/// Writes the ledger text to `path`, ending it with a newline.
pub fn export_ledger(ledger: &str, path: &Path) -> Result<(), StorageError> {
    let mut content = ledger.to_string();
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    fs::write(path, content).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns the default export path for a ledger exported at `now`.
///
/// Format: `~/migcon-{YYYYMMDD}-{HHMMSS}.txt`.
///
/// Returns `StorageError::NoHomeDir` if the home directory cannot be
/// determined.
pub fn default_export_path(now: NaiveDateTime) -> Result<PathBuf, StorageError> {
    let home = dirs::home_dir().ok_or(StorageError::NoHomeDir)?;
    Ok(home.join(export_file_name(now)))
}

fn export_file_name(now: NaiveDateTime) -> String {
    format!("migcon-{}.txt", now.format("%Y%m%d-%H%M%S"))
}
