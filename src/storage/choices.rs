use std::fmt;
use std::fs;
use std::path::Path;

use super::error::StorageError;
use crate::model::ChoiceList;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Splits raw file content into choice entries.
///
/// A leading UTF-8 byte-order marker is dropped, trailing `\r` is removed from
/// every line, and empty lines are skipped. Invalid UTF-8 is replaced with
/// U+FFFD rather than rejected.
pub fn parse_choices(bytes: &[u8]) -> Vec<String> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8_lossy(bytes)
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Reads a choice source file.
pub fn load_choices(path: &Path) -> Result<Vec<String>, StorageError> {
    let bytes = fs::read(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_choices(&bytes))
}

/// A choice source that could not be loaded.
#[derive(Debug)]
pub struct LoadFailure {
    /// The source name as configured (e.g. `role.txt`).
    pub source_name: String,
    /// Why loading failed.
    pub error: StorageError,
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source_name, self.error)
    }
}

/// Result of loading every configured choice source.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// One list per source, in configured order. Failed sources yield an empty list.
    pub lists: Vec<ChoiceList>,
    /// Sources that could not be loaded, in configured order.
    pub failures: Vec<LoadFailure>,
}

/// Loads every source in `sources` from `dir`.
///
/// A missing or unreadable source never aborts loading: it is recorded in
/// [`LoadReport::failures`] and its list is left empty.
pub fn load_choice_lists<S: AsRef<str>>(dir: &Path, sources: &[S]) -> LoadReport {
    let mut report = LoadReport::default();
    for source in sources {
        let name = source.as_ref();
        let path = dir.join(name);
        let items = match load_choices(&path) {
            Ok(items) => {
                tracing::debug!(source = name, entries = items.len(), "loaded choice list");
                items
            }
            Err(error) => {
                tracing::warn!(source = name, %error, "choice list unavailable, leaving it empty");
                report.failures.push(LoadFailure {
                    source_name: name.to_string(),
                    error,
                });
                Vec::new()
            }
        };
        report.lists.push(ChoiceList::new(name, items));
    }
    report
}
