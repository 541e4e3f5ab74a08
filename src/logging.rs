//! File-based tracing setup.
//!
//! The terminal belongs to the UI, so events go to a log file under the
//! platform's local data directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the `EnvFilter` directives (e.g. `debug`).
pub const LOG_ENV: &str = "MIGCON_LOG";

const DEFAULT_FILTER: &str = "info";

/// Returns the log file path, if the platform has a local data directory.
pub fn log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("migcon").join("migcon.log"))
}

/// Installs the global subscriber writing to [`log_path`].
///
/// Returns the log file path, or `None` when logging could not be set up;
/// the application runs without logging in that case.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init() -> Option<PathBuf> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(path)
}
