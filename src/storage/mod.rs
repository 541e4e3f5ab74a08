//! Choice source loading and ledger export.
//!
//! Choice sources are plain UTF-8 text files with one entry per line. The
//! ledger is written out verbatim as the newline-separated record lines.

mod choices;
mod error;
mod export;

pub use choices::{LoadFailure, LoadReport, load_choice_lists, load_choices, parse_choices};
pub use error::StorageError;
pub use export::{default_export_path, export_ledger};
