//! TUI screen implementations.

pub mod entry;
pub mod export;
pub mod help;

pub use entry::{EntryState, Focus, draw_entry};
pub use export::{ExportState, ExportStatus, draw_export};
pub use help::{HelpState, draw_help};
