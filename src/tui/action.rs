//! Actions returned by screen event handlers.

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// Form edits are applied by the screen itself; the `App` only handles
/// navigation, export and quitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Write the ledger to the prepared export path.
    ExportLedger,
    /// Quit the application.
    Quit,
}
