//! Export confirmation screen: review path and record count, then write the ledger.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::storage::default_export_path;
use crate::tui::action::Action;
use crate::tui::app::Screen;

/// Current status of the export operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    /// Awaiting user confirmation.
    Ready,
    /// Export completed successfully.
    Success,
    /// Export failed with the given error message.
    Error(String),
}

/// State for the export confirmation screen.
#[derive(Debug, Clone)]
pub struct ExportState {
    path: Option<PathBuf>,
    status: ExportStatus,
    record_count: usize,
}

impl Default for ExportState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportState {
    /// Creates a new export state with empty defaults.
    pub fn new() -> Self {
        Self {
            path: None,
            status: ExportStatus::Ready,
            record_count: 0,
        }
    }

    /// Prepares the screen for exporting `record_count` lines at time `now`.
    ///
    /// Computes the default export path; if that fails the screen opens in
    /// the error state.
    pub fn prepare(&mut self, record_count: usize, now: NaiveDateTime) {
        self.record_count = record_count;
        match default_export_path(now) {
            Ok(path) => {
                self.path = Some(path);
                self.status = ExportStatus::Ready;
            }
            Err(e) => {
                self.path = None;
                self.status = ExportStatus::Error(e.to_string());
            }
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match self.status {
            ExportStatus::Ready => match key.code {
                KeyCode::Enter if self.path.is_some() => Action::ExportLedger,
                KeyCode::Esc | KeyCode::Char('q') => Action::Navigate(Screen::Entry),
                _ => Action::None,
            },
            ExportStatus::Success | ExportStatus::Error(_) => Action::Navigate(Screen::Entry),
        }
    }

    /// Marks the export as successful.
    pub fn set_success(&mut self) {
        self.status = ExportStatus::Success;
    }

    /// Marks the export as failed with the given error message.
    pub fn set_error(&mut self, msg: String) {
        self.status = ExportStatus::Error(msg);
    }

    /// Returns the export file path, if one could be determined.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Sets the export file path.
    pub fn set_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    /// Returns the current export status.
    pub fn status(&self) -> &ExportStatus {
        &self.status
    }

    /// Returns the number of record lines that will be exported.
    pub fn record_count(&self) -> usize {
        self.record_count
    }
}

/// Renders the export confirmation screen.
#[mutants::skip]
pub fn draw_export(state: &ExportState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Export Ledger ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [info_area, status_area, footer_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(inner);

    let path = state
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());
    let lines = vec![
        Line::from(Span::styled(
            format!("Records: {}", state.record_count()),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Path: {path}"),
            Style::default().fg(Color::Yellow),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), info_area);

    let (status_text, status_color) = match state.status() {
        ExportStatus::Ready => ("Press Enter to export.", Color::White),
        ExportStatus::Success => ("Export complete!", Color::Green),
        ExportStatus::Error(msg) => (msg.as_str(), Color::Red),
    };
    let status_line = Line::from(Span::styled(status_text, Style::default().fg(status_color)));
    frame.render_widget(
        Paragraph::new(vec![Line::from(""), status_line]),
        status_area,
    );

    let footer_text = match state.status() {
        ExportStatus::Ready => "Enter: export  Esc: back",
        ExportStatus::Success | ExportStatus::Error(_) => "Press any key to return",
    };
    let footer =
        Paragraph::new(Line::from(footer_text)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
