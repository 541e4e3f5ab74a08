use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};

use crate::config::Config;
use crate::model::FormState;
use crate::storage::{self, load_choice_lists};

use super::action::Action;
use super::error::AppError;
use super::screens::{
    EntryState, ExportState, HelpState, draw_entry, draw_export, draw_help,
};
use super::widgets::{draw_notice, draw_status_bar};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The record entry form.
    Entry,
    /// Export the log to a text file.
    Export,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    entry: EntryState,
    export: ExportState,
    help: HelpState,
    notices: Vec<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` on the [`Screen::Entry`] screen.
    ///
    /// Non-empty `notices` are shown in a blocking box until a key is pressed.
    pub fn new(form: FormState, notices: Vec<String>) -> Self {
        Self {
            screen: Screen::Entry,
            entry: EntryState::new(form),
            export: ExportState::new(),
            help: HelpState::new(),
            notices,
            should_quit: false,
        }
    }

    /// Loads every configured choice source and builds the app around them.
    ///
    /// Sources that fail to load become empty lists and are reported as notices.
    pub fn from_config(config: &Config) -> Self {
        let report = load_choice_lists(&config.lists_dir, &config.sources);
        let notices = report.failures.iter().map(ToString::to_string).collect();
        let form = FormState::new(report.lists, config.default_login.clone());
        Self::new(form, notices)
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the status bar, the current screen and any pending notice.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let [status_area, content_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        draw_status_bar(&self.entry.status_context(), frame, status_area);

        match self.screen {
            Screen::Entry => draw_entry(&self.entry, frame, content_area),
            Screen::Export => draw_export(&self.export, frame, content_area),
            Screen::Help => draw_help(&self.help, frame, content_area),
        }

        draw_notice(&self.notices, frame, area);
    }

    /// Handles a key event: notices and global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if !self.notices.is_empty() {
            self.notices.clear();
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.help.set_origin(self.screen);
                self.help.reset();
                self.screen = Screen::Help;
            }
            return;
        }

        let action = match self.screen {
            Screen::Entry => self.entry.handle_key(key),
            Screen::Export => self.export.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(Screen::Export) => {
                let count = self.entry.status_context().record_count;
                self.export.prepare(count, Local::now().naive_local());
                self.screen = Screen::Export;
            }
            Action::Navigate(screen) => self.screen = screen,
            Action::ExportLedger => self.export_ledger(),
            Action::Quit => self.should_quit = true,
        }
    }

    fn export_ledger(&mut self) {
        let Some(path) = self.export.path().map(|p| p.to_path_buf()) else {
            return;
        };
        match storage::export_ledger(&self.entry.log_text(), &path) {
            Ok(()) => {
                tracing::info!(
                    path = %path.display(),
                    records = self.export.record_count(),
                    "ledger exported"
                );
                self.export.set_success();
            }
            Err(e) => {
                tracing::error!(error = %e, "ledger export failed");
                self.export.set_error(e.to_string());
            }
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the record entry screen state.
    pub fn entry(&self) -> &EntryState {
        &self.entry
    }

    /// Returns the pending notices.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }
}
