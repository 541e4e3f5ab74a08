//! Record entry screen: ID, login, choice fields, extra fields and the log.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_textarea::{CursorMove, TextArea};

use crate::model::FormState;
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::{Cursor, Dropdown, StatusBarContext, draw_dropdown, draw_input};

/// Number of fields per row in the choice/extra grid.
pub const GRID_COLUMNS: usize = 4;

const ROW_HEIGHT: u16 = 3;

/// Which input currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    /// The numeric ID field.
    Id,
    /// The login base field.
    Login,
    /// The choice field at the given index.
    Choice(usize),
    /// The extra field at the given index.
    Extra(usize),
    /// The multi-line log area.
    Log,
}

/// State for the record entry screen.
#[derive(Debug, Clone)]
pub struct EntryState {
    form: FormState,
    focus: Focus,
    cursor: Cursor,
    dropdown: Dropdown,
    log_area: TextArea<'static>,
}

impl EntryState {
    /// Creates the screen around `form`, focusing the ID field.
    pub fn new(form: FormState) -> Self {
        let log_area = log_area_from(form.log());
        let cursor = Cursor::at_end(form.id_field());
        Self {
            form,
            focus: Focus::Id,
            cursor,
            dropdown: Dropdown::default(),
            log_area,
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers == KeyModifiers::ALT {
            match key.code {
                KeyCode::Char('a') => {
                    self.add_record();
                    return Action::None;
                }
                KeyCode::Char('c') => {
                    self.reset();
                    return Action::None;
                }
                KeyCode::Char('f') => {
                    self.add_extra_field();
                    return Action::None;
                }
                KeyCode::Char('x') => return Action::Navigate(Screen::Export),
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus_prev();
                Action::None
            }
            KeyCode::Esc if self.dropdown.is_open() => {
                self.dropdown.close();
                Action::None
            }
            KeyCode::Esc => Action::Quit,
            _ if self.focus == Focus::Log => {
                self.log_area.input(key);
                Action::None
            }
            KeyCode::Down => {
                let matches = self.focused_matches();
                self.dropdown.next(matches);
                Action::None
            }
            KeyCode::Up => {
                let matches = self.focused_matches();
                self.dropdown.prev(matches);
                Action::None
            }
            KeyCode::Enter => {
                if !self.accept_highlight() {
                    self.add_record();
                }
                Action::None
            }
            KeyCode::Left => {
                self.cursor.left();
                Action::None
            }
            KeyCode::Right => {
                let text = field_text(&self.form, self.focus).unwrap_or("");
                self.cursor.right(text);
                Action::None
            }
            KeyCode::Home => {
                self.cursor.home();
                Action::None
            }
            KeyCode::End => {
                let text = field_text(&self.form, self.focus).unwrap_or("");
                self.cursor.end(text);
                Action::None
            }
            KeyCode::Backspace => {
                self.edit(Cursor::backspace);
                Action::None
            }
            KeyCode::Delete => {
                self.edit(Cursor::delete);
                Action::None
            }
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.handle_char(ch);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Composes a record from the current fields and appends it to the log.
    ///
    /// Hand edits made in the log area are kept; the record goes after them.
    pub fn add_record(&mut self) -> String {
        self.sync_log();
        let line = self.form.add_record();
        tracing::debug!(%line, "record added");
        self.log_area = log_area_from(self.form.log());
        self.dropdown.close();
        self.cursor = Cursor::at_end(field_text(&self.form, self.focus).unwrap_or(""));
        line
    }

    /// Resets counters, log, ID and login fields.
    pub fn reset(&mut self) {
        self.form.reset();
        self.log_area = log_area_from("");
        self.dropdown.close();
        self.cursor = Cursor::at_end(field_text(&self.form, self.focus).unwrap_or(""));
        tracing::info!("form reset");
    }

    /// Adds an extra field and focuses it. Returns `false` at the cap.
    pub fn add_extra_field(&mut self) -> bool {
        if !self.form.add_extra_field() {
            tracing::debug!("extra field cap reached");
            return false;
        }
        let count = self.form.extras().len();
        tracing::info!(count, "extra field added");
        self.set_focus(Focus::Extra(count - 1));
        true
    }

    /// Returns the form state.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Returns the focused input.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the cursor within the focused single-line field.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns the drop-list state of the focused choice field.
    pub fn dropdown(&self) -> Dropdown {
        self.dropdown
    }

    /// Returns the log as currently shown, including unsaved hand edits.
    pub fn log_text(&self) -> String {
        self.log_area
            .lines()
            .join("\n")
            .trim_end_matches('\n')
            .to_string()
    }

    /// Returns the status bar data, counting records in the visible log.
    pub fn status_context(&self) -> StatusBarContext {
        let mut ctx = StatusBarContext::from_form(&self.form);
        ctx.record_count = self
            .log_area
            .lines()
            .iter()
            .filter(|l| !l.trim().is_empty())
            .count();
        ctx
    }

    /// Returns the choice entries matching the focused field's text.
    pub fn focused_entries(&self) -> Vec<&str> {
        match self.focus {
            Focus::Choice(i) => self
                .form
                .choices()
                .get(i)
                .map(|list| list.filtered())
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Returns every focusable input in Tab order.
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Id, Focus::Login];
        order.extend((0..self.form.choices().len()).map(Focus::Choice));
        order.extend((0..self.form.extras().len()).map(Focus::Extra));
        order.push(Focus::Log);
        order
    }

    /// Moves focus to `focus`, closing any open drop-list.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.dropdown.close();
        self.cursor = Cursor::at_end(field_text(&self.form, focus).unwrap_or(""));
    }

    /// Moves focus to the next input, wrapping around.
    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let pos = order.iter().position(|&f| f == self.focus).unwrap_or(0);
        self.set_focus(order[(pos + 1) % order.len()]);
    }

    /// Moves focus to the previous input, wrapping around.
    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let pos = order.iter().position(|&f| f == self.focus).unwrap_or(0);
        self.set_focus(order[(pos + order.len() - 1) % order.len()]);
    }

    /// Inserts a printable character. The ID field only takes digits.
    fn handle_char(&mut self, ch: char) {
        if self.focus == Focus::Id && !ch.is_ascii_digit() {
            return;
        }
        self.edit(|cursor, text| cursor.insert(text, ch));
    }

    /// Applies an edit to the focused field and refreshes its drop-list.
    ///
    /// The cursor stays where the edit left it; the refresh never moves it.
    fn edit(&mut self, op: impl FnOnce(&mut Cursor, &mut String)) {
        let Some(text) = field_text_mut(&mut self.form, self.focus) else {
            return;
        };
        op(&mut self.cursor, text);
        if matches!(self.focus, Focus::Choice(_)) {
            let matches = self.focused_matches();
            self.dropdown.refresh(matches);
        }
    }

    fn focused_matches(&self) -> usize {
        self.focused_entries().len()
    }

    /// Replaces the focused choice field's text with the highlighted entry.
    fn accept_highlight(&mut self) -> bool {
        let Focus::Choice(i) = self.focus else {
            return false;
        };
        if !self.dropdown.is_open() {
            return false;
        }
        let Some(row) = self.dropdown.highlight() else {
            return false;
        };
        let Some(list) = self.form.choice_mut(i) else {
            return false;
        };
        let Some(entry) = list.filtered().get(row).map(|e| e.to_string()) else {
            return false;
        };
        list.set_prefix(entry);
        self.cursor = Cursor::at_end(list.prefix());
        self.dropdown.close();
        true
    }

    fn sync_log(&mut self) {
        let text = self.log_text();
        self.form.set_log(text);
    }
}

fn field_text(form: &FormState, focus: Focus) -> Option<&str> {
    match focus {
        Focus::Id => Some(form.id_field()),
        Focus::Login => Some(form.login_field()),
        Focus::Choice(i) => form.choices().get(i).map(|c| c.prefix()),
        Focus::Extra(i) => form.extras().get(i).map(String::as_str),
        Focus::Log => None,
    }
}

fn field_text_mut(form: &mut FormState, focus: Focus) -> Option<&mut String> {
    match focus {
        Focus::Id => Some(form.id_field_mut()),
        Focus::Login => Some(form.login_field_mut()),
        Focus::Choice(i) => form.choice_mut(i).map(|c| c.prefix_mut()),
        Focus::Extra(i) => form.extra_mut(i),
        Focus::Log => None,
    }
}

/// Builds the log text area with the cursor after the last line.
fn log_area_from(text: &str) -> TextArea<'static> {
    let mut area = TextArea::new(text.lines().map(str::to_owned).collect());
    area.move_cursor(CursorMove::Bottom);
    area.move_cursor(CursorMove::End);
    area
}

/// Splits `area` into a grid of `count` cells, [`GRID_COLUMNS`] per row.
fn grid_cells(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let rows = count.div_ceil(GRID_COLUMNS);
    let row_areas = Layout::vertical(vec![Constraint::Length(ROW_HEIGHT); rows]).split(area);
    row_areas
        .iter()
        .flat_map(|row| {
            Layout::horizontal([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                .split(*row)
                .to_vec()
        })
        .take(count)
        .collect()
}

/// Renders the record entry screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_entry(state: &EntryState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Record Entry ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = state.form();
    let cell_count = form.choices().len() + form.extras().len();
    let grid_height = u16::try_from(cell_count.div_ceil(GRID_COLUMNS))
        .unwrap_or(u16::MAX)
        .saturating_mul(ROW_HEIGHT);

    let [ids_area, grid_area, log_area, footer_area] = Layout::vertical([
        Constraint::Length(ROW_HEIGHT),
        Constraint::Length(grid_height),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(inner);

    let cursor_for = |focus: Focus| (state.focus() == focus).then_some(state.cursor());

    // ID and login
    let [id_area, login_area, _] = Layout::horizontal([
        Constraint::Length(16),
        Constraint::Length(32),
        Constraint::Min(0),
    ])
    .areas(ids_area);
    draw_input("ID", form.id_field(), cursor_for(Focus::Id), frame, id_area);
    draw_input(
        "Login",
        form.login_field(),
        cursor_for(Focus::Login),
        frame,
        login_area,
    );

    // Choice and extra fields
    let cells = grid_cells(grid_area, cell_count);
    let mut dropdown_anchor = None;
    for (i, list) in form.choices().iter().enumerate() {
        let Some(&cell) = cells.get(i) else { break };
        let focus = Focus::Choice(i);
        draw_input(list.label(), list.prefix(), cursor_for(focus), frame, cell);
        if state.focus() == focus {
            dropdown_anchor = Some(cell);
        }
    }
    for (i, value) in form.extras().iter().enumerate() {
        let Some(&cell) = cells.get(form.choices().len() + i) else {
            break;
        };
        let label = format!("Extra {}", i + 1);
        draw_input(&label, value, cursor_for(Focus::Extra(i)), frame, cell);
    }

    // Log
    let log_focused = state.focus() == Focus::Log;
    let mut log = state.log_area.clone();
    log.set_block(
        Block::default()
            .title(" Log ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if log_focused {
                Color::Yellow
            } else {
                Color::DarkGray
            })),
    );
    log.set_cursor_line_style(Style::default());
    if !log_focused {
        log.set_cursor_style(Style::default());
    }
    frame.render_widget(&log, log_area);

    // Footer
    let footer = Paragraph::new(Line::from(
        "Tab: next  Enter: add record  Alt+c: clear  Alt+f: add field  Alt+x: export  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    // Drop-list goes last so it overlays the fields below it.
    if let Some(anchor) = dropdown_anchor {
        draw_dropdown(
            &state.focused_entries(),
            state.dropdown(),
            frame,
            anchor,
            inner,
        );
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;
    use crate::model::{ChoiceList, MAX_EXTRA_FIELDS};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn alt_press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::ALT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_string(state: &mut EntryState, s: &str) {
        for ch in s.chars() {
            state.handle_key(press(KeyCode::Char(ch)));
        }
    }

    fn entries(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn make_state() -> EntryState {
        let role = ChoiceList::new(
            "role.txt",
            entries(&["Manager", "Analyst", "manager assistant"]),
        );
        let region = ChoiceList::new("region.txt", entries(&["North", "South"]));
        EntryState::new(FormState::new(vec![role, region], "user"))
    }

    fn focus_role(state: &mut EntryState) {
        state.set_focus(Focus::Choice(0));
    }

    mod construction {
        use super::*;

        #[test]
        fn starts_on_id_field() {
            let state = make_state();
            assert_eq!(state.focus(), Focus::Id);
            assert_eq!(state.cursor().position(), 1);
            assert!(!state.dropdown().is_open());
            assert_eq!(state.log_text(), "");
        }

        #[test]
        fn focus_order_covers_all_inputs() {
            let mut state = make_state();
            state.add_extra_field();
            assert_eq!(
                state.focus_order(),
                vec![
                    Focus::Id,
                    Focus::Login,
                    Focus::Choice(0),
                    Focus::Choice(1),
                    Focus::Extra(0),
                    Focus::Log,
                ]
            );
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn tab_cycles_and_wraps() {
            let mut state = make_state();
            let order = state.focus_order();
            for expected in order.iter().skip(1) {
                state.handle_key(press(KeyCode::Tab));
                assert_eq!(state.focus(), *expected);
            }
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.focus(), Focus::Id);
        }

        #[test]
        fn backtab_wraps_to_log() {
            let mut state = make_state();
            state.handle_key(press(KeyCode::BackTab));
            assert_eq!(state.focus(), Focus::Log);
        }

        #[test]
        fn focus_change_puts_cursor_at_end_and_closes_dropdown() {
            let mut state = make_state();
            focus_role(&mut state);
            type_string(&mut state, "m");
            assert!(state.dropdown().is_open());
            state.handle_key(press(KeyCode::BackTab));
            assert_eq!(state.focus(), Focus::Login);
            assert_eq!(state.cursor().position(), 4);
            assert!(!state.dropdown().is_open());
        }
    }

    mod typing {
        use super::*;

        #[test]
        fn id_field_accepts_digits_only() {
            let mut state = make_state();
            state.handle_key(press(KeyCode::Backspace));
            type_string(&mut state, "4a2-");
            assert_eq!(state.form().id_field(), "42");
        }

        #[test]
        fn login_field_takes_any_text() {
            let mut state = make_state();
            state.set_focus(Focus::Login);
            type_string(&mut state, "_x");
            assert_eq!(state.form().login_field(), "user_x");
        }

        #[test]
        fn editing_in_the_middle_keeps_cursor() {
            let mut state = make_state();
            state.set_focus(Focus::Login);
            state.handle_key(press(KeyCode::Home));
            state.handle_key(press(KeyCode::Right));
            state.handle_key(press(KeyCode::Delete));
            type_string(&mut state, "S");
            assert_eq!(state.form().login_field(), "uSer");
            assert_eq!(state.cursor().position(), 2);
        }

        #[test]
        fn ctrl_chars_are_not_inserted() {
            let mut state = make_state();
            state.set_focus(Focus::Login);
            state.handle_key(KeyEvent {
                code: KeyCode::Char('u'),
                modifiers: KeyModifiers::CONTROL,
                kind: KeyEventKind::Press,
                state: KeyEventState::NONE,
            });
            assert_eq!(state.form().login_field(), "user");
        }
    }

    mod choice_fields {
        use super::*;

        #[test]
        fn typing_filters_and_opens_dropdown() {
            let mut state = make_state();
            focus_role(&mut state);
            type_string(&mut state, "MA");
            assert_eq!(state.form().choices()[0].prefix(), "MA");
            assert_eq!(state.focused_entries(), vec!["Manager", "manager assistant"]);
            assert!(state.dropdown().is_open());
            assert_eq!(state.dropdown().highlight(), None);
        }

        #[test]
        fn no_match_closes_dropdown_but_keeps_text() {
            let mut state = make_state();
            focus_role(&mut state);
            type_string(&mut state, "zz");
            assert!(!state.dropdown().is_open());
            assert_eq!(state.form().choices()[0].prefix(), "zz");
        }

        #[test]
        fn cursor_survives_filter_refresh() {
            let mut state = make_state();
            focus_role(&mut state);
            type_string(&mut state, "mnager");
            state.handle_key(press(KeyCode::Home));
            state.handle_key(press(KeyCode::Right));
            type_string(&mut state, "a");
            assert_eq!(state.form().choices()[0].prefix(), "manager");
            assert_eq!(state.cursor().position(), 2);
            assert!(state.dropdown().is_open());
        }

        #[test]
        fn down_then_enter_accepts_entry() {
            let mut state = make_state();
            focus_role(&mut state);
            type_string(&mut state, "ma");
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Down));
            assert_eq!(state.dropdown().highlight(), Some(1));
            state.handle_key(press(KeyCode::Enter));
            assert_eq!(state.form().choices()[0].prefix(), "manager assistant");
            assert_eq!(state.cursor().position(), "manager assistant".len());
            assert!(!state.dropdown().is_open());
            assert_eq!(state.form().log(), "", "accepting must not add a record");
        }

        #[test]
        fn down_on_empty_text_lists_everything() {
            let mut state = make_state();
            state.set_focus(Focus::Choice(1));
            state.handle_key(press(KeyCode::Down));
            assert!(state.dropdown().is_open());
            assert_eq!(state.focused_entries(), vec!["North", "South"]);
        }

        #[test]
        fn esc_closes_dropdown_before_quitting() {
            let mut state = make_state();
            focus_role(&mut state);
            type_string(&mut state, "a");
            assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::None);
            assert!(!state.dropdown().is_open());
            assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::Quit);
        }

        #[test]
        fn up_down_outside_choice_fields_do_nothing() {
            let mut state = make_state();
            state.handle_key(press(KeyCode::Down));
            assert!(!state.dropdown().is_open());
        }
    }

    mod records {
        use super::*;

        #[test]
        fn end_to_end_via_keys() {
            let mut state = make_state();
            state.handle_key(press(KeyCode::Backspace));
            state.handle_key(press(KeyCode::Tab));
            state.handle_key(press(KeyCode::Tab));
            type_string(&mut state, "Manager");
            state.handle_key(press(KeyCode::Tab));
            type_string(&mut state, "North");
            state.handle_key(alt_press(KeyCode::Char('f')));
            assert_eq!(state.focus(), Focus::Extra(0));
            type_string(&mut state, "note");
            state.handle_key(press(KeyCode::Enter));

            assert_eq!(state.log_text(), "1;user_01;Manager;North;note");
            assert_eq!(state.form().id_field(), "2");
            assert_eq!(state.form().login_field(), "user");
        }

        #[test]
        fn enter_with_closed_dropdown_adds_record() {
            let mut state = make_state();
            focus_role(&mut state);
            type_string(&mut state, "Analyst");
            state.handle_key(press(KeyCode::Enter));
            assert_eq!(state.log_text(), "1;user_01;Analyst;");
        }

        #[test]
        fn alt_a_adds_record_from_log_area() {
            let mut state = make_state();
            state.set_focus(Focus::Log);
            state.handle_key(alt_press(KeyCode::Char('a')));
            state.handle_key(alt_press(KeyCode::Char('a')));
            assert_eq!(state.log_text(), "1;user_01;;\n2;user_02;;");
            assert_eq!(state.status_context().record_count, 2);
        }

        #[test]
        fn hand_edits_in_log_are_kept() {
            let mut state = make_state();
            state.add_record();
            state.set_focus(Focus::Log);
            type_string(&mut state, " ok");
            state.handle_key(alt_press(KeyCode::Char('a')));
            assert_eq!(state.log_text(), "1;user_01;; ok\n2;user_02;;");
        }

        #[test]
        fn enter_in_log_area_inserts_newline() {
            let mut state = make_state();
            state.set_focus(Focus::Log);
            type_string(&mut state, "a");
            state.handle_key(press(KeyCode::Enter));
            type_string(&mut state, "b");
            assert_eq!(state.log_text(), "a\nb");
            assert_eq!(state.form().id_counter(), 1, "no record composed");
        }

        #[test]
        fn alt_c_resets() {
            let mut state = make_state();
            state.add_record();
            state.set_focus(Focus::Login);
            type_string(&mut state, "_77");
            state.handle_key(alt_press(KeyCode::Char('c')));
            assert_eq!(state.log_text(), "");
            assert_eq!(state.form().id_field(), "1");
            assert_eq!(state.form().login_field(), "user");
            assert_eq!(state.form().login_counter(), 1);
            assert_eq!(state.cursor().position(), 4);
        }

        #[test]
        fn alt_f_is_capped() {
            let mut state = make_state();
            for _ in 0..MAX_EXTRA_FIELDS {
                assert!(state.add_extra_field());
            }
            state.set_focus(Focus::Id);
            state.handle_key(alt_press(KeyCode::Char('f')));
            assert_eq!(state.form().extras().len(), MAX_EXTRA_FIELDS);
            assert_eq!(state.focus(), Focus::Id);
        }

        #[test]
        fn alt_x_navigates_to_export() {
            let mut state = make_state();
            let action = state.handle_key(alt_press(KeyCode::Char('x')));
            assert_eq!(action, Action::Navigate(Screen::Export));
        }
    }

    mod layout {
        use super::*;

        #[test]
        fn grid_wraps_after_four_columns() {
            let cells = grid_cells(Rect::new(0, 0, 80, 6), 5);
            assert_eq!(cells.len(), 5);
            assert_eq!(cells[0].y, 0);
            assert_eq!(cells[3].y, 0);
            assert_eq!(cells[4].y, ROW_HEIGHT);
            assert_eq!(cells[4].x, 0);
            assert_eq!(cells[1].x, 20);
        }

        #[test]
        fn empty_grid() {
            assert!(grid_cells(Rect::new(0, 0, 80, 6), 0).is_empty());
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn render(state: &EntryState) -> String {
            let backend = TestBackend::new(100, 24);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_entry(state, frame, frame.area()))
                .unwrap();
            let buf = terminal.backend().buffer();
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        #[test]
        fn shows_field_labels() {
            let output = render(&make_state());
            assert!(output.contains("Record Entry"));
            assert!(output.contains("ID"));
            assert!(output.contains("Login"));
            assert!(output.contains("role"));
            assert!(output.contains("region"));
            assert!(output.contains("Log"));
        }

        #[test]
        fn shows_extra_fields() {
            let mut state = make_state();
            state.add_extra_field();
            let output = render(&state);
            assert!(output.contains("Extra 1"));
        }

        #[test]
        fn shows_dropdown_entries() {
            let mut state = make_state();
            focus_role(&mut state);
            type_string(&mut state, "man");
            let output = render(&state);
            assert!(output.contains("manager assistant"));
            assert!(!output.contains("Analyst"));
        }

        #[test]
        fn shows_log_lines() {
            let mut state = make_state();
            state.add_record();
            let output = render(&state);
            assert!(output.contains("1;user_01;;"));
        }
    }
}
