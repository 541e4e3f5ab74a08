//! Single-line text input: cursor editing and rendering.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Cursor position, counted in characters, within a single-line field.
///
/// The text itself is owned elsewhere (the form state); every editing method
/// takes it by reference so the cursor survives changes made around it, such
/// as a dropdown refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pos: usize,
}

impl Cursor {
    /// Places the cursor after the last character of `text`.
    pub fn at_end(text: &str) -> Self {
        Self {
            pos: text.chars().count(),
        }
    }

    /// Returns the cursor position in characters.
    pub fn position(self) -> usize {
        self.pos
    }

    /// Inserts `ch` before the cursor and advances past it.
    pub fn insert(&mut self, text: &mut String, ch: char) {
        self.clamp(text);
        text.insert(byte_index(text, self.pos), ch);
        self.pos += 1;
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self, text: &mut String) {
        self.clamp(text);
        if self.pos == 0 {
            return;
        }
        self.pos -= 1;
        text.remove(byte_index(text, self.pos));
    }

    /// Deletes the character under the cursor.
    pub fn delete(&mut self, text: &mut String) {
        self.clamp(text);
        if self.pos < text.chars().count() {
            text.remove(byte_index(text, self.pos));
        }
    }

    /// Moves one character left.
    pub fn left(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// Moves one character right, stopping at the end of `text`.
    pub fn right(&mut self, text: &str) {
        self.pos = (self.pos + 1).min(text.chars().count());
    }

    /// Moves to the start of the field.
    pub fn home(&mut self) {
        self.pos = 0;
    }

    /// Moves to the end of `text`.
    pub fn end(&mut self, text: &str) {
        *self = Self::at_end(text);
    }

    fn clamp(&mut self, text: &str) {
        self.pos = self.pos.min(text.chars().count());
    }
}

fn byte_index(text: &str, pos: usize) -> usize {
    text.char_indices().nth(pos).map_or(text.len(), |(i, _)| i)
}

/// Renders a bordered single-line input.
///
/// When `cursor` is given the field is drawn as focused and the terminal
/// cursor is placed inside it, scrolling the text if it does not fit.
#[mutants::skip]
pub fn draw_input(label: &str, value: &str, cursor: Option<Cursor>, frame: &mut Frame, area: Rect) {
    let border_color = if cursor.is_some() {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    let width = inner.width.max(1) as usize;
    let pos = cursor.map_or(0, Cursor::position);
    let offset = (pos + 1).saturating_sub(width);

    let paragraph = Paragraph::new(value)
        .block(block)
        .scroll((0, u16::try_from(offset).unwrap_or(u16::MAX)));
    frame.render_widget(paragraph, area);

    if cursor.is_some() && inner.width > 0 && inner.height > 0 {
        let x = inner.x + u16::try_from(pos - offset).unwrap_or(0);
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}
