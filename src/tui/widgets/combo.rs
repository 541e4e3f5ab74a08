//! Drop-list shown under a choice field while the user types.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

/// Rows of the drop-list visible at once.
pub const MAX_VISIBLE: u16 = 8;

/// Open/closed state and highlighted row of a choice field's drop-list.
///
/// The highlight is an index into the filtered entries, not the full list.
/// `None` means nothing is highlighted and the field keeps the typed text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dropdown {
    open: bool,
    highlight: Option<usize>,
}

impl Dropdown {
    /// Returns `true` if the drop-list is shown.
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Returns the highlighted row, if any.
    pub fn highlight(self) -> Option<usize> {
        self.highlight
    }

    /// Recomputes state after the typed text changed: open only if
    /// `matches > 0`, with nothing highlighted.
    pub fn refresh(&mut self, matches: usize) {
        self.open = matches > 0;
        self.highlight = None;
    }

    /// Highlights the next row, opening the list first if needed.
    pub fn next(&mut self, matches: usize) {
        if matches == 0 {
            self.close();
            return;
        }
        self.open = true;
        self.highlight = Some(match self.highlight {
            Some(i) if i + 1 < matches => i + 1,
            Some(i) => i.min(matches - 1),
            None => 0,
        });
    }

    /// Highlights the previous row; moving above the first row clears the highlight.
    pub fn prev(&mut self, matches: usize) {
        if matches == 0 {
            self.close();
            return;
        }
        self.open = true;
        self.highlight = match self.highlight {
            Some(0) | None => None,
            Some(i) => Some((i - 1).min(matches - 1)),
        };
    }

    /// Hides the drop-list.
    pub fn close(&mut self) {
        *self = Self::default();
    }
}

/// Renders the drop-list directly below `anchor`, or above it when there is
/// not enough room below inside `bounds`.
#[mutants::skip]
pub fn draw_dropdown(
    entries: &[&str],
    dropdown: Dropdown,
    frame: &mut Frame,
    anchor: Rect,
    bounds: Rect,
) {
    if !dropdown.is_open() || entries.is_empty() {
        return;
    }

    let rows = u16::try_from(entries.len()).unwrap_or(u16::MAX).min(MAX_VISIBLE);
    let height = rows + 2;
    let below = anchor.y + anchor.height;
    let y = if below + height <= bounds.y + bounds.height {
        below
    } else {
        anchor.y.saturating_sub(height).max(bounds.y)
    };
    let area = Rect {
        x: anchor.x,
        y,
        width: anchor.width,
        height: height.min(bounds.height),
    }
    .intersection(bounds);

    let items: Vec<ListItem> = entries.iter().map(|e| ListItem::new(*e)).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    let mut state = ListState::default().with_selected(dropdown.highlight());

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut state);
}
