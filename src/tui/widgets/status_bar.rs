//! Status bar widget: persistent one-line session summary.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{FormState, MAX_EXTRA_FIELDS, parse_id};

/// Data shown by the status bar, decoupled from [`FormState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// ID the next record will get.
    pub next_id: u64,
    /// Login the next record will get.
    pub next_login: String,
    /// Record lines currently in the log.
    pub record_count: usize,
    /// Extra fields added so far.
    pub extra_fields: usize,
}

impl StatusBarContext {
    /// Builds the context from the current form.
    pub fn from_form(form: &FormState) -> Self {
        Self {
            next_id: parse_id(form.id_field()),
            next_login: form.next_login(),
            record_count: form.record_count(),
            extra_fields: form.extras().len(),
        }
    }
}

/// Renders a one-line status bar.
///
/// Display format (left-aligned, Cyan):
/// `Next: 3  user_03  Records: 2  Extra: 1/3`
///
/// Renders nothing if `ctx.next_login` is empty (no form yet).
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    if ctx.next_login.is_empty() {
        return;
    }

    let cyan = Style::default().fg(Color::Cyan);
    let yellow = Style::default().fg(Color::Yellow);
    let extra_style = if ctx.extra_fields >= MAX_EXTRA_FIELDS {
        Style::default().fg(Color::DarkGray)
    } else {
        cyan
    };

    let spans = vec![
        Span::styled("Next: ", cyan),
        Span::styled(format!("{}  {}", ctx.next_id, ctx.next_login), yellow),
        Span::styled(format!("  Records: {}", ctx.record_count), cyan),
        Span::styled(
            format!("  Extra: {}/{MAX_EXTRA_FIELDS}", ctx.extra_fields),
            extra_style,
        ),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::model::ChoiceList;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render_status_bar(ctx: &StatusBarContext, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(ctx, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn context_from_fresh_form() {
        let form = FormState::new(vec![ChoiceList::new("role.txt", vec![])], "user");
        let ctx = StatusBarContext::from_form(&form);
        assert_eq!(ctx.next_id, 1);
        assert_eq!(ctx.next_login, "user_01");
        assert_eq!(ctx.record_count, 0);
        assert_eq!(ctx.extra_fields, 0);
    }

    #[test]
    fn context_after_records() {
        let mut form = FormState::new(vec![], "user");
        form.add_record();
        form.add_record();
        form.add_extra_field();
        let ctx = StatusBarContext::from_form(&form);
        assert_eq!(ctx.next_id, 3);
        assert_eq!(ctx.next_login, "user_03");
        assert_eq!(ctx.record_count, 2);
        assert_eq!(ctx.extra_fields, 1);
    }

    #[test]
    fn renders_next_record_and_counts() {
        let ctx = StatusBarContext {
            next_id: 7,
            next_login: "user_04".into(),
            record_count: 3,
            extra_fields: 2,
        };
        let output = render_status_bar(&ctx, 60, 1);
        assert!(output.contains("7  user_04"), "should show next id and login");
        assert!(output.contains("Records: 3"), "should show record count");
        assert!(output.contains("Extra: 2/3"), "should show extra field usage");
    }

    #[test]
    fn renders_nothing_without_form() {
        let ctx = StatusBarContext::default();
        let output = render_status_bar(&ctx, 40, 1);
        assert!(output.trim().is_empty(), "blank context should render blank");
    }
}
