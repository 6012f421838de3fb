use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::helpers::push_right_hint;

pub const FOOTER: &str = "\u{00A9} 2025 Campus Coding Club";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let (mut spans, hint) = match app.mode {
        Mode::Navigate => {
            let visible = app.dashboard.visible_members().len();
            let total = app.dashboard.members().len();
            let spans = vec![
                Span::styled(format!(" {}", FOOTER), dim),
                Span::styled(
                    format!("  {} of {} members", visible, total),
                    Style::default().fg(app.theme.text).bg(bg),
                ),
            ];
            (spans, "? help  q quit ")
        }
        Mode::Search => (
            vec![Span::styled(" searching\u{2026}", dim)],
            "Enter keep  Esc cancel  ^U clear ",
        ),
    };

    if app.show_key_hints {
        push_right_hint(&mut spans, hint, width, Style::default().bg(bg), dim);
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
