use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            (" \u{2191}\u{2193}/jk", "Move cursor (one row in grid)"),
            (" \u{2190}\u{2192}", "Move across grid cards"),
            (" Home/End", "Jump to first/last"),
            (" Tab", "Switch members / tasks"),
        ],
    ),
    (
        "Selection",
        &[
            (" Enter/Space", "Select member / toggle task"),
            (" x", "Toggle task done"),
            (" Esc", "Clear selection"),
        ],
    ),
    (
        "Filters",
        &[
            (" a", "Show only active members"),
            (" /", "Search by name"),
            (" l / g / v", "List / grid / switch layout"),
        ],
    ),
    ("", &[(" ?", "Close help"), (" q", "Quit")]),
];

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));

    for (section, bindings) in BINDINGS {
        lines.push(Line::from(""));
        if !section.is_empty() {
            lines.push(Line::from(Span::styled(format!(" {}", section), header_style)));
        }
        for (key, desc) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<14}", key), key_style),
                Span::styled(*desc, desc_style),
            ]));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, overlay_area);
}

/// Create a centered rect using percentage of the available area
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn lists_bindings() {
        let app = seeded_app();
        let out = render_to_string(TERM_W, 30, |frame, area| {
            render_help_overlay(frame, &app, area)
        });
        assert!(out.contains("Key Bindings"));
        assert!(out.contains("Show only active members"));
        assert!(out.contains("Search by name"));
    }
}
