use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Layout;
use crate::tui::app::{App, Mode};

pub const SEARCH_PLACEHOLDER: &str = "Search members by name";

/// Render the filter bar: active-only checkbox, layout buttons, search box
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let filter = app.dashboard.filter();
    let base = Style::default().fg(app.theme.text).bg(bg);
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans: Vec<Span> = vec![Span::styled(" ", base)];

    // [x] Show only active members
    let check = if filter.show_only_active { "[x]" } else { "[ ]" };
    let check_style = if filter.show_only_active {
        Style::default().fg(app.theme.green).bg(bg)
    } else {
        base
    };
    spans.push(Span::styled(check, check_style));
    spans.push(Span::styled(" Show only active members", base));
    spans.push(Span::styled("   ", base));

    // List | Grid
    for layout in [Layout::List, Layout::Grid] {
        let label = format!(" {} ", layout);
        let style = if filter.layout == layout {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            dim
        };
        spans.push(Span::styled(label, style));
    }
    spans.push(Span::styled("   ", base));

    // Search box
    spans.push(Span::styled("/ ", Style::default().fg(app.theme.highlight).bg(bg)));
    let editing = app.mode == Mode::Search;
    if filter.search_text.is_empty() && !editing {
        spans.push(Span::styled(SEARCH_PLACEHOLDER, dim));
    } else {
        // Red when nothing matches
        let fg = if app.dashboard.visible_members().is_empty() {
            app.theme.red
        } else {
            app.theme.text_bright
        };
        spans.push(Span::styled(
            filter.search_text.clone(),
            Style::default().fg(fg).bg(bg),
        ));
    }
    if editing {
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn bar(app: &App) -> String {
        render_to_string(TERM_W, 1, |frame, area| render_filter_bar(frame, app, area))
    }

    #[test]
    fn default_bar_shows_placeholder() {
        let app = seeded_app();
        let out = bar(&app);
        assert!(out.contains("[ ] Show only active members"));
        assert!(out.contains(" List  Grid "));
        assert!(out.contains(SEARCH_PLACEHOLDER));
    }

    #[test]
    fn bar_reflects_filters() {
        let mut app = seeded_app();
        app.dashboard.set_show_only_active(true);
        app.dashboard.set_search_text("ali");
        let out = bar(&app);
        assert!(out.contains("[x] Show only active members"));
        assert!(out.contains("/ ali"));
        assert!(!out.contains(SEARCH_PLACEHOLDER));
    }

    #[test]
    fn search_without_matches_is_red() {
        let mut app = seeded_app();
        app.dashboard.set_search_text("zzz");
        let mut terminal = test_terminal(TERM_W, 1);
        terminal
            .draw(|frame| render_filter_bar(frame, &app, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        let x = buffer_to_string(buf).find("zzz").unwrap() as u16;
        assert_eq!(buf[(x, 0)].fg, app.theme.red);
    }

    #[test]
    fn editing_shows_cursor() {
        let mut app = seeded_app();
        app.mode = Mode::Search;
        let out = bar(&app);
        assert!(out.contains("/ \u{258C}"));
    }
}
