pub mod filter_bar;
pub mod help_overlay;
mod helpers;
pub mod members_view;
pub mod status_row;
pub mod tasks_panel;

#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

pub const TITLE: &str = "Campus Club Dashboard";
pub const INACTIVE_NOTICE: &str = "The selected member is inactive.";

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let notice_rows = if app.dashboard.is_selected_member_inactive() { 1 } else { 0 };

    // Layout: title | filter bar | notice (optional) | members + tasks | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(notice_rows),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    filter_bar::render_filter_bar(frame, app, chunks[1]);
    if notice_rows > 0 {
        render_notice(frame, app, chunks[2]);
    }

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[3]);
    members_view::render_members_view(frame, app, panes[0]);
    tasks_panel::render_tasks_panel(frame, app, panes[1]);

    status_row::render_status_row(frame, app, chunks[4]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {}", TITLE),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(app.theme.background));
    frame.render_widget(title, area);
}

/// Warning banner shown while an inactive member is selected
fn render_notice(frame: &mut Frame, app: &App, area: Rect) {
    let style = Style::default().fg(app.theme.yellow).bg(app.theme.background);
    let line = Line::from(vec![
        Span::styled(" ! ", style.add_modifier(Modifier::BOLD)),
        Span::styled(INACTIVE_NOTICE, style),
    ]);
    frame.render_widget(Paragraph::new(line).style(style), area);
}
