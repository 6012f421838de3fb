use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::app::{App, Focus};
use crate::util::text::truncate_to_width;

use super::helpers::{checkbox, pad_spans};

pub const NO_SELECTION_MESSAGE: &str = "Select a member to view tasks.";
pub const NO_TASKS_MESSAGE: &str = "No tasks yet.";

/// Render the tasks pane for the selected member
pub fn render_tasks_panel(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.focus == Focus::Tasks;
    let title = match app.dashboard.selected_member() {
        Some(member) => format!(" Tasks \u{00B7} {} ", member.name),
        None => " Tasks ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(if focused { app.theme.highlight } else { app.theme.dim }).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let dim = Style::default().fg(app.theme.dim).bg(bg);
    if app.dashboard.selected_member().is_none() {
        let message = Paragraph::new(NO_SELECTION_MESSAGE)
            .style(dim)
            .wrap(Wrap { trim: true });
        frame.render_widget(message, inner);
        return;
    }

    let tasks = app.dashboard.selected_member_tasks();
    if tasks.is_empty() {
        let message = Paragraph::new(NO_TASKS_MESSAGE)
            .style(dim)
            .wrap(Wrap { trim: true });
        frame.render_widget(message, inner);
        return;
    }

    let width = inner.width as usize;
    let height = inner.height as usize;
    // Keep the cursor row on screen; task lists are short so no stored scroll
    let skip = (app.task_cursor + 1).saturating_sub(height);

    let lines: Vec<Line> = tasks
        .iter()
        .enumerate()
        .skip(skip)
        .take(height)
        .map(|(i, task)| {
            let is_cursor = focused && i == app.task_cursor;
            let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
            let box_style = if task.done {
                Style::default().fg(app.theme.green).bg(row_bg)
            } else {
                Style::default().fg(app.theme.text).bg(row_bg)
            };
            let title_style = if task.done {
                Style::default()
                    .fg(app.theme.dim)
                    .bg(row_bg)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(app.theme.text_bright).bg(row_bg)
            };
            let mut spans = vec![
                Span::styled(" ", Style::default().bg(row_bg)),
                Span::styled(checkbox(task), box_style),
                Span::styled(" ", Style::default().bg(row_bg)),
                Span::styled(
                    truncate_to_width(&task.title, width.saturating_sub(5)),
                    title_style,
                ),
            ];
            if is_cursor {
                pad_spans(&mut spans, width, Style::default().bg(row_bg));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}
