use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Layout, Member};
use crate::ops::stats::member_task_counts;
use crate::tui::app::{App, Focus};
use crate::util::text::{fit_to_width, initials, truncate_to_width};

use super::helpers::pad_spans;

pub const EMPTY_MESSAGE: &str = "No members to show.";

/// Width and height of one grid card, borders included
pub const CARD_W: u16 = 26;
pub const CARD_H: u16 = 5;

const NAME_W: usize = 16;

/// Render the members pane in the current layout
pub fn render_members_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.focus == Focus::Members;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Members ")
        .border_style(Style::default().fg(if focused { app.theme.highlight } else { app.theme.dim }).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.dashboard.visible_members().is_empty() {
        let empty = Paragraph::new(format!(" {}", EMPTY_MESSAGE))
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, inner);
        return;
    }

    match app.dashboard.filter().layout {
        Layout::List => render_list(frame, app, inner),
        Layout::Grid => render_grid(frame, app, inner),
    }
}

/// Adjust `scroll` so that `row` is within `height` rows starting at it
fn scroll_to(scroll: usize, row: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    if row < scroll {
        row
    } else if row >= scroll + height {
        row + 1 - height
    } else {
        scroll
    }
}

fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let height = area.height as usize;
    app.member_scroll = scroll_to(app.member_scroll, app.member_cursor, height);

    let app = &*app;
    let bg = app.theme.background;
    let selected = app.dashboard.filter().selected_member_id;
    let focused = app.focus == Focus::Members;

    let lines: Vec<Line> = app
        .dashboard
        .visible_members()
        .into_iter()
        .enumerate()
        .skip(app.member_scroll)
        .take(height)
        .map(|(i, member)| {
            let is_cursor = focused && i == app.member_cursor;
            let is_selected = selected == Some(member.id);
            member_line(app, member, is_cursor, is_selected, area.width as usize)
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// One list row: `▸ ● [AR] Alex Rivera      Leader  Active  0/2`
fn member_line<'a>(
    app: &'a App,
    member: &Member,
    is_cursor: bool,
    is_selected: bool,
    width: usize,
) -> Line<'a> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let fg = if member.is_active {
        app.theme.text_bright
    } else {
        app.theme.dim
    };
    let role_color = app.theme.role_color(member.role);

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(
        if is_cursor { "\u{25B8} " } else { "  " },
        Style::default().fg(app.theme.highlight).bg(bg),
    ));
    spans.push(Span::styled(
        if is_selected { "\u{25CF} " } else { "  " },
        Style::default().fg(app.theme.green).bg(bg),
    ));
    spans.push(Span::styled(
        format!("[{}]", fit_to_width(&initials(&member.name), 2)),
        Style::default()
            .fg(role_color)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(" ", Style::default().bg(bg)));

    let mut name_style = Style::default().fg(fg).bg(bg);
    if is_selected {
        name_style = name_style.add_modifier(Modifier::BOLD);
    }
    spans.push(Span::styled(fit_to_width(&member.name, NAME_W), name_style));
    spans.push(Span::styled("  ", Style::default().bg(bg)));
    spans.push(Span::styled(
        fit_to_width(&member.role.to_string(), 6),
        Style::default().fg(role_color).bg(bg),
    ));
    spans.push(Span::styled("  ", Style::default().bg(bg)));
    spans.push(Span::styled(
        fit_to_width(member.status_label(), 8),
        Style::default()
            .fg(if member.is_active { app.theme.green } else { app.theme.dim })
            .bg(bg),
    ));

    let counts = member_task_counts(app.dashboard.tasks(), member.id);
    if counts.total > 0 {
        spans.push(Span::styled(
            format!("{}/{}", counts.done, counts.total),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    if is_cursor {
        pad_spans(&mut spans, width, Style::default().bg(bg));
    }
    Line::from(spans)
}

fn render_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    let columns = (area.width / CARD_W).max(1) as usize;
    let rows_visible = (area.height / CARD_H).max(1) as usize;
    app.grid_columns = columns;
    let cursor_row = app.member_cursor / columns;
    app.member_scroll = scroll_to(app.member_scroll, cursor_row, rows_visible);

    let app = &*app;
    let selected = app.dashboard.filter().selected_member_id;
    let focused = app.focus == Focus::Members;
    let members = app.dashboard.visible_members();

    for (i, member) in members.iter().enumerate() {
        let row = i / columns;
        if row < app.member_scroll || row >= app.member_scroll + rows_visible {
            continue;
        }
        let col = (i % columns) as u16;
        let y = area.y + ((row - app.member_scroll) as u16) * CARD_H;
        let card = Rect {
            x: area.x + col * CARD_W,
            y,
            width: CARD_W.min(area.width),
            height: CARD_H.min(area.bottom().saturating_sub(y)),
        };
        let is_cursor = focused && i == app.member_cursor;
        let is_selected = selected == Some(member.id);
        render_card(frame, app, member, card, is_cursor, is_selected);
    }
}

fn render_card(
    frame: &mut Frame,
    app: &App,
    member: &Member,
    area: Rect,
    is_cursor: bool,
    is_selected: bool,
) {
    let bg = app.theme.background;
    let border = if is_cursor {
        app.theme.selection_border
    } else if is_selected {
        app.theme.green
    } else {
        app.theme.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let role_color = app.theme.role_color(member.role);
    let fg = if member.is_active {
        app.theme.text_bright
    } else {
        app.theme.dim
    };
    let name_width = (inner.width as usize).saturating_sub(7);
    let counts = member_task_counts(app.dashboard.tasks(), member.id);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] ", fit_to_width(&initials(&member.name), 2)),
                Style::default()
                    .fg(role_color)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                truncate_to_width(&member.name, name_width),
                Style::default().fg(fg).bg(bg),
            ),
            Span::styled(
                if is_selected { " \u{25CF}" } else { "" },
                Style::default().fg(app.theme.green).bg(bg),
            ),
        ]),
        Line::from(vec![
            Span::styled(member.role.to_string(), Style::default().fg(role_color).bg(bg)),
            Span::styled(" \u{00B7} ", Style::default().fg(app.theme.dim).bg(bg)),
            Span::styled(
                member.status_label(),
                Style::default()
                    .fg(if member.is_active { app.theme.green } else { app.theme.dim })
                    .bg(bg),
            ),
        ]),
        Line::from(Span::styled(
            format!("{}/{} done", counts.done, counts.total),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}
