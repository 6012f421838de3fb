use ratatui::style::Style;
use ratatui::text::Span;

use crate::model::Task;
use crate::util::text;

/// Markdown-style checkbox for a task
pub(super) fn checkbox(task: &Task) -> String {
    format!("[{}]", task.checkbox_char())
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| text::display_width(&s.content))
        .sum()
}

/// Pad a line of spans out to `width` cells with `style`
pub(super) fn pad_spans(spans: &mut Vec<Span<'_>>, width: usize, style: Style) {
    let used = spans_width(spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
}

/// Push `hint` right-aligned after `spans` if it fits within `width`
pub(super) fn push_right_hint<'a>(
    spans: &mut Vec<Span<'a>>,
    hint: &'a str,
    width: usize,
    pad_style: Style,
    hint_style: Style,
) {
    let content_width = spans_width(spans);
    let hint_width = text::display_width(hint);
    if content_width + hint_width < width {
        spans.push(Span::styled(
            " ".repeat(width - content_width - hint_width),
            pad_style,
        ));
        spans.push(Span::styled(hint, hint_style));
    }
}
