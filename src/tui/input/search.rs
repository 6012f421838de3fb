use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::text::pop_grapheme;

/// Live search: the filter updates on every keystroke.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Cancel: restore the text from before `/`
        (_, KeyCode::Esc) => {
            let original = app.search_original.take().unwrap_or_default();
            set_search(app, original);
            app.mode = Mode::Navigate;
        }

        // Keep the current text
        (_, KeyCode::Enter) => {
            app.search_original = None;
            app.mode = Mode::Navigate;
        }

        // Clear the field
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => set_search(app, String::new()),

        (_, KeyCode::Backspace) => {
            let mut text = app.dashboard.filter().search_text.clone();
            pop_grapheme(&mut text);
            set_search(app, text);
        }

        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
            let mut text = app.dashboard.filter().search_text.clone();
            text.push(c);
            set_search(app, text);
        }

        _ => {}
    }
}

fn set_search(app: &mut App, text: String) {
    app.dashboard.set_search_text(text);
    app.member_cursor = 0;
    app.member_scroll = 0;
}
