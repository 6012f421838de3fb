mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

use navigate::handle_navigate;
use search::handle_search;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Search => handle_search(app, key),
    }
    app.clamp_cursors();
}
