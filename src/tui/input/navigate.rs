use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Layout;
use crate::tui::app::{App, Focus, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts everything; ? and Esc close it
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }
        (_, KeyCode::Char('?')) => app.show_help = true,

        // Focus
        (_, KeyCode::Tab) | (_, KeyCode::BackTab) => switch_focus(app),

        // Cursor movement
        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => move_down(app),
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => move_up(app),
        (_, KeyCode::Left) => move_sideways(app, false),
        (_, KeyCode::Right) => move_sideways(app, true),
        (_, KeyCode::Home) => match app.focus {
            Focus::Members => app.member_cursor = 0,
            Focus::Tasks => app.task_cursor = 0,
        },
        (_, KeyCode::End) => match app.focus {
            Focus::Members => app.member_cursor = usize::MAX,
            Focus::Tasks => app.task_cursor = usize::MAX,
        },

        // Select member / toggle task
        (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => activate(app),
        (_, KeyCode::Char('x')) => {
            if app.focus == Focus::Tasks {
                toggle_cursor_task(app);
            }
        }
        (_, KeyCode::Esc) => {
            app.dashboard.select_member(None);
            app.focus = Focus::Members;
            app.task_cursor = 0;
        }

        // Filters
        (_, KeyCode::Char('a')) => {
            let value = !app.dashboard.filter().show_only_active;
            app.dashboard.set_show_only_active(value);
        }
        (_, KeyCode::Char('l')) => app.dashboard.set_layout(Layout::List),
        (_, KeyCode::Char('g')) => app.dashboard.set_layout(Layout::Grid),
        (_, KeyCode::Char('v')) => app.dashboard.toggle_layout(),
        (_, KeyCode::Char('/')) => {
            app.search_original = Some(app.dashboard.filter().search_text.clone());
            app.mode = Mode::Search;
            app.focus = Focus::Members;
        }
        _ => {}
    }
}

fn switch_focus(app: &mut App) {
    app.focus = match app.focus {
        Focus::Members if !app.dashboard.selected_member_tasks().is_empty() => Focus::Tasks,
        _ => Focus::Members,
    };
}

fn move_down(app: &mut App) {
    match app.focus {
        Focus::Members => {
            let len = app.dashboard.visible_members().len();
            let next = app.member_cursor + app.member_row_step();
            if next < len {
                app.member_cursor = next;
            }
        }
        Focus::Tasks => app.task_cursor = app.task_cursor.saturating_add(1),
    }
}

fn move_up(app: &mut App) {
    match app.focus {
        Focus::Members => {
            let step = app.member_row_step();
            if app.member_cursor >= step {
                app.member_cursor -= step;
            }
        }
        Focus::Tasks => app.task_cursor = app.task_cursor.saturating_sub(1),
    }
}

/// Left/right only mean something in the grid
fn move_sideways(app: &mut App, forward: bool) {
    if app.focus != Focus::Members || app.dashboard.filter().layout != Layout::Grid {
        return;
    }
    if forward {
        app.member_cursor = app.member_cursor.saturating_add(1);
    } else {
        app.member_cursor = app.member_cursor.saturating_sub(1);
    }
}

fn activate(app: &mut App) {
    match app.focus {
        Focus::Members => {
            let Some(id) = app.cursor_member().map(|m| m.id) else {
                return;
            };
            app.dashboard.select_member(Some(id));
            app.task_cursor = 0;
        }
        Focus::Tasks => toggle_cursor_task(app),
    }
}

fn toggle_cursor_task(app: &mut App) {
    if let Some(id) = app.cursor_task().map(|t| t.id) {
        app.dashboard.toggle_task_done(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DashboardConfig, MemberId, TaskId};
    use crate::ops::dashboard::Dashboard;
    use crate::tui::input::handle_key;
    use crate::tui::input::test_keys::*;

    fn app() -> App {
        App::new(Dashboard::seeded(), &DashboardConfig::default())
    }

    #[test]
    fn quit_keys() {
        let mut a = app();
        handle_key(&mut a, ch('q'));
        assert!(a.should_quit);

        let mut a = app();
        handle_key(&mut a, ctrl('c'));
        assert!(a.should_quit);
    }

    #[test]
    fn move_and_select_member() {
        let mut a = app();
        handle_key(&mut a, ch('j'));
        handle_key(&mut a, key(KeyCode::Down));
        handle_key(&mut a, key(KeyCode::Enter));
        assert_eq!(a.dashboard.filter().selected_member_id, Some(MemberId(3)));
        assert!(a.dashboard.is_selected_member_inactive());
    }

    #[test]
    fn cursor_stops_at_edges() {
        let mut a = app();
        handle_key(&mut a, ch('k'));
        assert_eq!(a.member_cursor, 0);
        handle_key(&mut a, key(KeyCode::End));
        assert_eq!(a.member_cursor, 4);
        handle_key(&mut a, ch('j'));
        assert_eq!(a.member_cursor, 4);
    }

    #[test]
    fn toggle_task_from_tasks_pane() {
        let mut a = app();
        handle_key(&mut a, ch(' ')); // select Alex
        handle_key(&mut a, key(KeyCode::Tab));
        assert_eq!(a.focus, Focus::Tasks);
        handle_key(&mut a, ch('j'));
        handle_key(&mut a, ch('x'));
        assert!(a.dashboard.task(TaskId(104)).unwrap().done);
        handle_key(&mut a, key(KeyCode::Enter));
        assert!(!a.dashboard.task(TaskId(104)).unwrap().done);
        assert!(!a.dashboard.task(TaskId(101)).unwrap().done);
    }

    #[test]
    fn tab_stays_on_members_without_tasks() {
        let mut a = app();
        handle_key(&mut a, key(KeyCode::Tab));
        assert_eq!(a.focus, Focus::Members);
        // Taylor has no tasks
        handle_key(&mut a, key(KeyCode::End));
        handle_key(&mut a, key(KeyCode::Enter));
        handle_key(&mut a, key(KeyCode::Tab));
        assert_eq!(a.focus, Focus::Members);
    }

    #[test]
    fn x_in_members_pane_does_nothing() {
        let mut a = app();
        handle_key(&mut a, key(KeyCode::Enter));
        let before = a.dashboard.tasks().to_vec();
        handle_key(&mut a, ch('x'));
        assert_eq!(a.dashboard.tasks(), before.as_slice());
    }

    #[test]
    fn esc_clears_selection() {
        let mut a = app();
        handle_key(&mut a, key(KeyCode::Enter));
        handle_key(&mut a, key(KeyCode::Tab));
        handle_key(&mut a, key(KeyCode::Esc));
        assert!(a.dashboard.selected_member().is_none());
        assert_eq!(a.focus, Focus::Members);
    }

    #[test]
    fn filter_and_layout_keys() {
        let mut a = app();
        handle_key(&mut a, ch('a'));
        assert!(a.dashboard.filter().show_only_active);
        handle_key(&mut a, ch('a'));
        assert!(!a.dashboard.filter().show_only_active);

        handle_key(&mut a, ch('g'));
        assert_eq!(a.dashboard.filter().layout, Layout::Grid);
        handle_key(&mut a, ch('l'));
        assert_eq!(a.dashboard.filter().layout, Layout::List);
        handle_key(&mut a, ch('v'));
        assert_eq!(a.dashboard.filter().layout, Layout::Grid);
    }

    #[test]
    fn active_filter_keeps_hidden_selection() {
        let mut a = app();
        handle_key(&mut a, key(KeyCode::End));
        handle_key(&mut a, key(KeyCode::Enter)); // Taylor, inactive
        handle_key(&mut a, ch('a'));
        assert_eq!(a.dashboard.visible_members().len(), 3);
        assert_eq!(
            a.dashboard.selected_member().map(|m| m.name.as_str()),
            Some("Taylor Brooks")
        );
        assert_eq!(a.member_cursor, 2);
    }

    #[test]
    fn grid_navigation_uses_columns() {
        let mut a = app();
        a.dashboard.set_layout(Layout::Grid);
        a.grid_columns = 2;
        handle_key(&mut a, ch('j'));
        assert_eq!(a.member_cursor, 2);
        handle_key(&mut a, key(KeyCode::Right));
        assert_eq!(a.member_cursor, 3);
        handle_key(&mut a, ch('j'));
        // 5 would be out of range
        assert_eq!(a.member_cursor, 3);
        handle_key(&mut a, ch('k'));
        assert_eq!(a.member_cursor, 1);
        handle_key(&mut a, key(KeyCode::Left));
        assert_eq!(a.member_cursor, 0);
    }

    #[test]
    fn sideways_ignored_in_list() {
        let mut a = app();
        handle_key(&mut a, key(KeyCode::Right));
        assert_eq!(a.member_cursor, 0);
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut a = app();
        handle_key(&mut a, ch('?'));
        assert!(a.show_help);
        handle_key(&mut a, ch('q'));
        assert!(!a.should_quit);
        handle_key(&mut a, key(KeyCode::Esc));
        assert!(!a.show_help);
    }
}
