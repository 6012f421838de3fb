use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{DashboardConfig, Layout, Member, Task};
use crate::ops::dashboard::Dashboard;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the search box; every keystroke updates the filter
    Search,
}

/// Which pane the cursor keys drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Members,
    Tasks,
}

/// Main application state
pub struct App {
    /// The state engine. Every filter/selection/task change goes through it.
    pub dashboard: Dashboard,
    pub mode: Mode,
    pub focus: Focus,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// Cursor index into `visible_members()`
    pub member_cursor: usize,
    /// Cursor index into `selected_member_tasks()`
    pub task_cursor: usize,
    /// First visible row of the members pane
    pub member_scroll: usize,
    /// Columns the grid was last drawn with (for up/down movement)
    pub grid_columns: usize,
    /// Search text before entering search mode, restored on Esc
    pub search_original: Option<String>,
}

impl App {
    pub fn new(dashboard: Dashboard, config: &DashboardConfig) -> Self {
        App {
            dashboard,
            mode: Mode::Navigate,
            focus: Focus::Members,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            show_help: false,
            member_cursor: 0,
            task_cursor: 0,
            member_scroll: 0,
            grid_columns: 1,
            search_original: None,
        }
    }

    /// The member under the cursor, if the roster isn't empty
    pub fn cursor_member(&self) -> Option<&Member> {
        self.dashboard.visible_members().get(self.member_cursor).copied()
    }

    /// The task under the cursor, if the tasks pane has any
    pub fn cursor_task(&self) -> Option<&Task> {
        self.dashboard
            .selected_member_tasks()
            .get(self.task_cursor)
            .copied()
    }

    /// Keep both cursors inside their lists. Call after any change that can
    /// shrink either list (filters, selection).
    pub fn clamp_cursors(&mut self) {
        let members = self.dashboard.visible_members().len();
        self.member_cursor = self.member_cursor.min(members.saturating_sub(1));
        let tasks = self.dashboard.selected_member_tasks().len();
        self.task_cursor = self.task_cursor.min(tasks.saturating_sub(1));
        if tasks == 0 && self.focus == Focus::Tasks {
            self.focus = Focus::Members;
        }
    }

    /// How far one up/down step moves in the members pane
    pub fn member_row_step(&self) -> usize {
        match self.dashboard.filter().layout {
            Layout::List => 1,
            Layout::Grid => self.grid_columns.max(1),
        }
    }
}

/// Run the TUI application
pub fn run(config: &DashboardConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(Dashboard::seeded(), config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::info!("dashboard started");
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("dashboard exiting");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
