use std::collections::HashSet;

use crate::model::member::{Member, MemberId};
use crate::model::seed::{seed_members, seed_tasks};
use crate::model::task::{Task, TaskId};
use crate::model::view::{FilterState, Layout};

use super::filter;

pub use crate::model::error::DashboardError;

/// The dashboard state engine.
///
/// Owns the member and task collections plus the filter/selection state.
/// All writes go through the mutation methods below; every query is a pure
/// function of the current fields and is recomputed on each call.
#[derive(Debug)]
pub struct Dashboard {
    members: Vec<Member>,
    tasks: Vec<Task>,
    filter: FilterState,
}

impl Dashboard {
    /// Build an engine over the given collections with default filters.
    /// Member and task IDs must each be unique.
    pub fn new(members: Vec<Member>, tasks: Vec<Task>) -> Result<Self, DashboardError> {
        let mut seen = HashSet::new();
        for m in &members {
            if !seen.insert(m.id.0) {
                return Err(DashboardError::DuplicateId {
                    kind: "member",
                    id: m.id.0,
                });
            }
        }
        seen.clear();
        for t in &tasks {
            if !seen.insert(t.id.0) {
                return Err(DashboardError::DuplicateId {
                    kind: "task",
                    id: t.id.0,
                });
            }
        }
        tracing::debug!(members = members.len(), tasks = tasks.len(), "dashboard loaded");
        Ok(Dashboard {
            members,
            tasks,
            filter: FilterState::default(),
        })
    }

    /// The engine over the built-in seed roster
    pub fn seeded() -> Self {
        Dashboard {
            members: seed_members(),
            tasks: seed_tasks(),
            filter: FilterState::default(),
        }
    }

    /// Replace the whole filter state
    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    pub fn set_show_only_active(&mut self, value: bool) {
        tracing::debug!(value, "set_show_only_active");
        self.filter.show_only_active = value;
    }

    pub fn set_layout(&mut self, layout: Layout) {
        tracing::debug!(layout = layout.key(), "set_layout");
        self.filter.layout = layout;
    }

    /// Set the layout from its name. Anything but `list`/`grid` is an
    /// `InvalidArgument` and leaves the state untouched.
    pub fn set_layout_named(&mut self, name: &str) -> Result<(), DashboardError> {
        match name.parse::<Layout>() {
            Ok(layout) => {
                self.set_layout(layout);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(name, "rejected layout");
                Err(e)
            }
        }
    }

    pub fn toggle_layout(&mut self) {
        self.set_layout(self.filter.layout.toggled());
    }

    /// Store the search text verbatim; trimming happens at match time.
    pub fn set_search_text(&mut self, value: impl Into<String>) {
        self.filter.search_text = value.into();
        tracing::debug!(search = %self.filter.search_text, "set_search_text");
    }

    /// Select a member by ID, or clear the selection. The ID is not checked.
    pub fn select_member(&mut self, id: Option<MemberId>) {
        tracing::debug!(id = ?id.map(|i| i.0), "select_member");
        self.filter.selected_member_id = id;
    }

    /// Flip a task's `done` flag. Unknown IDs are ignored.
    /// Returns whether a task was found.
    pub fn toggle_task_done(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = !task.done;
                tracing::debug!(task = id.0, done = task.done, "toggle_task_done");
                true
            }
            None => {
                tracing::debug!(task = id.0, "toggle_task_done: no such task");
                false
            }
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn visible_members(&self) -> Vec<&Member> {
        filter::visible_members(&self.members, &self.filter)
    }

    /// The selected member, resolved against the full collection so that a
    /// member hidden by filters stays selected.
    pub fn selected_member(&self) -> Option<&Member> {
        let id = self.filter.selected_member_id?;
        filter::find_member(&self.members, id)
    }

    pub fn selected_member_tasks(&self) -> Vec<&Task> {
        match self.selected_member() {
            Some(member) => filter::tasks_for_member(&self.tasks, member.id),
            None => Vec::new(),
        }
    }

    pub fn is_selected_member_inactive(&self) -> bool {
        self.selected_member().is_some_and(|m| !m.is_active)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Dashboard::seeded()
    }
}
