use crate::model::member::{MemberId, Role};
use crate::model::task::Task;

use super::dashboard::Dashboard;

/// Done/total counts for one member's tasks
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    pub done: usize,
    pub total: usize,
}

impl TaskCounts {
    pub fn open(&self) -> usize {
        self.total - self.done
    }
}

/// Roster-wide counts
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RosterStats {
    pub active: usize,
    pub inactive: usize,
    pub leaders: usize,
    pub members: usize,
    pub guests: usize,
    pub tasks: TaskCounts,
    /// Tasks whose assignee is not on the roster
    pub unassigned: usize,
}

/// Count a member's tasks
pub fn member_task_counts(tasks: &[Task], id: MemberId) -> TaskCounts {
    let mut counts = TaskCounts::default();
    for task in tasks.iter().filter(|t| t.assigned_to == id) {
        counts.total += 1;
        if task.done {
            counts.done += 1;
        }
    }
    counts
}

/// Counts over the whole roster, ignoring the current filters
pub fn roster_stats(dashboard: &Dashboard) -> RosterStats {
    let mut stats = RosterStats::default();
    for member in dashboard.members() {
        if member.is_active {
            stats.active += 1;
        } else {
            stats.inactive += 1;
        }
        match member.role {
            Role::Leader => stats.leaders += 1,
            Role::Member => stats.members += 1,
            Role::Guest => stats.guests += 1,
        }
    }
    for task in dashboard.tasks() {
        stats.tasks.total += 1;
        if task.done {
            stats.tasks.done += 1;
        }
        if !dashboard.members().iter().any(|m| m.id == task.assigned_to) {
            stats.unassigned += 1;
        }
    }
    stats
}
