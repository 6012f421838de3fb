use serde::Serialize;

use crate::model::member::{Member, Role};
use crate::model::task::Task;
use crate::model::view::Layout;
use crate::ops::stats::{RosterStats, TaskCounts};
use crate::util::text::{fit_to_width, initials};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct MemberJson {
    pub id: u32,
    pub name: String,
    pub role: Role,
    pub active: bool,
    pub initials: String,
}

#[derive(Serialize)]
pub struct MembersJson {
    pub layout: Layout,
    pub show_only_active: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
    pub members: Vec<MemberJson>,
}

#[derive(Serialize)]
pub struct TaskJson {
    pub id: u32,
    pub title: String,
    pub done: bool,
}

#[derive(Serialize)]
pub struct MemberTasksJson {
    /// None when the ID doesn't resolve to a member
    pub member: Option<MemberJson>,
    pub inactive: bool,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct CountsJson {
    pub done: usize,
    pub total: usize,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub active: usize,
    pub inactive: usize,
    pub leaders: usize,
    pub members: usize,
    pub guests: usize,
    pub tasks: CountsJson,
    pub unassigned: usize,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn member_to_json(member: &Member) -> MemberJson {
    MemberJson {
        id: member.id.0,
        name: member.name.clone(),
        role: member.role,
        active: member.is_active,
        initials: initials(&member.name),
    }
}

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id.0,
        title: task.title.clone(),
        done: task.done,
    }
}

fn counts_to_json(counts: &TaskCounts) -> CountsJson {
    CountsJson {
        done: counts.done,
        total: counts.total,
    }
}

pub fn stats_to_json(stats: &RosterStats) -> StatsJson {
    StatsJson {
        active: stats.active,
        inactive: stats.inactive,
        leaders: stats.leaders,
        members: stats.members,
        guests: stats.guests,
        tasks: counts_to_json(&stats.tasks),
        unassigned: stats.unassigned,
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// `  1  [AR] Alex Rivera        Leader  active    0/2`
pub fn format_member_line(member: &Member, counts: &TaskCounts) -> String {
    let status = if member.is_active { "active" } else { "inactive" };
    format!(
        "{:>3}  [{}] {} {} {} {}/{}",
        member.id.0,
        fit_to_width(&initials(&member.name), 2),
        fit_to_width(&member.name, 18),
        fit_to_width(&member.role.to_string(), 7),
        fit_to_width(status, 9),
        counts.done,
        counts.total
    )
    .trim_end()
    .to_string()
}

/// Card cells laid out `columns` per row
pub fn format_member_grid(members: &[&Member], columns: usize) -> Vec<String> {
    members
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|m| fit_to_width(&format!("[{}] {}", initials(&m.name), m.name), 24))
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// `[x] 102 Prepare onboarding doc`
pub fn format_task_line(task: &Task) -> String {
    format!("[{}] {} {}", task.checkbox_char(), task.id, task.title)
}

pub fn format_stats(stats: &RosterStats) -> Vec<String> {
    vec![
        format!(
            "members  {} active, {} inactive",
            stats.active, stats.inactive
        ),
        format!(
            "roles    {} leader, {} member, {} guest",
            stats.leaders, stats.members, stats.guests
        ),
        format!(
            "tasks    {}/{} done, {} open",
            stats.tasks.done,
            stats.tasks.total,
            stats.tasks.open()
        ),
        format!("orphans  {}", stats.unassigned),
    ]
}
