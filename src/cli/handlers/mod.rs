use crate::cli::commands::*;
use crate::cli::output::*;
use crate::model::member::{Member, MemberId};
use crate::model::task::TaskId;
use crate::model::view::Layout;
use crate::ops::dashboard::Dashboard;
use crate::ops::stats::{member_task_counts, roster_stats};

/// Cards per row when `members --layout grid` prints as text
const GRID_COLUMNS: usize = 3;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run one subcommand. The no-subcommand case (TUI) is handled in main.rs.
pub fn dispatch(command: Commands, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Members(args) => cmd_members(args, json),
        Commands::Tasks(args) => cmd_tasks(args, json),
        Commands::Stats => cmd_stats(json),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_members(args: MembersArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut dashboard = Dashboard::seeded();
    dashboard.set_show_only_active(args.active);
    if let Some(search) = args.search {
        dashboard.set_search_text(search);
    }
    if let Some(ref name) = args.layout {
        dashboard.set_layout_named(name)?;
    }

    let visible = dashboard.visible_members();
    let filter = dashboard.filter();

    if json {
        let out = MembersJson {
            layout: filter.layout,
            show_only_active: filter.show_only_active,
            search: filter.search_text.clone(),
            members: visible.iter().map(|m| member_to_json(m)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if visible.is_empty() {
        println!("No members to show.");
        return Ok(());
    }

    match filter.layout {
        Layout::List => {
            for member in &visible {
                let counts = member_task_counts(dashboard.tasks(), member.id);
                println!("{}", format_member_line(member, &counts));
            }
        }
        Layout::Grid => {
            for row in format_member_grid(&visible, GRID_COLUMNS) {
                println!("{}", row);
            }
        }
    }
    Ok(())
}

fn cmd_tasks(args: TasksArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut dashboard = Dashboard::seeded();
    dashboard.select_member(Some(MemberId(args.member)));
    for id in &args.toggle {
        if !dashboard.toggle_task_done(TaskId(*id)) {
            eprintln!("warning: no task {}", id);
        }
    }

    let member: Option<&Member> = dashboard.selected_member();
    let tasks = dashboard.selected_member_tasks();

    if json {
        let out = MemberTasksJson {
            member: member.map(member_to_json),
            inactive: dashboard.is_selected_member_inactive(),
            tasks: tasks.iter().map(|t| task_to_json(t)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let Some(member) = member else {
        println!("no such member: {}", args.member);
        return Ok(());
    };

    println!("{} ({})", member.name, member.role);
    if dashboard.is_selected_member_inactive() {
        println!("note: {} is inactive", member.name);
    }
    if tasks.is_empty() {
        println!("No tasks yet.");
    }
    for task in &tasks {
        println!("{}", format_task_line(task));
    }
    Ok(())
}

fn cmd_stats(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = Dashboard::seeded();
    let stats = roster_stats(&dashboard);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats_to_json(&stats))?);
        return Ok(());
    }

    for line in format_stats(&stats) {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(layout: Option<&str>) -> Commands {
        Commands::Members(MembersArgs {
            active: false,
            search: None,
            layout: layout.map(String::from),
        })
    }

    #[test]
    fn dispatch_runs_each_command() {
        assert!(dispatch(Commands::Stats, true).is_ok());
        assert!(dispatch(members(Some("grid")), true).is_ok());
        let tasks = Commands::Tasks(TasksArgs {
            member: 99,
            toggle: vec![],
        });
        assert!(dispatch(tasks, true).is_ok());
    }

    #[test]
    fn dispatch_surfaces_bad_layout() {
        for bad in ["table", "Grid"] {
            let err = dispatch(members(Some(bad)), false).unwrap_err();
            assert!(err.to_string().starts_with("invalid argument"), "{}", err);
        }
    }
}
