use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "clubdash", about = concat!("clubdash v", env!("CARGO_PKG_VERSION"), " - club roster and task dashboard"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: <config dir>/clubdash/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs here instead of the configured/default log file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List members that pass the given filters
    Members(MembersArgs),
    /// Show a member's tasks, optionally toggling some first
    Tasks(TasksArgs),
    /// Show roster and task counts
    Stats,
}

#[derive(Args)]
pub struct MembersArgs {
    /// Only active members
    #[arg(long)]
    pub active: bool,
    /// Case-insensitive name search
    #[arg(long)]
    pub search: Option<String>,
    /// Output layout: list or grid
    #[arg(long)]
    pub layout: Option<String>,
}

#[derive(Args)]
pub struct TasksArgs {
    /// Member ID
    pub member: u32,
    /// Toggle a task's done flag before printing (repeatable)
    #[arg(long = "toggle", value_name = "TASK_ID")]
    pub toggle: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["clubdash"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn members_flags() {
        let cli = Cli::try_parse_from([
            "clubdash", "members", "--active", "--search", "  rivera ", "--layout", "grid", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Some(Commands::Members(args)) => {
                assert!(args.active);
                assert_eq!(args.search.as_deref(), Some("  rivera "));
                assert_eq!(args.layout.as_deref(), Some("grid"));
            }
            _ => panic!("expected members"),
        }
    }

    #[test]
    fn tasks_toggles_repeat() {
        let cli =
            Cli::try_parse_from(["clubdash", "tasks", "1", "--toggle", "101", "--toggle", "104"])
                .unwrap();
        match cli.command {
            Some(Commands::Tasks(args)) => {
                assert_eq!(args.member, 1);
                assert_eq!(args.toggle, vec![101, 104]);
            }
            _ => panic!("expected tasks"),
        }
    }

    #[test]
    fn member_id_must_be_numeric() {
        assert!(Cli::try_parse_from(["clubdash", "tasks", "alex"]).is_err());
    }
}
