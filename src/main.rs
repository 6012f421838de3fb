use clap::Parser;
use clubdash::cli::commands::Cli;
use clubdash::cli::handlers;
use clubdash::io::{config_io, logging};

fn main() {
    let cli = Cli::parse();

    let config = match config_io::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    // Held until exit so buffered log lines get flushed
    let log_path = logging::resolve_log_path(cli.log_file.as_deref(), &config.log);
    let log_guard = logging::init_logging(&config.log.level, &log_path);
    tracing::info!(command = cli.command.is_some(), "clubdash starting");

    let result = match cli.command {
        // No subcommand → launch TUI
        None => clubdash::tui::run(&config),
        Some(command) => handlers::dispatch(command, cli.json),
    };
    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        // exit() skips destructors
        drop(log_guard);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
