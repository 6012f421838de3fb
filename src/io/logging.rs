use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::model::config::LogConfig;

/// Where logs go when neither the CLI nor the config names a file
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("clubdash.log")
}

/// Pick the log file: CLI flag, then config, then the temp-dir default.
pub fn resolve_log_path(cli: Option<&Path>, config: &LogConfig) -> PathBuf {
    cli.map(Path::to_path_buf)
        .or_else(|| config.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(default_log_path)
}

/// Initialize file-based logging. Never stdout: the TUI owns the terminal.
///
/// The returned guard flushes buffered entries on drop and must be held
/// until shutdown. Returns None if the path has no usable file name, its
/// directory can't be created or opened, or a subscriber is already
/// installed. Logging is best effort: a bad path never stops the program.
pub fn init_logging(level: &str, path: &Path) -> Option<WorkerGuard> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let file_name = path.file_name()?.to_str()?;

    let file_appender = match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
    {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("warning: logging disabled, cannot open {}: {}", path.display(), e);
            return None;
        }
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}
