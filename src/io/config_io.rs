use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::model::config::DashboardConfig;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Default config location: `<config dir>/clubdash/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("clubdash").join("config.toml"))
}

/// Load the config.
///
/// An explicit path must exist. The default path is optional: if it is
/// missing (or there is no config dir at all) the defaults are used.
pub fn load_config(explicit: Option<&Path>) -> Result<DashboardConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let Some(path) = default_config_path() else {
        return Ok(DashboardConfig::default());
    };
    match read_config(&path) {
        Err(ConfigError::ReadError { source, .. }) if source.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(DashboardConfig::default())
        }
        other => other,
    }
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<DashboardConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: DashboardConfig = toml::from_str(&text)?;
    Ok(config)
}
