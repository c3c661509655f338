//! Per-user path utilities for pidws.

use std::path::PathBuf;

use crate::config::settings::env;
use crate::error::{PidwsError, Result};

/// File name of the configuration file inside the home directory.
pub const CONFIG_FILE_NAME: &str = ".pidws.yaml";

/// Get the main configuration file path.
///
/// `PIDWS_CONFIG` overrides the default of `~/.pidws.yaml`.
pub fn config_file() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(env::CONFIG_PATH).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let home = dirs::home_dir()
        .ok_or_else(|| PidwsError::Config("Cannot determine home directory".to_string()))?;
    Ok(home.join(CONFIG_FILE_NAME))
}
