//! Configuration file persistence.
//!
//! This module provides persistence for the registry state:
//! - [`ConfigStore`] - Trait for loading and saving a [`PidwsConfig`]
//! - [`FileConfigStore`] - YAML file-based implementation

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::paths::config_file;
use crate::config::state::PidwsConfig;
use crate::error::{PidwsError, Result};

/// Trait for configuration storage (enables mocking).
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore {
    /// Loads the whole configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    fn load(&self) -> Result<PidwsConfig>;

    /// Overwrites the persisted configuration with `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, config: &PidwsConfig) -> Result<()>;
}

/// YAML file-based configuration store.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    /// Creates a store backed by the per-user configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration path cannot be determined.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(config_file()?))
    }

    /// Creates a store backed by a specific file.
    #[must_use]
    pub const fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file, empty, if it does not exist yet.
    fn ensure_file(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| PidwsError::ConfigWrite(format!("{}: {e}", parent.display())))?;
            }
        }

        tracing::debug!("Creating empty configuration file {}", self.path.display());
        fs::write(&self.path, "")
            .map_err(|e| PidwsError::ConfigWrite(format!("{}: {e}", self.path.display())))?;
        Ok(())
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<PidwsConfig> {
        self.ensure_file()?;

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| PidwsError::ConfigRead(format!("{}: {e}", self.path.display())))?;

        let config = if contents.trim().is_empty() {
            PidwsConfig::default()
        } else {
            serde_yaml::from_str(&contents).map_err(|e| {
                PidwsError::MalformedConfig(format!("{}: {e}", self.path.display()))
            })?
        };

        for advisory in config.advisories() {
            tracing::warn!("{}", advisory.message());
        }

        Ok(config)
    }

    fn save(&self, config: &PidwsConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| PidwsError::ConfigWrite(format!("{}: {e}", parent.display())))?;
            }
        }

        let contents =
            serde_yaml::to_string(config).map_err(|e| PidwsError::ConfigWrite(e.to_string()))?;
        fs::write(&self.path, contents)
            .map_err(|e| PidwsError::ConfigWrite(format!("{}: {e}", self.path.display())))?;

        tracing::debug!("Saved configuration to {}", self.path.display());
        Ok(())
    }
}
