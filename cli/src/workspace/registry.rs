//! Registry operations that persist their effect.
//!
//! Each operation edits the in-memory [`PidwsConfig`] and then saves the
//! whole configuration through a [`ConfigStore`]. A failed edit is never
//! saved and leaves the state as it was.

use std::path::Path;

use crate::config::{ConfigStore, PidwsConfig};
use crate::error::Result;
use crate::workspace::types::{RepositoryEntry, WorkspaceEntry};

/// Registers a workspace at `path`.
pub fn register_workspace(
    store: &impl ConfigStore,
    config: &mut PidwsConfig,
    name: &str,
    path: &str,
) -> Result<()> {
    config.add_workspace(name, path)?;
    store.save(config)?;
    tracing::debug!("Registered workspace '{name}' at {path}");
    Ok(())
}

/// Registers a workspace at `<current directory>/<subdirectory>`.
///
/// Returns the registered path. The binary passes its working directory
/// explicitly and uses [`register_workspace_under`].
#[cfg_attr(not(test), allow(dead_code))]
pub fn register_workspace_at_current_dir(
    store: &impl ConfigStore,
    config: &mut PidwsConfig,
    name: &str,
    subdirectory: &str,
) -> Result<String> {
    let cwd = std::env::current_dir()?;
    register_workspace_under(store, config, name, &cwd, subdirectory)
}

/// Registers a workspace at `<base>/<subdirectory>`.
pub fn register_workspace_under(
    store: &impl ConfigStore,
    config: &mut PidwsConfig,
    name: &str,
    base: &Path,
    subdirectory: &str,
) -> Result<String> {
    let path = base.join(subdirectory).to_string_lossy().into_owned();
    register_workspace(store, config, name, &path)?;
    Ok(path)
}

/// Forgets a workspace. Its files are not touched.
pub fn remove_workspace(
    store: &impl ConfigStore,
    config: &mut PidwsConfig,
    name: &str,
) -> Result<WorkspaceEntry> {
    let removed = config.remove_workspace(name)?;
    store.save(config)?;
    if config.default == name {
        tracing::debug!("Default workspace '{name}' no longer exists");
    }
    Ok(removed)
}

pub fn register_repository(
    store: &impl ConfigStore,
    config: &mut PidwsConfig,
    name: &str,
    address: &str,
) -> Result<()> {
    config.add_repository(name, address)?;
    store.save(config)?;
    tracing::debug!("Registered repository '{name}' at {address}");
    Ok(())
}

pub fn remove_repository(
    store: &impl ConfigStore,
    config: &mut PidwsConfig,
    name: &str,
) -> Result<RepositoryEntry> {
    let removed = config.remove_repository(name)?;
    store.save(config)?;
    Ok(removed)
}

/// Makes `name` the workspace used when no override is given.
pub fn set_default_workspace(
    store: &impl ConfigStore,
    config: &mut PidwsConfig,
    name: &str,
) -> Result<()> {
    config.set_default(name)?;
    store.save(config)?;
    Ok(())
}
