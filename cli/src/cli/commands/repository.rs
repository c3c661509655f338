//! Repository command handlers.

use crate::config::{ConfigStore, PidwsConfig};
use crate::error::{PidwsError, Result};
use crate::workspace::registry;

/// Handles `--register-repository <ADDRESS> --name <NAME>`.
pub fn handle_register_repository(
    store: &impl ConfigStore,
    config: &mut PidwsConfig,
    name: Option<&str>,
    address: &str,
) -> Result<()> {
    let name = name
        .filter(|n| !n.is_empty())
        .ok_or(PidwsError::MissingArgument {
            flag: "register-repository",
            required: "name",
        })?;

    registry::register_repository(store, config, name, address)?;
    println!("The '{name}' repository ({address}) has been registered successfully.");
    Ok(())
}

/// Handles `--remove-repository <NAME>`.
pub fn handle_remove_repository(
    store: &impl ConfigStore,
    config: &mut PidwsConfig,
    name: &str,
) -> Result<()> {
    let removed = registry::remove_repository(store, config, name)?;
    println!(
        "The '{}' repository ({}) has been successfully removed from the known repositories.",
        removed.name, removed.address
    );
    Ok(())
}
