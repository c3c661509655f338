//! Forwarding trailing arguments to the build tool.

use crate::config::settings::build_dir;
use crate::config::{PidwsConfig, ToolSettings};
use crate::error::Result;
use crate::process::ProcessRunner;

/// Runs the build tool with `args` in the active workspace.
///
/// The active workspace is `workspace_override` when non-empty, the
/// default workspace otherwise.
pub fn handle_forward(
    config: &PidwsConfig,
    runner: &impl ProcessRunner,
    settings: &ToolSettings,
    workspace_override: &str,
    args: &[String],
) -> Result<()> {
    let name = config.resolve_active_workspace(workspace_override)?;
    let path = config.find_workspace(name)?;

    tracing::debug!("Forwarding {args:?} to workspace '{name}'");
    runner.run(&settings.make, args, &build_dir(path))
}
