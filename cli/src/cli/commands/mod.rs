//! Command implementations.

pub mod build;
pub mod info;
pub mod repository;
pub mod workspace;

use std::path::Path;

pub use build::handle_forward;
pub use info::{handle_completions, handle_list, handle_usage};
pub use repository::{handle_register_repository, handle_remove_repository};
pub use workspace::{
    handle_cd, handle_create, handle_register_workspace, handle_remove_workspace,
    handle_set_default,
};

use crate::cli::Cli;
use crate::config::{ConfigStore, PidwsConfig, ToolSettings};
use crate::error::Result;
use crate::git::GitOperations;
use crate::process::ProcessRunner;

/// Collaborators shared by all command handlers of one invocation.
pub struct Context<'a, S, G, R> {
    pub store: &'a S,
    pub git: &'a G,
    pub runner: &'a R,
    pub settings: &'a ToolSettings,
    pub cwd: &'a Path,
}

/// Runs every action requested on the command line, in a fixed order.
///
/// Removals come first, then registrations, creation, default selection,
/// listing, the shell and finally the forwarded build command. The first
/// failure stops the sequence; earlier actions stay persisted.
pub fn dispatch<S, G, R>(
    cli: &Cli,
    ctx: &Context<'_, S, G, R>,
    config: &mut PidwsConfig,
) -> Result<()>
where
    S: ConfigStore,
    G: GitOperations,
    R: ProcessRunner,
{
    let name = cli.name.as_deref();

    if let Some(ws) = &cli.remove_workspace {
        handle_remove_workspace(ctx.store, config, ws)?;
    }
    if let Some(repo) = &cli.remove_repository {
        handle_remove_repository(ctx.store, config, repo)?;
    }
    if let Some(path) = &cli.register_workspace {
        handle_register_workspace(ctx.store, config, name, path)?;
    }
    if let Some(address) = &cli.register_repository {
        handle_register_repository(ctx.store, config, name, address)?;
    }
    if let Some(repo) = &cli.create {
        handle_create(
            ctx.store,
            config,
            ctx.git,
            ctx.runner,
            ctx.settings,
            repo,
            name,
            ctx.cwd,
        )?;
    }
    if let Some(ws) = &cli.default {
        handle_set_default(ctx.store, config, ws)?;
    }
    if cli.list {
        handle_list(config, cli.json)?;
    }
    if let Some(ws) = &cli.cd {
        handle_cd(config, ctx.runner, ctx.settings, ws)?;
    }
    if !cli.build_args.is_empty() {
        handle_forward(
            config,
            ctx.runner,
            ctx.settings,
            cli.workspace_override(),
            &cli.build_args,
        )?;
    }

    Ok(())
}
