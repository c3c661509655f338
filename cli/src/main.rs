//! pidws - PID workspace helper
//!
//! Keeps a per-user registry of PID workspaces and the repositories they are
//! cloned from, and forwards build commands to the active workspace.

mod cli;
mod config;
mod error;
mod git;
mod process;
mod workspace;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::commands::{self, Context};
use crate::cli::Cli;
use crate::config::settings::env;
use crate::config::{ConfigStore, FileConfigStore, ToolSettings};
use crate::error::Result;
use crate::git::Git2Operations;
use crate::process::SystemRunner;

fn main() {
    let no_arguments = std::env::args_os().len() <= 1;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(env::LOG_LEVEL)
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Run the command
    if let Err(e) = run(&cli, no_arguments) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli, no_arguments: bool) -> Result<()> {
    if let Some(shell) = cli.completions {
        commands::handle_completions(shell);
        return Ok(());
    }

    let store = FileConfigStore::new()?;
    tracing::debug!("Using configuration file {}", store.path().display());
    let mut config = store.load()?;

    if no_arguments {
        return commands::handle_usage(&config);
    }

    let settings = ToolSettings::from_env();
    let cwd = std::env::current_dir()?;
    let git = Git2Operations::new();
    let runner = SystemRunner::new();
    let ctx = Context {
        store: &store,
        git: &git,
        runner: &runner,
        settings: &settings,
        cwd: &cwd,
    };

    commands::dispatch(cli, &ctx, &mut config)
}
