//! Command-line argument parsing.

use clap::{ArgAction, Parser};
use clap_complete::Shell;

/// Manage your PID workspaces and repositories.
///
/// All arguments that are not options are passed to the build tool of the
/// active workspace.
#[derive(Parser, Debug, Default)]
#[command(name = "pidws")]
#[command(version, about, long_about = None)]
#[command(after_help = "All other commands will be passed to the active PID workspace.")]
pub struct Cli {
    /// Open a new shell in the specified workspace.
    #[arg(long, value_name = "WORKSPACE")]
    pub cd: Option<String>,

    /// Create a new workspace in the current directory by cloning REPOSITORY. See --name.
    #[arg(long, value_name = "REPOSITORY")]
    pub create: Option<String>,

    /// Set the workspace used when none is specified (see --use).
    #[arg(long, value_name = "WORKSPACE")]
    pub default: Option<String>,

    /// Name of the new workspace or repository, for --create,
    /// --register-workspace or --register-repository.
    #[arg(long)]
    pub name: Option<String>,

    /// Override the default workspace for this command.
    #[arg(long = "use", value_name = "WORKSPACE")]
    pub use_workspace: Option<String>,

    /// Remove a workspace from the known ones. Files are not deleted.
    #[arg(long, value_name = "WORKSPACE")]
    pub remove_workspace: Option<String>,

    /// Remove a repository from the known ones.
    #[arg(long, value_name = "REPOSITORY")]
    pub remove_repository: Option<String>,

    /// Register an already existing workspace located at PATH.
    #[arg(long, value_name = "PATH")]
    pub register_workspace: Option<String>,

    /// Register a new repository cloned from ADDRESS.
    #[arg(long, value_name = "ADDRESS")]
    pub register_repository: Option<String>,

    /// List known workspaces and repositories.
    #[arg(long)]
    pub list: bool,

    /// Print the --list output as JSON.
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Generate a shell completion script.
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Enable verbose output.
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Arguments forwarded to the build tool of the active workspace.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub build_args: Vec<String>,
}

impl Cli {
    /// The `--use` override, empty when not given.
    #[must_use]
    pub fn workspace_override(&self) -> &str {
        self.use_workspace.as_deref().unwrap_or_default()
    }
}
