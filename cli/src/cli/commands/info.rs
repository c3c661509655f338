//! Informational commands: usage, registry listing and completions.

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::config::PidwsConfig;
use crate::error::Result;

/// Prints the introduction, the current default workspace and usage.
///
/// Shown when pidws is run without any argument.
pub fn handle_usage(config: &PidwsConfig) -> Result<()> {
    println!("pidws is a utility to help you manage and interact with your PID workspaces.");
    println!("If you want to find out more about PID, go and check http://pid.lirmm.net/pid-framework");

    if let Ok(path) = config.find_workspace(&config.default) {
        println!(
            "\nThe current default workspace is '{}' ({path}).\n",
            config.default
        );
    }

    Cli::command().print_help()?;
    Ok(())
}

/// Handles `--list [--json]`.
pub fn handle_list(config: &PidwsConfig, json: bool) -> Result<()> {
    print!("{}", render_list(config, json)?);
    Ok(())
}

/// Renders the registry, marking the default workspace with `*`.
pub fn render_list(config: &PidwsConfig, json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(config)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();

    if config.workspaces.is_empty() {
        out.push_str("No workspaces registered.\n");
    } else {
        out.push_str("Workspaces:\n");
        for ws in &config.workspaces {
            let marker = if ws.name == config.default { '*' } else { ' ' };
            out.push_str(&format!("  {marker} {} ({})\n", ws.name, ws.path));
        }
    }

    if !config.default.is_empty() && !config.workspace_exists(&config.default) {
        out.push_str(&format!(
            "\nDefault workspace '{}' is not registered.\n",
            config.default
        ));
    }

    if config.repositories.is_empty() {
        out.push_str("\nNo repositories registered.\n");
    } else {
        out.push_str("\nRepositories:\n");
        for repo in &config.repositories {
            out.push_str(&format!("    {} ({})\n", repo.name, repo.address));
        }
    }

    Ok(out)
}

/// Handles `--completions <SHELL>`.
pub fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "pidws", &mut std::io::stdout());
}
