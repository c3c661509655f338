//! Workspace command handlers for the pidws CLI.
//!
//! This module implements the workspace management flags:
//! - [`handle_register_workspace`] - Register an existing workspace (`--register-workspace`)
//! - [`handle_remove_workspace`] - Forget a workspace (`--remove-workspace`)
//! - [`handle_create`] - Clone a repository into a new workspace (`--create`)
//! - [`handle_set_default`] - Select the default workspace (`--default`)
//! - [`handle_cd`] - Open a shell in a workspace (`--cd`)
//!
//! These commands use [`crate::workspace::registry`] for persistence,
//! [`crate::git`] for cloning and [`crate::process`] for the configure step
//! and the shell.

use std::path::Path;

use crate::config::settings::{build_dir, clone_dir_name, DEFAULT_WORKSPACE_NAME};
use crate::config::state::validate_workspace_name;
use crate::config::{ConfigStore, PidwsConfig, ToolSettings};
use crate::error::{PidwsError, Result};
use crate::git::GitOperations;
use crate::process::ProcessRunner;
use crate::workspace::{registry, RegistryError};

/// Prints `The '<name>' workspace (<path>) <message>.`
pub fn print_workspace_success(config: &PidwsConfig, name: &str, message: &str) {
    let path = config.find_workspace(name).unwrap_or_default();
    println!("The '{name}' workspace ({path}) {message}.");
}

/// Handles `--register-workspace <PATH> --name <NAME>`.
///
/// # Errors
///
/// Returns an error if `--name` is missing, the name is taken, or the
/// configuration cannot be saved.
pub fn handle_register_workspace(
    store: &impl ConfigStore,
    config: &mut PidwsConfig,
    name: Option<&str>,
    path: &str,
) -> Result<()> {
    let name = name
        .filter(|n| !n.is_empty())
        .ok_or(PidwsError::MissingArgument {
            flag: "register-workspace",
            required: "name",
        })?;

    registry::register_workspace(store, config, name, path)?;
    print_workspace_success(config, name, "has been registered successfully");
    Ok(())
}

/// Handles `--remove-workspace <NAME>`.
///
/// The workspace files are left on disk.
pub fn handle_remove_workspace(
    store: &impl ConfigStore,
    config: &mut PidwsConfig,
    name: &str,
) -> Result<()> {
    let removed = registry::remove_workspace(store, config, name)?;
    println!(
        "The '{}' workspace ({}) has been successfully removed from the known workspaces.",
        removed.name, removed.path
    );
    Ok(())
}

/// Handles `--create <REPOSITORY> [--name <NAME>]`.
///
/// Clones the repository into `<cwd>/<name>-workspace`, registers it and
/// runs the configure step in its build directory.
///
/// # Errors
///
/// Returns an error if the workspace name is invalid or taken (both
/// checked before cloning), the repository is unknown, or cloning,
/// registering or configuring fails. A workspace whose configure step
/// fails stays registered.
#[allow(clippy::too_many_arguments)]
pub fn handle_create(
    store: &impl ConfigStore,
    config: &mut PidwsConfig,
    git: &impl GitOperations,
    runner: &impl ProcessRunner,
    settings: &ToolSettings,
    repository: &str,
    name: Option<&str>,
    cwd: &Path,
) -> Result<()> {
    let name = name
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_WORKSPACE_NAME);

    validate_workspace_name(name)?;
    if config.workspace_exists(name) {
        return Err(RegistryError::WorkspaceAlreadyExists(name.to_string()).into());
    }

    let repo = config.find_repository(repository)?.clone();
    let dir_name = clone_dir_name(name);

    git.clone_repository(&repo.address, &cwd.join(&dir_name))?;

    let path = registry::register_workspace_under(store, config, name, cwd, &dir_name)?;

    tracing::info!("Configuring workspace '{name}'");
    runner.run(&settings.cmake, &["..".to_string()], &build_dir(&path))?;

    print_workspace_success(
        config,
        name,
        &format!(
            "has been successfully created using the '{}' repository",
            repo.name
        ),
    );
    Ok(())
}

/// Handles `--default <NAME>`.
pub fn handle_set_default(
    store: &impl ConfigStore,
    config: &mut PidwsConfig,
    name: &str,
) -> Result<()> {
    registry::set_default_workspace(store, config, name)?;
    print_workspace_success(config, name, "is now the default workspace");
    Ok(())
}

/// Handles `--cd <NAME>`.
///
/// On Unix this only returns if the shell could not be started.
pub fn handle_cd(
    config: &PidwsConfig,
    runner: &impl ProcessRunner,
    settings: &ToolSettings,
    name: &str,
) -> Result<()> {
    let path = config.find_workspace(name)?;
    runner.replace_with_shell(&settings.shell, Path::new(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockConfigStore;
    use crate::git::{GitError, MockGitOperations};
    use crate::process::{MockProcessRunner, ProcessError};
    use std::path::PathBuf;

    fn saving_store() -> MockConfigStore {
        let mut store = MockConfigStore::new();
        store.expect_save().returning(|_| Ok(()));
        store
    }

    fn config_with_repo() -> PidwsConfig {
        let mut config = PidwsConfig::default();
        config
            .add_repository("official", "https://example/pid-workspace.git")
            .unwrap();
        config
    }

    #[test]
    fn register_workspace_requires_name() {
        let store = MockConfigStore::new();
        let mut config = PidwsConfig::default();

        let err = handle_register_workspace(&store, &mut config, None, "/ws").unwrap_err();

        assert!(matches!(err, PidwsError::MissingArgument { .. }));
        assert!(config.workspaces.is_empty());
    }

    #[test]
    fn register_workspace_with_name() {
        let store = saving_store();
        let mut config = PidwsConfig::default();

        handle_register_workspace(&store, &mut config, Some("dev"), "/ws/dev").unwrap();

        assert_eq!(config.find_workspace("dev").unwrap(), "/ws/dev");
    }

    #[test]
    fn remove_unknown_workspace_fails() {
        let store = MockConfigStore::new();
        let mut config = PidwsConfig::default();

        assert!(handle_remove_workspace(&store, &mut config, "ghost")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn create_clones_registers_and_configures() {
        let store = saving_store();
        let mut config = config_with_repo();
        let cwd = PathBuf::from("/home/user");

        let mut git = MockGitOperations::new();
        git.expect_clone_repository()
            .withf(|address, destination| {
                address == "https://example/pid-workspace.git"
                    && destination == Path::new("/home/user/dev-workspace")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|program, args, dir| {
                program == "cmake"
                    && args == [".."]
                    && dir == Path::new("/home/user/dev-workspace/pid")
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        handle_create(
            &store,
            &mut config,
            &git,
            &runner,
            &ToolSettings::default(),
            "official",
            Some("dev"),
            &cwd,
        )
        .unwrap();

        assert_eq!(
            PathBuf::from(config.find_workspace("dev").unwrap()),
            PathBuf::from("/home/user/dev-workspace")
        );
    }

    #[test]
    fn create_defaults_name_to_pid() {
        let store = saving_store();
        let mut config = config_with_repo();

        let mut git = MockGitOperations::new();
        git.expect_clone_repository()
            .withf(|_, destination| destination.ends_with("pid-workspace"))
            .returning(|_, _| Ok(()));
        let mut runner = MockProcessRunner::new();
        runner.expect_run().returning(|_, _, _| Ok(()));

        handle_create(
            &store,
            &mut config,
            &git,
            &runner,
            &ToolSettings::default(),
            "official",
            None,
            Path::new("/tmp"),
        )
        .unwrap();

        assert!(config.workspace_exists("pid"));
    }

    #[test]
    fn create_existing_name_fails_before_cloning() {
        let store = MockConfigStore::new();
        let mut config = config_with_repo();
        config.add_workspace("dev", "/ws/dev").unwrap();

        let mut git = MockGitOperations::new();
        git.expect_clone_repository().times(0);
        let runner = MockProcessRunner::new();

        let err = handle_create(
            &store,
            &mut config,
            &git,
            &runner,
            &ToolSettings::default(),
            "official",
            Some("dev"),
            Path::new("/tmp"),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            PidwsError::Registry(RegistryError::WorkspaceAlreadyExists(_))
        ));
    }

    #[test]
    fn create_rejects_escaping_names_before_cloning() {
        let long_name = "a".repeat(101);

        for name in ["../x", "a/b", long_name.as_str()] {
            let store = MockConfigStore::new();
            let mut config = config_with_repo();

            let mut git = MockGitOperations::new();
            git.expect_clone_repository().times(0);
            let runner = MockProcessRunner::new();

            let err = handle_create(
                &store,
                &mut config,
                &git,
                &runner,
                &ToolSettings::default(),
                "official",
                Some(name),
                Path::new("/home/user/ws"),
            )
            .unwrap_err();

            assert!(
                matches!(err, PidwsError::Registry(RegistryError::InvalidName(..))),
                "{name}: {err}"
            );
            assert!(config.workspaces.is_empty());
        }
    }

    #[test]
    fn create_unknown_repository_fails() {
        let store = MockConfigStore::new();
        let mut config = PidwsConfig::default();
        let git = MockGitOperations::new();
        let runner = MockProcessRunner::new();

        let err = handle_create(
            &store,
            &mut config,
            &git,
            &runner,
            &ToolSettings::default(),
            "missing",
            None,
            Path::new("/tmp"),
        )
        .unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn failed_clone_registers_nothing() {
        let store = MockConfigStore::new();
        let mut config = config_with_repo();

        let mut git = MockGitOperations::new();
        git.expect_clone_repository().returning(|address, _| {
            Err(GitError::CloneFailed {
                address: address.to_string(),
                message: "unreachable".to_string(),
            }
            .into())
        });
        let runner = MockProcessRunner::new();

        let result = handle_create(
            &store,
            &mut config,
            &git,
            &runner,
            &ToolSettings::default(),
            "official",
            None,
            Path::new("/tmp"),
        );

        assert!(matches!(result, Err(PidwsError::Git(_))));
        assert!(config.workspaces.is_empty());
    }

    #[test]
    fn failed_configure_keeps_registration() {
        let store = saving_store();
        let mut config = config_with_repo();

        let mut git = MockGitOperations::new();
        git.expect_clone_repository().returning(|_, _| Ok(()));
        let mut runner = MockProcessRunner::new();
        runner.expect_run().returning(|program, _, dir| {
            Err(ProcessError::MissingDirectory {
                program: program.to_string(),
                dir: dir.display().to_string(),
            }
            .into())
        });

        let result = handle_create(
            &store,
            &mut config,
            &git,
            &runner,
            &ToolSettings::default(),
            "official",
            None,
            Path::new("/tmp"),
        );

        assert!(matches!(result, Err(PidwsError::Process(_))));
        assert!(config.workspace_exists("pid"));
    }

    #[test]
    fn set_default_known_workspace() {
        let store = saving_store();
        let mut config = PidwsConfig::default();
        config.add_workspace("dev", "/ws/dev").unwrap();

        handle_set_default(&store, &mut config, "dev").unwrap();

        assert_eq!(config.default, "dev");
    }

    #[test]
    fn cd_uses_configured_shell_in_workspace() {
        let mut config = PidwsConfig::default();
        config.add_workspace("dev", "/ws/dev").unwrap();
        let settings = ToolSettings {
            shell: "/usr/bin/zsh".to_string(),
            ..ToolSettings::default()
        };

        let mut runner = MockProcessRunner::new();
        runner
            .expect_replace_with_shell()
            .withf(|shell, dir| shell == "/usr/bin/zsh" && dir == Path::new("/ws/dev"))
            .times(1)
            .returning(|_, _| Ok(()));

        handle_cd(&config, &runner, &settings, "dev").unwrap();
    }

    #[test]
    fn cd_unknown_workspace_fails() {
        let config = PidwsConfig::default();
        let runner = MockProcessRunner::new();

        let err = handle_cd(&config, &runner, &ToolSettings::default(), "ghost").unwrap_err();

        assert!(err.is_not_found());
    }
}
