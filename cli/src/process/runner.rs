//! Running external programs inside a workspace.
//!
//! - [`ProcessRunner`] - Trait for the configure, build and shell steps
//! - [`SystemRunner`] - Implementation on top of [`std::process::Command`]

use std::path::Path;
use std::process::Command;

use crate::error::Result;
use crate::process::error::ProcessError;

/// Trait for running external programs (enables mocking in tests).
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner {
    /// Runs `program` with `args` in `working_dir`, inheriting stdio.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory is missing, the program cannot be
    /// started, or it exits unsuccessfully.
    fn run(&self, program: &str, args: &[String], working_dir: &Path) -> Result<()>;

    /// Replaces the current process with an interactive `shell` in `working_dir`.
    ///
    /// Returns only if the shell could not be started.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory is missing or the shell cannot start.
    fn replace_with_shell(&self, shell: &str, working_dir: &Path) -> Result<()>;
}

/// Runs programs as child processes of pidws.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn ensure_dir(program: &str, dir: &Path) -> Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(ProcessError::MissingDirectory {
            program: program.to_string(),
            dir: dir.display().to_string(),
        }
        .into())
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], working_dir: &Path) -> Result<()> {
        ensure_dir(program, working_dir)?;

        tracing::debug!("Running {program} {args:?} in {}", working_dir.display());
        let status = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .status()
            .map_err(|source| ProcessError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ProcessError::Failed {
                program: program.to_string(),
                status,
            }
            .into())
        }
    }

    #[cfg(unix)]
    fn replace_with_shell(&self, shell: &str, working_dir: &Path) -> Result<()> {
        use std::os::unix::process::CommandExt;

        ensure_dir(shell, working_dir)?;

        tracing::debug!("Replacing pidws with {shell} in {}", working_dir.display());
        // exec only returns on failure
        let source = Command::new(shell).current_dir(working_dir).exec();
        Err(ProcessError::Spawn {
            program: shell.to_string(),
            source,
        }
        .into())
    }

    #[cfg(not(unix))]
    fn replace_with_shell(&self, shell: &str, working_dir: &Path) -> Result<()> {
        self.run(shell, &[], working_dir)
    }
}
