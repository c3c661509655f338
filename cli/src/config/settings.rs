//! Tool settings resolved from the environment.

use std::path::{Path, PathBuf};

/// Environment variables that can override settings.
pub mod env {
    pub const CONFIG_PATH: &str = "PIDWS_CONFIG";
    pub const LOG_LEVEL: &str = "PIDWS_LOG";
    pub const CMAKE: &str = "PIDWS_CMAKE";
    pub const MAKE: &str = "PIDWS_MAKE";
    pub const SHELL: &str = "SHELL";
}

/// Subdirectory of a workspace where the build system lives.
pub const BUILD_SUBDIR: &str = "pid";

/// Name given to a created workspace when `--name` is not passed.
pub const DEFAULT_WORKSPACE_NAME: &str = "pid";

const DEFAULT_CMAKE: &str = "cmake";
const DEFAULT_MAKE: &str = "make";
const DEFAULT_SHELL: &str = "/bin/sh";

/// External programs used to configure, build and enter workspaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSettings {
    /// Program running the configure step.
    pub cmake: String,
    /// Program receiving forwarded build arguments.
    pub make: String,
    /// Interactive shell for `--cd`.
    pub shell: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            cmake: DEFAULT_CMAKE.to_string(),
            make: DEFAULT_MAKE.to_string(),
            shell: DEFAULT_SHELL.to_string(),
        }
    }
}

impl ToolSettings {
    /// Default settings with environment variable overrides applied.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up through `lookup`. Empty values are ignored.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|v: &String| !v.is_empty());

        if let Some(cmake) = lookup(env::CMAKE) {
            self.cmake = cmake;
        }
        if let Some(make) = lookup(env::MAKE) {
            self.make = make;
        }
        if let Some(shell) = lookup(env::SHELL) {
            self.shell = shell;
        }

        self
    }
}

/// Directory where the configure step and build tool run for a workspace.
#[must_use]
pub fn build_dir(workspace_path: &str) -> PathBuf {
    Path::new(workspace_path).join(BUILD_SUBDIR)
}

/// Directory name a created workspace is cloned into.
#[must_use]
pub fn clone_dir_name(workspace_name: &str) -> String {
    format!("{workspace_name}-workspace")
}
