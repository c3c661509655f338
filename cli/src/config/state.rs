//! The persisted registry state.
//!
//! [`PidwsConfig`] is the whole content of the configuration file: the known
//! workspaces, the default workspace and the known repositories. Queries and
//! in-memory edits live here; persisting an edit is the job of
//! [`crate::workspace::registry`].

use serde::{Deserialize, Deserializer, Serialize};

use crate::workspace::{RegistryError, RepositoryEntry, WorkspaceEntry};

/// Maximum length, in characters, accepted for a workspace name.
const MAX_NAME_LEN: usize = 100;

/// Registry of workspaces and repositories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PidwsConfig {
    /// Known workspaces, in registration order.
    #[serde(deserialize_with = "null_as_default")]
    pub workspaces: Vec<WorkspaceEntry>,

    /// Name of the default workspace, empty when unset.
    #[serde(deserialize_with = "null_as_default")]
    pub default: String,

    /// Known repositories, in registration order.
    #[serde(deserialize_with = "null_as_default")]
    pub repositories: Vec<RepositoryEntry>,
}

/// Non-fatal observations about a freshly loaded configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    NoWorkspaces,
    NoDefault,
    NoRepositories,
}

impl Advisory {
    /// Human-readable warning text.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoWorkspaces => "The 'workspaces' field in the configuration file is empty. You have to create a workspace before using workspace commands",
            Self::NoDefault => "The 'default' field in the configuration file is not set. You have to set the active workspace before using workspace commands",
            Self::NoRepositories => "The 'repositories' field in the configuration file is empty. You have to set at least a repository before creating a workspace",
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl PidwsConfig {
    /// Returns the advisories that apply to this configuration.
    #[must_use]
    pub fn advisories(&self) -> Vec<Advisory> {
        let mut advisories = Vec::new();
        if self.workspaces.is_empty() {
            advisories.push(Advisory::NoWorkspaces);
        }
        if self.default.is_empty() {
            advisories.push(Advisory::NoDefault);
        }
        if self.repositories.is_empty() {
            advisories.push(Advisory::NoRepositories);
        }
        advisories
    }

    /// Gets the path of a workspace by exact name.
    pub fn find_workspace(&self, name: &str) -> Result<&str, RegistryError> {
        self.workspaces
            .iter()
            .find(|ws| ws.name == name)
            .map(|ws| ws.path.as_str())
            .ok_or_else(|| RegistryError::WorkspaceNotFound(name.to_string()))
    }

    /// Gets a repository by exact name.
    pub fn find_repository(&self, name: &str) -> Result<&RepositoryEntry, RegistryError> {
        self.repositories
            .iter()
            .find(|repo| repo.name == name)
            .ok_or_else(|| RegistryError::RepositoryNotFound(name.to_string()))
    }

    #[must_use]
    pub fn workspace_exists(&self, name: &str) -> bool {
        self.workspaces.iter().any(|ws| ws.name == name)
    }

    #[must_use]
    pub fn repository_exists(&self, name: &str) -> bool {
        self.repositories.iter().any(|repo| repo.name == name)
    }

    /// Decides which workspace a command applies to.
    ///
    /// A non-empty `override_name` wins over the default. Either way the
    /// chosen workspace must be registered.
    pub fn resolve_active_workspace<'a>(
        &'a self,
        override_name: &'a str,
    ) -> Result<&'a str, RegistryError> {
        let name = if override_name.is_empty() {
            self.default.as_str()
        } else {
            override_name
        };

        if name.is_empty() {
            return Err(RegistryError::NoActiveWorkspace);
        }

        self.find_workspace(name)?;
        Ok(name)
    }

    /// Appends a workspace. Leaves the state untouched on failure.
    pub fn add_workspace(&mut self, name: &str, path: &str) -> Result<(), RegistryError> {
        validate_workspace_name(name)?;
        if self.workspace_exists(name) {
            return Err(RegistryError::WorkspaceAlreadyExists(name.to_string()));
        }
        self.workspaces.push(WorkspaceEntry::new(name, path));
        Ok(())
    }

    /// Removes a workspace, keeping the order of the others.
    ///
    /// `default` is left alone even if it named the removed workspace.
    pub fn remove_workspace(&mut self, name: &str) -> Result<WorkspaceEntry, RegistryError> {
        let idx = self
            .workspaces
            .iter()
            .position(|ws| ws.name == name)
            .ok_or_else(|| RegistryError::WorkspaceNotFound(name.to_string()))?;
        Ok(self.workspaces.remove(idx))
    }

    /// Appends a repository. Leaves the state untouched on failure.
    pub fn add_repository(&mut self, name: &str, address: &str) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(empty_name());
        }
        if self.repository_exists(name) {
            return Err(RegistryError::RepositoryAlreadyExists(name.to_string()));
        }
        self.repositories.push(RepositoryEntry::new(name, address));
        Ok(())
    }

    /// Removes a repository, keeping the order of the others.
    pub fn remove_repository(&mut self, name: &str) -> Result<RepositoryEntry, RegistryError> {
        let idx = self
            .repositories
            .iter()
            .position(|repo| repo.name == name)
            .ok_or_else(|| RegistryError::RepositoryNotFound(name.to_string()))?;
        Ok(self.repositories.remove(idx))
    }

    pub fn set_default(&mut self, name: &str) -> Result<(), RegistryError> {
        if !self.workspace_exists(name) {
            return Err(RegistryError::WorkspaceNotFound(name.to_string()));
        }
        self.default = name.to_string();
        Ok(())
    }
}

fn empty_name() -> RegistryError {
    RegistryError::InvalidName(String::new(), "name cannot be empty".to_string())
}

/// Validates a workspace name for registration.
///
/// Workspace names become directory names on create, so they must stay a
/// single path component.
pub(crate) fn validate_workspace_name(name: &str) -> Result<(), RegistryError> {
    if name.is_empty() {
        return Err(empty_name());
    }

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(RegistryError::InvalidName(
            name.to_string(),
            "name must be a single path component".to_string(),
        ));
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(RegistryError::InvalidName(
            name.to_string(),
            format!("name too long (max {MAX_NAME_LEN} characters)"),
        ));
    }

    Ok(())
}
