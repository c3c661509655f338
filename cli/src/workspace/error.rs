//! Registry error types.

use thiserror::Error;

/// Errors raised by workspace and repository registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No workspace with the given name is registered.
    #[error("The '{0}' workspace is unknown.")]
    WorkspaceNotFound(String),

    /// No repository with the given name is registered.
    #[error("The '{0}' repository is unknown.")]
    RepositoryNotFound(String),

    /// No override was given and no default workspace is set.
    #[error("No workspace selected. Set a default with --default or pick one with --use.")]
    NoActiveWorkspace,

    /// A workspace with the given name is already registered.
    #[error("The '{0}' workspace already exists.")]
    WorkspaceAlreadyExists(String),

    /// A repository with the given name is already registered.
    #[error("The '{0}' repository already exists.")]
    RepositoryAlreadyExists(String),

    /// Invalid name (empty, too long or containing path separators).
    #[error("Invalid name '{0}': {1}")]
    InvalidName(String, String),
}

impl RegistryError {
    /// Checks if this error means a referenced name has no entry.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::WorkspaceNotFound(_) | Self::RepositoryNotFound(_) | Self::NoActiveWorkspace
        )
    }
}
