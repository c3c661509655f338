//! Git operations abstraction for pidws.
//!
//! This module provides a trait-based abstraction over git operations:
//! - [`GitOperations`] - Trait defining git operations for workspace creation
//! - [`Git2Operations`] - Implementation using the git2 (libgit2) library

use std::path::Path;

use git2::build::RepoBuilder;

use crate::error::Result;
use crate::git::error::GitError;

/// Trait for git operations (enables mocking in tests).
#[cfg_attr(test, mockall::automock)]
pub trait GitOperations {
    /// Clones `address` into `destination`.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination is a non-empty existing path
    /// or if the clone fails.
    fn clone_repository(&self, address: &str, destination: &Path) -> Result<()>;
}

/// Git operations implementation using git2 library.
#[derive(Debug, Default, Clone, Copy)]
pub struct Git2Operations;

impl Git2Operations {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// True when `path` is missing or an empty directory.
fn is_free_destination(path: &Path) -> bool {
    if !path.exists() {
        return true;
    }
    path.read_dir()
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}

impl GitOperations for Git2Operations {
    fn clone_repository(&self, address: &str, destination: &Path) -> Result<()> {
        if !is_free_destination(destination) {
            return Err(GitError::DestinationExists(destination.display().to_string()).into());
        }

        tracing::info!("Cloning {address} into {}", destination.display());
        RepoBuilder::new()
            .clone(address, destination)
            .map_err(|e| GitError::CloneFailed {
                address: address.to_string(),
                message: e.message().to_string(),
            })?;

        Ok(())
    }
}
