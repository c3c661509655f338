//! Git operations module for pidws.
//!
//! Provides an abstraction layer over the git operations needed to
//! create a workspace from a registered repository.

pub mod error;
pub mod operations;

pub use error::GitError;
pub use operations::{Git2Operations, GitOperations};

#[cfg(test)]
pub use operations::MockGitOperations;
