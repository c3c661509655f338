//! Git-specific error types.
//!
//! This module defines error types for git operations:
//! - [`GitError`] - All git-related errors with user-friendly messages

use thiserror::Error;

/// Errors specific to git operations.
#[derive(Error, Debug)]
pub enum GitError {
    /// Clone destination exists and is not an empty directory.
    #[error("Cannot clone into '{0}': the destination already exists and is not empty.")]
    DestinationExists(String),

    /// Cloning failed.
    #[error("Failed to clone '{address}': {message}")]
    CloneFailed {
        /// The repository address.
        address: String,
        /// The libgit2 error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_user_friendly() {
        let exists = GitError::DestinationExists("pid-workspace".to_string());
        assert!(exists.to_string().contains("pid-workspace"));

        let failed = GitError::CloneFailed {
            address: "https://example/x.git".to_string(),
            message: "unreachable".to_string(),
        };
        let msg = failed.to_string();
        assert!(msg.contains("https://example/x.git"));
        assert!(msg.contains("unreachable"));
    }
}
