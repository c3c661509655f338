//! Error types and result aliases for pidws.
//!
//! This module provides the top-level error type:
//! - Specific variants for configuration file failures
//! - Transparent wrappers around the registry, git and process errors
//! - Automatic conversion from common error types

use thiserror::Error;

use crate::git::GitError;
use crate::process::ProcessError;
use crate::workspace::RegistryError;

/// Main error type for pidws operations.
///
/// Each variant carries a user-friendly message. The binary prints it and
/// exits with a non-zero status; nothing below `main` terminates the process.
#[derive(Error, Debug)]
pub enum PidwsError {
    /// General configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read the configuration file.
    #[error("Failed to read configuration file: {0}. Check file permissions.")]
    ConfigRead(String),

    /// Failed to write the configuration file.
    #[error("Failed to write configuration file: {0}. Check directory permissions.")]
    ConfigWrite(String),

    /// The configuration file does not have the expected shape.
    #[error("Malformed configuration file: {0}. Fix or remove the file and try again.")]
    MalformedConfig(String),

    /// A flag that needs a companion argument was given without it.
    #[error("You must provide a --{required} argument together with --{flag}")]
    MissingArgument {
        /// The flag that was given.
        flag: &'static str,
        /// The flag that is missing.
        required: &'static str,
    },

    /// IO operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("Data serialization error: {0}")]
    Serialization(String),

    /// Workspace or repository registry error.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Git operation error.
    #[error(transparent)]
    Git(#[from] GitError),

    /// External process error.
    #[error(transparent)]
    Process(#[from] ProcessError),
}

impl PidwsError {
    /// Exit status to report for this error.
    ///
    /// A failed build tool passes its own exit code through.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Process(err) => err.exit_code().unwrap_or(1),
            _ => 1,
        }
    }
}

#[cfg(test)]
impl PidwsError {
    /// Checks if this error means a referenced name is not registered.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Registry(err) if err.is_not_found())
    }
}

/// Result type alias using [`PidwsError`].
pub type Result<T> = std::result::Result<T, PidwsError>;

impl From<serde_json::Error> for PidwsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(format!("JSON error: {err}"))
    }
}
