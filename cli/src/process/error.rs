//! External process error types.

use std::process::ExitStatus;

use thiserror::Error;

/// Errors raised while running configure, build or shell processes.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The working directory does not exist.
    #[error("Cannot run '{program}': directory '{dir}' does not exist.")]
    MissingDirectory {
        /// Program that was about to run.
        program: String,
        /// The missing directory.
        dir: String,
    },

    /// The program could not be started.
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The program ran and exited unsuccessfully.
    #[error("'{program}' failed ({status})")]
    Failed {
        /// Program that failed.
        program: String,
        /// Its exit status.
        status: ExitStatus,
    },
}

impl ProcessError {
    /// Exit code of a failed program, if it exited normally.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Failed { status, .. } => status.code(),
            _ => None,
        }
    }
}
