//! External process execution for pidws.
//!
//! Configure steps, build tool invocations and interactive shells all run
//! through [`ProcessRunner`] so command handlers can be tested without
//! spawning anything.

pub mod error;
pub mod runner;

pub use error::ProcessError;
pub use runner::{ProcessRunner, SystemRunner};

#[cfg(test)]
pub use runner::MockProcessRunner;
