//! CLI module for pidws.

pub mod args;
pub mod commands;

pub use args::Cli;
