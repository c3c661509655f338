//! Workspace and repository registry for pidws.
//!
//! This module provides the registry entries and the operations that
//! edit them:
//! - Register and remove workspaces and repositories
//! - Select the default workspace
//! - Persist every change through the configuration store

pub mod error;
pub mod registry;
pub mod types;

pub use error::RegistryError;
pub use types::{RepositoryEntry, WorkspaceEntry};
