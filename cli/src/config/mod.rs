//! Configuration management for pidws.

pub mod paths;
pub mod settings;
pub mod state;
pub mod store;

pub use settings::ToolSettings;
pub use state::PidwsConfig;
pub use store::{ConfigStore, FileConfigStore};

#[cfg(test)]
pub use store::MockConfigStore;
