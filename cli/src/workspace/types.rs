//! Registry entry types for pidws.

use serde::{Deserialize, Serialize};

/// A known local workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceEntry {
    /// Unique workspace name.
    pub name: String,

    /// Filesystem path to the workspace root.
    pub path: String,
}

/// A known remote source location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    /// Unique repository name.
    pub name: String,

    /// Clone source, usually a URL.
    pub address: String,
}

impl WorkspaceEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

impl RepositoryEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_entry_uses_lowercase_keys() {
        let ws = WorkspaceEntry::new("pid", "/home/user/pid-workspace");
        let yaml = serde_yaml::to_string(&ws).unwrap();

        assert!(yaml.contains("name: pid"));
        assert!(yaml.contains("path: /home/user/pid-workspace"));
    }

    #[test]
    fn repository_entry_uses_lowercase_keys() {
        let repo = RepositoryEntry::new("official", "https://example.org/pid-workspace.git");
        let yaml = serde_yaml::to_string(&repo).unwrap();

        assert!(yaml.contains("name: official"));
        assert!(yaml.contains("address: https://example.org/pid-workspace.git"));
    }
}
