//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Directory holding the history slot (defaults to the platform data dir)
    pub dir: Option<String>,
    /// Slot name; the file is `<dir>/<key>.json`
    pub key: String,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            key: crate::storage::DEFAULT_SLOT_KEY.to_string(),
        }
    }
}

impl FileStorageConfig {
    /// Resolve the storage directory.
    ///
    /// Falls back to `<data_dir>/omni`, then `./.omni` when the platform
    /// reports no data directory.
    pub fn resolve_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .map(|d| d.join("omni"))
                .unwrap_or_else(|| PathBuf::from(".omni")),
        }
    }
}
