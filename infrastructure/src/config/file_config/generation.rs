//! Generation configuration from TOML (`[generation]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw generation configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Simulated generation latency in milliseconds
    pub latency_ms: u64,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self { latency_ms: 1500 }
    }
}

impl FileGenerationConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}
