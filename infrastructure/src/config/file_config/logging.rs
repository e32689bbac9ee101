//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write tracing output to this file instead of stderr
    pub file: Option<String>,
    /// Append an interaction journal (JSONL) to this file
    pub journal: Option<String>,
}
