//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application settings.

mod generation;
mod history;
mod logging;
mod output;
mod repl;
mod storage;

pub use generation::FileGenerationConfig;
pub use history::FileHistoryConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use storage::FileStorageConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("storage.key cannot be empty")]
    EmptyStorageKey,

    #[error("history.rating_target: unknown value '{0}' (expected 'displayed' or 'newest')")]
    InvalidRatingTarget(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// History slot location
    pub storage: FileStorageConfig,
    /// Simulated generation settings
    pub generation: FileGenerationConfig,
    /// History size and rating behavior
    pub history: FileHistoryConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Diagnostic log and journal files
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every problem found.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.storage.key.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyStorageKey);
        }

        if let Err(e) = self.history.to_settings() {
            issues.push(e);
        }

        issues
    }
}
