//! Presentation-level configuration
//!
//! Settings for interactive mode that the controller never sees.

use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Default)]
pub struct ReplConfig {
    /// Line-editor history file; `None` falls back to the data directory
    pub history_file: Option<PathBuf>,
}

impl ReplConfig {
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Where the line editor keeps typed input between runs
    pub fn resolve_history_file(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("omni").join("repl_history.txt")))
    }
}
