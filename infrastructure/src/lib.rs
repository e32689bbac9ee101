//! Infrastructure layer for omni
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod generation;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGenerationConfig, FileHistoryConfig,
    FileLoggingConfig, FileOutputConfig, FileReplConfig, FileStorageConfig,
};
pub use generation::TemplateGenerator;
pub use logging::JsonlInteractionJournal;
pub use storage::{DEFAULT_SLOT_KEY, InMemoryHistoryStore, JsonFileHistoryStore};
