//! Configuration file loading for omni
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `OMNI_` environment variables (`OMNI_GENERATION__LATENCY_MS=0`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./omni.toml` or `./.omni.toml`
//! 4. Global config: `$XDG_CONFIG_HOME/omni/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGenerationConfig, FileHistoryConfig,
    FileLoggingConfig, FileOutputConfig, FileReplConfig, FileStorageConfig,
};
pub use loader::ConfigLoader;
