//! Presentation layer for omni
//!
//! This crate contains CLI definitions, the category catalog, output
//! formatters, progress reporters, and the interactive REPL.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use catalog::{CATALOG, CategoryInfo, category_info};
pub use cli::commands::{Cli, OutputFormat};
pub use config::ReplConfig;
pub use output::{console::ConsoleFormatter, formatter::OutputFormatter, json::JsonFormatter};
pub use progress::reporter::{GenerationSpinner, SimpleProgress};
pub use repl::{OmniRepl, ReplCommand, parse_command};
