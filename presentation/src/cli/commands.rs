//! CLI command definitions

use clap::{Parser, ValueEnum};
use omni_domain::Category;
use std::path::PathBuf;

/// Output format for one-shot results and history listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for omni
#[derive(Parser, Debug)]
#[command(name = "omni")]
#[command(author, version, about = "Omni AI - pick a category, submit a prompt, rate the result")]
#[command(long_about = r#"
Omni turns a prompt into a canned result for the chosen category and keeps
every result in a local history that can be rated and revisited.

Categories: all, presentation, image, code, music, video

Configuration files are loaded from (in priority order):
1. --config <path>               Explicit config file
2. ./omni.toml or ./.omni.toml   Project-level config
3. ~/.config/omni/config.toml    Global config
Environment variables prefixed with OMNI_ override all files
(e.g. OMNI_HISTORY__MAX_ENTRIES=50).

Example:
  omni -c image "a lighthouse at dusk"
  omni --history -o json
  omni --chat
"#)]
pub struct Cli {
    /// The prompt to generate from (not required in chat mode)
    pub prompt: Option<String>,

    /// Category to generate with
    #[arg(short, long, value_name = "ID", default_value = "all")]
    pub category: Category,

    /// Start interactive chat mode
    #[arg(long)]
    pub chat: bool,

    /// Print the stored history and exit
    #[arg(long, conflicts_with = "clear_history")]
    pub history: bool,

    /// Delete the stored history and exit
    #[arg(long)]
    pub clear_history: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Keep history in memory only for this run
    #[arg(long)]
    pub ephemeral: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
