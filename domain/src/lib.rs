//! Domain layer for omni
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Category**: the generation mode a prompt is submitted under
//! - **HistoryLog**: persisted, most-recent-first record of past results
//! - **SessionState**: transient prompt/result/rating shown on screen, with an
//!   explicit [`GenerationPhase`] state machine

pub mod core;
pub mod generation;
pub mod history;
pub mod session;

// Re-export commonly used types
pub use core::{category::Category, error::DomainError, prompt::Prompt, score::Score};
pub use generation::render_result;
pub use history::{HistoryEntry, HistoryLog, Rating};
pub use session::{GenerationPhase, SessionState};
