//! Session domain module
//!
//! Transient per-session state: never persisted.

pub mod state;

pub use state::{GenerationPhase, SessionState};
