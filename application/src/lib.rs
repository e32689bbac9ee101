//! Application layer for omni
//!
//! This crate contains the interaction controller use case, port
//! definitions, and application configuration. It depends only on the domain
//! layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ControllerSettings, RatingTarget};
pub use ports::{
    generator::ResultGenerator,
    history_store::{HistoryStore, StoreError},
    interaction_journal::{InteractionJournal, JournalEvent, NoJournal},
    observer::{InteractionObserver, NoObserver},
};
pub use use_cases::interaction_controller::{
    ControllerError, GenerateOutcome, InteractionController, RateOutcome,
};
