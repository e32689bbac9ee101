//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod generator;
pub mod history_store;
pub mod interaction_journal;
pub mod observer;
