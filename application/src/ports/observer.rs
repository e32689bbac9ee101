//! Interaction observer port
//!
//! Callbacks the presentation layer implements to show generation progress
//! and surface non-fatal persistence notices.

use super::history_store::StoreError;
use omni_domain::Category;

/// Observer for controller activity.
///
/// All methods have default no-op implementations.
pub trait InteractionObserver: Send + Sync {
    /// Called after the controller enters `Generating`
    fn on_generation_start(&self, _category: &Category) {}

    /// Called once the generator returned, before the entry is recorded
    fn on_generation_complete(&self, _category: &Category) {}

    /// Called when mirroring the log to the store failed.
    ///
    /// The in-memory log stays authoritative for the session.
    fn on_persist_failed(&self, _error: &StoreError) {}

    /// Called when the stored log could not be read or decoded and the
    /// session started from an empty log instead
    fn on_history_recovered(&self, _error: &StoreError) {}
}

/// No-op observer for tests and quiet mode
pub struct NoObserver;

impl InteractionObserver for NoObserver {}
