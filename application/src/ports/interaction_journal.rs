//! Port for structured interaction journaling.
//!
//! Defines the [`InteractionJournal`] trait for recording controller events
//! (generations, ratings, history clears, replays) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures a machine-readable
//! transcript (JSONL).

use serde_json::Value;

/// A structured interaction event for journaling.
pub struct JournalEvent {
    /// Event type identifier (e.g., "generated", "rated", "history_cleared").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl JournalEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for journaling interaction events.
///
/// `record` is synchronous and non-fallible; journal failures never disturb
/// the interaction itself.
pub trait InteractionJournal: Send + Sync {
    fn record(&self, event: JournalEvent);
}

/// No-op implementation for tests and when journaling is disabled.
pub struct NoJournal;

impl InteractionJournal for NoJournal {
    fn record(&self, _event: JournalEvent) {}
}
