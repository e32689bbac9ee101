//! Logging infrastructure: structured interaction journal.
//!
//! Provides [`JsonlInteractionJournal`], a JSONL file writer that implements
//! the [`InteractionJournal`](omni_application::InteractionJournal) port.

mod jsonl_journal;

pub use jsonl_journal::JsonlInteractionJournal;
