//! History storage adapters implementing the
//! [`HistoryStore`](omni_application::HistoryStore) port.
//!
//! - [`JsonFileHistoryStore`]: one JSON file per slot, replaced atomically
//! - [`InMemoryHistoryStore`]: process-local slot for ephemeral sessions

mod json_file_store;
mod memory_store;

pub use json_file_store::JsonFileHistoryStore;
pub use memory_store::InMemoryHistoryStore;

use omni_application::StoreError;
use omni_domain::HistoryEntry;

/// Name of the slot the history log is stored under
pub const DEFAULT_SLOT_KEY: &str = "chatHistory";

fn decode(raw: &str) -> Result<Vec<HistoryEntry>, StoreError> {
    serde_json::from_str(raw).map_err(|e| StoreError::Decode(e.to_string()))
}

fn encode(entries: &[HistoryEntry]) -> Result<String, StoreError> {
    serde_json::to_string(entries).map_err(|e| StoreError::Write(e.to_string()))
}
