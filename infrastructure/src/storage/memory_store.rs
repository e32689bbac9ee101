//! In-memory history store.
//!
//! Keeps the slot as serialized JSON so it behaves exactly like the file
//! store, including the absent/empty distinction.

use super::{decode, encode};
use omni_application::{HistoryStore, StoreError};
use omni_domain::HistoryEntry;
use std::sync::Mutex;

/// Process-local history slot
#[derive(Default)]
pub struct InMemoryHistoryStore {
    slot: Mutex<Option<String>>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with raw slot contents
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    /// Raw slot contents, `None` when absent
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn load(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        let slot = self
            .slot
            .lock()
            .map_err(|e| StoreError::Read(e.to_string()))?;
        match slot.as_deref() {
            Some(raw) => decode(raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        let contents = encode(entries)?;
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| StoreError::Write(e.to_string()))?;
        *slot = Some(contents);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| StoreError::Write(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}
