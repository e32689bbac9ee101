//! History store port
//!
//! The persistence adapter contract: one durable slot holding the serialized
//! history log. Pure get/set; no business rules live behind this trait.

use omni_domain::HistoryEntry;
use thiserror::Error;

/// Errors that can occur while reading or writing the history slot
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Stored history could not be decoded: {0}")]
    Decode(String),

    #[error("Could not read history: {0}")]
    Read(String),

    #[error("Could not write history: {0}")]
    Write(String),
}

/// Durable storage for the history log.
///
/// Single writer, single reader: there is no concurrency control and the last
/// `save` wins. Implementations live in the infrastructure layer.
pub trait HistoryStore: Send + Sync {
    /// Read the slot. An absent slot is an empty history, not an error.
    fn load(&self) -> Result<Vec<HistoryEntry>, StoreError>;

    /// Overwrite the slot with `entries`.
    fn save(&self, entries: &[HistoryEntry]) -> Result<(), StoreError>;

    /// Remove the slot entirely (distinct from saving an empty list).
    fn clear(&self) -> Result<(), StoreError>;
}
