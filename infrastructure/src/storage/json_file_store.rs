//! JSON file history store.
//!
//! The slot is `<dir>/<key>.json`. Saves go through a temporary file and a
//! rename so a crash mid-write never leaves a truncated slot behind.

use super::{DEFAULT_SLOT_KEY, decode, encode};
use omni_application::{HistoryStore, StoreError};
use omni_domain::HistoryEntry;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed history slot
pub struct JsonFileHistoryStore {
    path: PathBuf,
}

impl JsonFileHistoryStore {
    /// Store using the default slot key inside `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_key(dir, DEFAULT_SLOT_KEY)
    }

    /// Store using `key` as the slot name inside `dir`
    pub fn with_key(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    /// Path of the slot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the slot currently exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    fn write_atomic(&self, contents: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.temp_path();
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(contents.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)
    }
}

impl HistoryStore for JsonFileHistoryStore {
    fn load(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode(&raw),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(StoreError::Read(format!("{}: {}", self.path.display(), e))),
        }
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        let contents = encode(entries)?;
        self.write_atomic(&contents)
            .map_err(|e| StoreError::Write(format!("{}: {}", self.path.display(), e)))?;
        debug!("Saved {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Write(format!("{}: {}", self.path.display(), e))),
        }
    }
}
