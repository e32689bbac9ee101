//! History log aggregate

use super::entry::HistoryEntry;
use crate::core::score::Score;

/// Ordered, most-recent-first collection of [`HistoryEntry`] records.
///
/// When a capacity is set, recording beyond it drops the oldest entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    capacity: Option<usize>,
}

impl HistoryLog {
    /// Create an empty log with an optional size cap
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Build a log from stored entries (already most-recent-first)
    ///
    /// The cap is applied immediately, so an oversized stored log is trimmed
    /// on load.
    pub fn from_entries(entries: Vec<HistoryEntry>, capacity: Option<usize>) -> Self {
        let mut log = Self { entries, capacity };
        log.enforce_capacity();
        log
    }

    /// Insert a new entry at index 0
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.enforce_capacity();
    }

    /// Attach a rating to the entry at `index`.
    ///
    /// Returns false when there is no such entry.
    pub fn rate(&mut self, index: usize, score: Score) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                *entry = entry.with_rating(score);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn enforce_capacity(&mut self) {
        if let Some(cap) = self.capacity {
            self.entries.truncate(cap);
        }
    }
}
