//! History domain module
//!
//! A [`HistoryEntry`] records one completed generation. The [`HistoryLog`]
//! keeps them most-recent-first; index 0 is always the newest result.

pub mod entry;
pub mod log;

pub use entry::{HistoryEntry, Rating};
pub use log::HistoryLog;
