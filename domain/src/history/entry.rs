//! History entry entity

use crate::core::{category::Category, score::Score};
use serde::{Deserialize, Serialize};

/// Rating attached to a history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub score: Score,
}

/// One past prompt/result pair.
///
/// Immutable once created except for `rating`. The stored layout is
/// `{prompt, result, model, timestamp, rating?: {score}}`; changing it breaks
/// existing history files since there is no schema version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub prompt: String,
    pub result: String,
    #[serde(rename = "model")]
    pub category: Category,
    /// Creation instant in milliseconds since the Unix epoch
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl HistoryEntry {
    /// Create an unrated entry
    pub fn new(
        prompt: impl Into<String>,
        result: impl Into<String>,
        category: Category,
        timestamp: i64,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            result: result.into(),
            category,
            timestamp,
            rating: None,
        }
    }

    /// Copy of this entry with `rating` replaced; every other field is kept
    pub fn with_rating(&self, score: Score) -> Self {
        Self {
            rating: Some(Rating { score }),
            ..self.clone()
        }
    }

    pub fn score(&self) -> Option<Score> {
        self.rating.map(|r| r.score)
    }
}
