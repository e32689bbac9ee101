//! Interaction controller settings.

use serde::{Deserialize, Serialize};

/// Which history entry a rating attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingTarget {
    /// Always the newest entry, regardless of what is on screen
    #[default]
    Newest,
    /// The entry whose result is currently displayed (a replayed entry
    /// included)
    Displayed,
}

impl RatingTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingTarget::Displayed => "displayed",
            RatingTarget::Newest => "newest",
        }
    }
}

impl std::str::FromStr for RatingTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "displayed" => Ok(RatingTarget::Displayed),
            "newest" => Ok(RatingTarget::Newest),
            other => Err(format!("unknown rating target: {other}")),
        }
    }
}

/// Controller behavior settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerSettings {
    /// Maximum number of history entries kept; `None` is unbounded.
    pub max_entries: Option<usize>,
    pub rating_target: RatingTarget,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            max_entries: Some(Self::DEFAULT_MAX_ENTRIES),
            rating_target: RatingTarget::default(),
        }
    }
}

impl ControllerSettings {
    pub const DEFAULT_MAX_ENTRIES: usize = 200;

    pub fn with_max_entries(mut self, max: Option<usize>) -> Self {
        self.max_entries = max;
        self
    }

    pub fn with_rating_target(mut self, target: RatingTarget) -> Self {
        self.rating_target = target;
        self
    }
}
