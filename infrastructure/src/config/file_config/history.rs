//! History configuration from TOML (`[history]` section)

use super::ConfigValidationError;
use omni_application::{ControllerSettings, RatingTarget};
use serde::{Deserialize, Serialize};

/// Raw history configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    /// Maximum entries kept, oldest dropped first. `0` disables the cap.
    pub max_entries: usize,
    /// Which entry a rating attaches to: "displayed" or "newest"
    pub rating_target: String,
}

impl Default for FileHistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: ControllerSettings::DEFAULT_MAX_ENTRIES,
            rating_target: RatingTarget::default().as_str().to_string(),
        }
    }
}

impl FileHistoryConfig {
    /// Convert into controller settings
    pub fn to_settings(&self) -> Result<ControllerSettings, ConfigValidationError> {
        let rating_target = self
            .rating_target
            .parse::<RatingTarget>()
            .map_err(|_| ConfigValidationError::InvalidRatingTarget(self.rating_target.clone()))?;

        let max_entries = (self.max_entries > 0).then_some(self.max_entries);

        Ok(ControllerSettings::default()
            .with_max_entries(max_entries)
            .with_rating_target(rating_target))
    }
}
