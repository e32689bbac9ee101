//! Category value object representing a generation mode

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Generation mode selected by the user (Value Object)
///
/// A fixed, closed set. Display names and input placeholders belong to the
/// presentation layer; the domain only knows the ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Multi-modal catch-all (default)
    #[default]
    All,
    Presentation,
    Image,
    Code,
    Music,
    Video,
}

impl Category {
    /// Every category, in catalog order
    pub const ALL: [Category; 6] = [
        Category::All,
        Category::Presentation,
        Category::Image,
        Category::Code,
        Category::Music,
        Category::Video,
    ];

    /// Get the string identifier for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Presentation => "presentation",
            Category::Image => "image",
            Category::Code => "code",
            Category::Music => "music",
            Category::Video => "video",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}
