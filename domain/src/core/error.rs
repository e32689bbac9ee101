//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid rating: {0} (expected 1-5)")]
    InvalidRating(u8),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
