//! Core domain concepts shared across all subdomains.
//!
//! - [`category::Category`]: the generation mode a prompt is submitted under
//! - [`prompt::Prompt`]: a validated, non-blank prompt
//! - [`score::Score`]: a 1..=5 star rating
//! - [`error::DomainError`]: domain-level errors

pub mod category;
pub mod error;
pub mod prompt;
pub mod score;
