//! Application-level configuration.
//!
//! - [`ControllerSettings`]: history cap and rating target for the
//!   interaction controller

pub mod controller_settings;

pub use controller_settings::{ControllerSettings, RatingTarget};
