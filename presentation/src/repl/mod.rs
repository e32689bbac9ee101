//! Interactive mode
//!
//! A readline-based loop over the interaction controller.

mod command;
mod session;

pub use command::{ReplCommand, parse_command};
pub use session::OmniRepl;
