//! Output formatting for results and history

pub mod console;
pub mod formatter;
pub mod json;
