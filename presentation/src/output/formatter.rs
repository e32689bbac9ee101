//! Output formatter trait

use omni_domain::{HistoryLog, SessionState};

/// Trait for rendering controller state
pub trait OutputFormatter {
    /// Format the result currently on screen
    fn format_session(&self, session: &SessionState) -> String;

    /// Format the whole history log
    fn format_history(&self, history: &HistoryLog) -> String;
}
