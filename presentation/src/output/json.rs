//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use omni_domain::{HistoryLog, SessionState};

/// Formats results and history as JSON for scripting
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_session(&self, session: &SessionState) -> String {
        let value = serde_json::json!({
            "prompt": session.current_prompt,
            "model": session.selected_category,
            "result": session.current_result,
            "rating": session.current_rating.map(|s| serde_json::json!({ "score": s })),
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_history(&self, history: &HistoryLog) -> String {
        serde_json::to_string_pretty(history.entries()).unwrap_or_else(|_| "[]".to_string())
    }
}
