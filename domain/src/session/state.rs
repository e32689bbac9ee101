//! Session state and the generation state machine

use crate::core::{category::Category, prompt::Prompt, score::Score};
use crate::history::HistoryEntry;

/// Where the session is in a generation cycle.
///
/// `Idle -> Generating -> Idle`. The prompt and category are captured on
/// entry to `Generating` so later edits cannot leak into the pending entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationPhase {
    #[default]
    Idle,
    Generating { prompt: Prompt, category: Category },
}

impl GenerationPhase {
    pub fn is_generating(&self) -> bool {
        matches!(self, GenerationPhase::Generating { .. })
    }
}

/// Transient interaction state owned by the controller
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub current_prompt: String,
    pub selected_category: Category,
    pub phase: GenerationPhase,
    /// Empty when nothing is displayed
    pub current_result: String,
    pub current_rating: Option<Score>,
    pub history_view_active: bool,
    /// Log index of the entry whose result is on screen, if any
    pub displayed_entry: Option<usize>,
}

impl SessionState {
    pub fn is_generating(&self) -> bool {
        self.phase.is_generating()
    }

    pub fn has_result(&self) -> bool {
        !self.current_result.is_empty()
    }

    /// Restore the visible fields from a stored entry
    pub fn restore_from(&mut self, entry: &HistoryEntry, index: usize) {
        self.current_prompt = entry.prompt.clone();
        self.selected_category = entry.category;
        self.current_result = entry.result.clone();
        self.current_rating = entry.score();
        self.displayed_entry = Some(index);
        self.history_view_active = false;
    }
}
