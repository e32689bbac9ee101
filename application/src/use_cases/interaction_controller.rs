//! Interaction controller use case
//!
//! Owns the transient [`SessionState`] and the durable [`HistoryLog`], and
//! mirrors the log to the injected [`HistoryStore`] after every mutation.
//!
//! Generation runs as an explicit two-step cycle so callers that drive the
//! controller from an event loop can hold it between the steps:
//!
//! ```text
//! Idle --begin_generation--> Generating --finish_generation--> Idle(with result)
//! ```
//!
//! [`InteractionController::generate`] composes both steps around the
//! injected [`ResultGenerator`].

use crate::config::{ControllerSettings, RatingTarget};
use crate::ports::generator::ResultGenerator;
use crate::ports::history_store::{HistoryStore, StoreError};
use crate::ports::interaction_journal::{InteractionJournal, JournalEvent, NoJournal};
use crate::ports::observer::InteractionObserver;
use omni_domain::{
    Category, DomainError, GenerationPhase, HistoryEntry, HistoryLog, Prompt, Score, SessionState,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned by controller operations.
///
/// Persistence failures are never reported here; they degrade to a notice
/// (see [`InteractionController::persistence_notice`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("A generation is already in progress")]
    Busy,

    #[error("No generation is in progress")]
    NotGenerating,

    #[error("No history entry at index {0}")]
    NoSuchEntry(usize),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Outcome of [`InteractionController::generate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The prompt was blank; nothing changed
    Skipped,
    /// A result was produced and recorded at index 0
    Generated(HistoryEntry),
}

/// Outcome of [`InteractionController::rate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateOutcome {
    /// The rating was stored on the history entry at `index`
    Attached { index: usize },
    /// The rating only changed the session; there was no entry to attach to
    SessionOnly,
    /// No result is displayed, so there is nothing to rate
    NothingDisplayed,
}

/// Write that failed and should be retried on shutdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingWrite {
    Save,
    Clear,
}

/// Use case driving prompt submission, rating, replay and history clearing
pub struct InteractionController<S: HistoryStore + 'static, G: ResultGenerator + 'static> {
    store: Arc<S>,
    generator: Arc<G>,
    observer: Arc<dyn InteractionObserver>,
    journal: Arc<dyn InteractionJournal>,
    settings: ControllerSettings,
    session: SessionState,
    history: HistoryLog,
    notice: Option<String>,
    pending: Option<PendingWrite>,
}

impl<S: HistoryStore + 'static, G: ResultGenerator + 'static> InteractionController<S, G> {
    /// Create a controller and load the history log once from `store`.
    ///
    /// A slot that cannot be read or decoded yields an empty log and a
    /// persistence notice; it never fails construction. `observer` is
    /// attached before loading so it hears about the recovery.
    pub fn new(
        store: Arc<S>,
        generator: Arc<G>,
        settings: ControllerSettings,
        observer: Arc<dyn InteractionObserver>,
    ) -> Self {
        let (history, notice) = match store.load() {
            Ok(entries) => {
                let stored = entries.len();
                let history = HistoryLog::from_entries(entries, settings.max_entries);
                debug!("Loaded {} history entries", history.len());
                if history.len() < stored {
                    warn!(
                        "Stored history has {} entries; keeping the newest {}",
                        stored,
                        history.len()
                    );
                }
                (history, None)
            }
            Err(e) => {
                warn!("Starting with empty history: {}", e);
                observer.on_history_recovered(&e);
                (HistoryLog::new(settings.max_entries), Some(e.to_string()))
            }
        };

        Self {
            store,
            generator,
            observer,
            journal: Arc::new(NoJournal),
            settings,
            session: SessionState::default(),
            history,
            notice,
            pending: None,
        }
    }

    pub fn with_journal(mut self, journal: Arc<dyn InteractionJournal>) -> Self {
        self.journal = journal;
        self
    }

    // ==================== Accessors ====================

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Last persistence problem, cleared by the next successful write
    pub fn persistence_notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    // ==================== Session Events ====================

    /// Change the category used by the next generation.
    ///
    /// A displayed result stays on screen until the next generate.
    pub fn select_category(&mut self, category: Category) {
        self.session.selected_category = category;
    }

    /// Store the prompt text verbatim
    pub fn set_prompt(&mut self, text: impl Into<String>) {
        self.session.current_prompt = text.into();
    }

    pub fn toggle_history_view(&mut self) {
        self.session.history_view_active = !self.session.history_view_active;
    }

    // ==================== Generation ====================

    /// Enter `Generating`.
    ///
    /// Returns `Ok(None)` without touching any state when the prompt is
    /// blank, and [`ControllerError::Busy`] while another generation is in
    /// flight.
    pub fn begin_generation(&mut self) -> Result<Option<Prompt>, ControllerError> {
        if self.session.is_generating() {
            return Err(ControllerError::Busy);
        }

        let Some(prompt) = Prompt::try_new(self.session.current_prompt.clone()) else {
            debug!("Ignoring generate with blank prompt");
            return Ok(None);
        };

        let category = self.session.selected_category;
        self.session.phase = GenerationPhase::Generating {
            prompt: prompt.clone(),
            category,
        };
        self.session.current_result.clear();
        self.session.current_rating = None;

        self.observer.on_generation_start(&category);
        Ok(Some(prompt))
    }

    /// Leave `Generating` with `result`, recording a new entry at index 0.
    pub fn finish_generation(
        &mut self,
        result: impl Into<String>,
    ) -> Result<&HistoryEntry, ControllerError> {
        let GenerationPhase::Generating { prompt, category } =
            std::mem::take(&mut self.session.phase)
        else {
            return Err(ControllerError::NotGenerating);
        };

        let result = result.into();
        self.observer.on_generation_complete(&category);

        let event = JournalEvent::new(
            "generated",
            serde_json::json!({
                "category": category.as_str(),
                "prompt": prompt.content(),
            }),
        );

        let entry = HistoryEntry::new(
            prompt.into_content(),
            result.clone(),
            category,
            chrono::Utc::now().timestamp_millis(),
        );

        self.session.current_result = result;
        self.session.displayed_entry = Some(0);
        self.history.record(entry);

        info!(
            "Generated {} result ({} entries in history)",
            category,
            self.history.len()
        );

        self.journal.record(event);
        self.flush();

        self.history
            .newest()
            .ok_or(ControllerError::NoSuchEntry(0))
    }

    /// Run a full generation cycle for the current prompt and category.
    pub async fn generate(&mut self) -> Result<GenerateOutcome, ControllerError> {
        let Some(prompt) = self.begin_generation()? else {
            return Ok(GenerateOutcome::Skipped);
        };

        let category = self.session.selected_category;
        let result = self.generator.generate(&prompt, category).await;

        let entry = self.finish_generation(result)?;
        Ok(GenerateOutcome::Generated(entry.clone()))
    }

    // ==================== Rating ====================

    /// Rate the displayed result with `score` (1..=5).
    ///
    /// Out-of-range scores are rejected with
    /// [`DomainError::InvalidRating`]; nothing is clamped.
    pub fn rate(&mut self, score: u8) -> Result<RateOutcome, ControllerError> {
        let score = Score::new(score)?;

        if self.session.is_generating() {
            return Err(ControllerError::Busy);
        }
        if !self.session.has_result() {
            return Ok(RateOutcome::NothingDisplayed);
        }

        self.session.current_rating = Some(score);

        let target = match self.settings.rating_target {
            RatingTarget::Displayed => self.session.displayed_entry,
            RatingTarget::Newest => (!self.history.is_empty()).then_some(0),
        };

        let Some(index) = target.filter(|&i| self.history.rate(i, score)) else {
            debug!("Rating kept in session only");
            return Ok(RateOutcome::SessionOnly);
        };

        self.journal.record(JournalEvent::new(
            "rated",
            serde_json::json!({ "index": index, "score": score.value() }),
        ));

        self.flush();
        Ok(RateOutcome::Attached { index })
    }

    // ==================== History ====================

    /// Empty the log and remove the durable slot.
    ///
    /// Session fields stay as they are until the next action.
    pub fn clear_history(&mut self) {
        let removed = self.history.len();
        self.history.clear();
        self.session.displayed_entry = None;

        info!("Cleared {} history entries", removed);
        self.journal.record(JournalEvent::new(
            "history_cleared",
            serde_json::json!({ "removed": removed }),
        ));

        match self.store.clear() {
            Ok(()) => self.persisted(),
            Err(e) => self.persist_failed(e, PendingWrite::Clear),
        }
    }

    /// Restore prompt, category, result and rating from the entry at `index`
    /// and leave the history view. The log itself is not touched.
    pub fn select_history_entry(&mut self, index: usize) -> Result<&HistoryEntry, ControllerError> {
        if self.session.is_generating() {
            return Err(ControllerError::Busy);
        }

        let entry = self
            .history
            .get(index)
            .ok_or(ControllerError::NoSuchEntry(index))?;

        self.session.restore_from(entry, index);

        self.journal.record(JournalEvent::new(
            "entry_selected",
            serde_json::json!({ "index": index, "category": entry.category.as_str() }),
        ));

        Ok(entry)
    }

    // ==================== Persistence ====================

    /// Retry a write that failed earlier, then release the controller.
    ///
    /// Returns the final history log for callers that want to inspect it.
    pub fn shutdown(mut self) -> Result<HistoryLog, StoreError> {
        match self.pending.take() {
            Some(PendingWrite::Save) => self.store.save(self.history.entries())?,
            Some(PendingWrite::Clear) => self.store.clear()?,
            None => {}
        }
        Ok(self.history)
    }

    fn flush(&mut self) {
        match self.store.save(self.history.entries()) {
            Ok(()) => self.persisted(),
            Err(e) => self.persist_failed(e, PendingWrite::Save),
        }
    }

    fn persisted(&mut self) {
        self.notice = None;
        self.pending = None;
    }

    fn persist_failed(&mut self, error: StoreError, pending: PendingWrite) {
        warn!("History not persisted: {}", error);
        self.observer.on_persist_failed(&error);
        self.notice = Some(error.to_string());
        self.pending = Some(pending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::ports::observer::NoObserver;
    use omni_domain::render_result;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    /// Store holding the serialized slot, so absence and "[]" stay distinct
    #[derive(Default)]
    struct MemoryStore {
        slot: Mutex<Option<String>>,
        fail_writes: AtomicBool,
        saves: AtomicUsize,
    }

    impl MemoryStore {
        fn with_raw(raw: &str) -> Self {
            Self {
                slot: Mutex::new(Some(raw.to_string())),
                ..Default::default()
            }
        }

        fn raw(&self) -> Option<String> {
            self.slot.lock().unwrap().clone()
        }
    }

    impl HistoryStore for MemoryStore {
        fn load(&self) -> Result<Vec<HistoryEntry>, StoreError> {
            match self.slot.lock().unwrap().as_deref() {
                None => Ok(Vec::new()),
                Some(raw) => {
                    serde_json::from_str(raw).map_err(|e| StoreError::Decode(e.to_string()))
                }
            }
        }

        fn save(&self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StoreError::Write("quota exceeded".to_string()));
            }
            self.saves.fetch_add(1, Ordering::SeqCst);
            *self.slot.lock().unwrap() = Some(serde_json::to_string(entries).unwrap());
            Ok(())
        }

        fn clear(&self) -> Result<(), StoreError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StoreError::Write("quota exceeded".to_string()));
            }
            *self.slot.lock().unwrap() = None;
            Ok(())
        }
    }

    struct InstantGenerator;

    #[async_trait]
    impl ResultGenerator for InstantGenerator {
        async fn generate(&self, prompt: &Prompt, category: Category) -> String {
            render_result(prompt.content(), category)
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<String>>,
    }

    impl InteractionObserver for RecordingObserver {
        fn on_generation_start(&self, category: &Category) {
            self.events.lock().unwrap().push(format!("start:{category}"));
        }

        fn on_generation_complete(&self, category: &Category) {
            self.events.lock().unwrap().push(format!("done:{category}"));
        }

        fn on_persist_failed(&self, _error: &StoreError) {
            self.events.lock().unwrap().push("persist_failed".to_string());
        }

        fn on_history_recovered(&self, _error: &StoreError) {
            self.events.lock().unwrap().push("recovered".to_string());
        }
    }

    #[derive(Default)]
    struct RecordingJournal {
        types: Mutex<Vec<&'static str>>,
    }

    impl InteractionJournal for RecordingJournal {
        fn record(&self, event: JournalEvent) {
            self.types.lock().unwrap().push(event.event_type);
        }
    }

    type Controller = InteractionController<MemoryStore, InstantGenerator>;

    fn controller_with(store: Arc<MemoryStore>, settings: ControllerSettings) -> Controller {
        observed(store, settings, Arc::new(NoObserver))
    }

    fn observed(
        store: Arc<MemoryStore>,
        settings: ControllerSettings,
        observer: Arc<dyn InteractionObserver>,
    ) -> Controller {
        InteractionController::new(store, Arc::new(InstantGenerator), settings, observer)
    }

    fn controller() -> (Arc<MemoryStore>, Controller) {
        let store = Arc::new(MemoryStore::default());
        let controller = controller_with(store.clone(), ControllerSettings::default());
        (store, controller)
    }

    async fn submit(controller: &mut Controller, prompt: &str, category: Category) {
        controller.select_category(category);
        controller.set_prompt(prompt);
        controller.generate().await.unwrap();
    }

    // ==================== Initialization ====================

    #[test]
    fn test_absent_slot_loads_empty() {
        let (_, controller) = controller();
        assert!(controller.history().is_empty());
        assert!(controller.persistence_notice().is_none());
    }

    #[test]
    fn test_corrupt_slot_falls_back_to_empty() {
        let store = Arc::new(MemoryStore::with_raw("{not json"));
        let controller = controller_with(store, ControllerSettings::default());

        assert!(controller.history().is_empty());
        assert!(
            controller
                .persistence_notice()
                .unwrap()
                .contains("could not be decoded")
        );
    }

    #[test]
    fn test_corrupt_slot_notifies_observer() {
        let store = Arc::new(MemoryStore::with_raw("[{\"prompt\":1}]"));
        let observer = Arc::new(RecordingObserver::default());
        let controller = observed(store, ControllerSettings::default(), observer.clone());

        assert!(controller.history().is_empty());
        assert_eq!(*observer.events.lock().unwrap(), vec!["recovered".to_string()]);
    }

    #[test]
    fn test_readable_slot_does_not_notify_observer() {
        let store = Arc::new(MemoryStore::with_raw("[]"));
        let observer = Arc::new(RecordingObserver::default());
        let _controller = observed(store, ControllerSettings::default(), observer.clone());

        assert!(observer.events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_oversized_slot_keeps_newest() {
        let entries: Vec<HistoryEntry> = (0..5)
            .map(|i| HistoryEntry::new(format!("p{i}"), "r", Category::All, 5 - i))
            .collect();
        let store = Arc::new(MemoryStore::with_raw(&serde_json::to_string(&entries).unwrap()));
        let settings = ControllerSettings::default().with_max_entries(Some(3));

        let controller = controller_with(store, settings);

        let prompts: Vec<_> = controller
            .history()
            .entries()
            .iter()
            .map(|e| e.prompt.as_str())
            .collect();
        assert_eq!(prompts, vec!["p0", "p1", "p2"]);
    }

    #[test]
    fn test_loads_stored_entries_in_order() {
        let raw = r#"[
            {"prompt":"second","result":"r2","model":"music","timestamp":2},
            {"prompt":"first","result":"r1","model":"image","timestamp":1,"rating":{"score":4}}
        ]"#;
        let store = Arc::new(MemoryStore::with_raw(raw));
        let controller = controller_with(store, ControllerSettings::default());

        assert_eq!(controller.history().len(), 2);
        assert_eq!(controller.history().get(0).unwrap().prompt, "second");
        assert_eq!(
            controller.history().get(1).unwrap().score(),
            Some(Score::new(4).unwrap())
        );
    }

    // ==================== Generate ====================

    #[tokio::test]
    async fn test_blank_prompt_is_noop() {
        let (store, mut controller) = controller();
        submit(&mut controller, "first", Category::Image).await;
        let before = controller.history().clone();
        let result_before = controller.session().current_result.clone();

        for blank in ["", "   ", "\n\t "] {
            controller.set_prompt(blank);
            let outcome = controller.generate().await.unwrap();
            assert_eq!(outcome, GenerateOutcome::Skipped);
        }

        assert_eq!(controller.history(), &before);
        assert_eq!(controller.session().current_result, result_before);
        assert_eq!(store.saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_image_scenario() {
        let (store, mut controller) = controller();
        submit(&mut controller, "seed", Category::All).await;
        let n = controller.history().len();

        submit(&mut controller, "cat on a skateboard", Category::Image).await;

        assert_eq!(controller.history().len(), n + 1);
        let newest = controller.history().newest().unwrap();
        assert_eq!(newest.prompt, "cat on a skateboard");
        assert_eq!(newest.category, Category::Image);
        assert_eq!(newest.result, "[Generated Image Would Appear Here]");
        assert!(newest.rating.is_none());
        assert_eq!(
            controller.session().current_result,
            "[Generated Image Would Appear Here]"
        );
        assert!(!controller.session().is_generating());

        let persisted = store.load().unwrap();
        assert_eq!(persisted, controller.history().entries());
    }

    #[tokio::test]
    async fn test_every_category_uses_its_template() {
        let (_, mut controller) = controller();
        for category in Category::ALL {
            submit(&mut controller, "Launch plan", category).await;
            let newest = controller.history().newest().unwrap();
            assert_eq!(newest.category, category);
            assert_eq!(newest.prompt, "Launch plan");
            assert_eq!(newest.result, render_result("Launch plan", category));
        }
    }

    #[tokio::test]
    async fn test_sequential_generates_most_recent_first() {
        let (_, mut controller) = controller();
        submit(&mut controller, "first", Category::Code).await;
        submit(&mut controller, "second", Category::Video).await;

        let prompts: Vec<_> = controller
            .history()
            .entries()
            .iter()
            .map(|e| e.prompt.as_str())
            .collect();
        assert_eq!(prompts, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_generate_clears_previous_rating() {
        let (_, mut controller) = controller();
        submit(&mut controller, "first", Category::Music).await;
        controller.rate(5).unwrap();

        submit(&mut controller, "second", Category::Music).await;

        assert!(controller.session().current_rating.is_none());
        assert!(controller.history().newest().unwrap().rating.is_none());
    }

    #[test]
    fn test_begin_while_generating_is_busy() {
        let (_, mut controller) = controller();
        controller.set_prompt("draw");
        assert!(controller.begin_generation().unwrap().is_some());
        assert!(controller.session().is_generating());

        assert_eq!(controller.begin_generation(), Err(ControllerError::Busy));
        assert!(controller.history().is_empty());
    }

    #[test]
    fn test_begin_clears_result_and_rating() {
        let (_, mut controller) = controller();
        controller.set_prompt("one");
        controller.begin_generation().unwrap();
        controller.finish_generation("r1").unwrap();
        controller.rate(3).unwrap();

        controller.set_prompt("two");
        controller.begin_generation().unwrap();

        assert!(controller.session().current_result.is_empty());
        assert!(controller.session().current_rating.is_none());
    }

    #[test]
    fn test_finish_without_begin() {
        let (_, mut controller) = controller();
        assert_eq!(
            controller.finish_generation("orphan").unwrap_err(),
            ControllerError::NotGenerating
        );
    }

    #[test]
    fn test_category_captured_at_begin() {
        let (_, mut controller) = controller();
        controller.select_category(Category::Presentation);
        controller.set_prompt("Roadmap");
        controller.begin_generation().unwrap();

        controller.select_category(Category::Video);
        controller.set_prompt("edited while waiting");
        let entry = controller.finish_generation("slides").unwrap();

        assert_eq!(entry.category, Category::Presentation);
        assert_eq!(entry.prompt, "Roadmap");
    }

    #[tokio::test]
    async fn test_select_category_keeps_result() {
        let (_, mut controller) = controller();
        submit(&mut controller, "tune", Category::Music).await;

        controller.select_category(Category::Code);

        assert_eq!(
            controller.session().current_result,
            "[Generated Music Composition]"
        );
        assert_eq!(controller.session().selected_category, Category::Code);
    }

    #[tokio::test]
    async fn test_history_cap_drops_oldest() {
        let store = Arc::new(MemoryStore::default());
        let settings = ControllerSettings::default().with_max_entries(Some(2));
        let mut controller = controller_with(store.clone(), settings);

        for prompt in ["a", "b", "c"] {
            submit(&mut controller, prompt, Category::All).await;
        }

        assert_eq!(controller.history().len(), 2);
        assert_eq!(store.load().unwrap().len(), 2);
        assert_eq!(controller.history().get(1).unwrap().prompt, "b");
    }

    #[tokio::test]
    async fn test_observer_sees_cycle() {
        let observer = Arc::new(RecordingObserver::default());
        let mut controller = observed(
            Arc::new(MemoryStore::default()),
            ControllerSettings::default(),
            observer.clone(),
        );

        submit(&mut controller, "x", Category::Video).await;

        assert_eq!(
            *observer.events.lock().unwrap(),
            vec!["start:video".to_string(), "done:video".to_string()]
        );
    }

    // ==================== Rate ====================

    #[tokio::test]
    async fn test_rate_attaches_to_newest_after_generate() {
        let (store, mut controller) = controller();
        submit(&mut controller, "first", Category::Image).await;
        submit(&mut controller, "second", Category::Code).await;
        let before = controller.history().newest().unwrap().clone();

        let outcome = controller.rate(4).unwrap();

        assert_eq!(outcome, RateOutcome::Attached { index: 0 });
        let after = controller.history().newest().unwrap();
        assert_eq!(after.score(), Some(Score::new(4).unwrap()));
        assert_eq!(after.prompt, before.prompt);
        assert_eq!(after.result, before.result);
        assert_eq!(after.category, before.category);
        assert_eq!(after.timestamp, before.timestamp);
        assert!(controller.history().get(1).unwrap().rating.is_none());
        assert_eq!(store.load().unwrap()[0].score(), Some(Score::new(4).unwrap()));
    }

    #[tokio::test]
    async fn test_rate_rejects_out_of_range() {
        let (_, mut controller) = controller();
        submit(&mut controller, "p", Category::All).await;

        for bad in [0, 6, 255] {
            assert_eq!(
                controller.rate(bad),
                Err(ControllerError::Domain(DomainError::InvalidRating(bad)))
            );
        }
        assert!(controller.session().current_rating.is_none());
        assert!(controller.history().newest().unwrap().rating.is_none());
    }

    #[test]
    fn test_rate_without_result() {
        let (_, mut controller) = controller();
        assert_eq!(controller.rate(3), Ok(RateOutcome::NothingDisplayed));
        assert!(controller.session().current_rating.is_none());
    }

    #[test]
    fn test_rate_while_generating_is_busy() {
        let (_, mut controller) = controller();
        controller.set_prompt("p");
        controller.begin_generation().unwrap();
        assert_eq!(controller.rate(2), Err(ControllerError::Busy));
    }

    #[tokio::test]
    async fn test_rate_after_clear_is_session_only() {
        let (store, mut controller) = controller();
        submit(&mut controller, "p", Category::Image).await;
        controller.clear_history();

        let outcome = controller.rate(5).unwrap();

        assert_eq!(outcome, RateOutcome::SessionOnly);
        assert_eq!(
            controller.session().current_rating,
            Some(Score::new(5).unwrap())
        );
        assert!(controller.history().is_empty());
        assert!(store.raw().is_none());
    }

    #[tokio::test]
    async fn test_rate_replayed_entry_defaults_to_newest() {
        let (store, mut controller) = controller();
        submit(&mut controller, "old", Category::Image).await;
        submit(&mut controller, "new", Category::Code).await;

        controller.select_history_entry(1).unwrap();
        let outcome = controller.rate(5).unwrap();

        assert_eq!(outcome, RateOutcome::Attached { index: 0 });
        assert_eq!(
            controller.history().get(0).unwrap().score(),
            Some(Score::new(5).unwrap())
        );
        assert!(controller.history().get(1).unwrap().rating.is_none());
        assert_eq!(store.load().unwrap()[0].score(), Some(Score::new(5).unwrap()));
    }

    #[tokio::test]
    async fn test_rate_displayed_target_follows_replay() {
        let store = Arc::new(MemoryStore::default());
        let settings = ControllerSettings::default().with_rating_target(RatingTarget::Displayed);
        let mut controller = controller_with(store, settings);
        submit(&mut controller, "old", Category::Image).await;
        submit(&mut controller, "new", Category::Code).await;

        controller.select_history_entry(1).unwrap();
        let outcome = controller.rate(2).unwrap();

        assert_eq!(outcome, RateOutcome::Attached { index: 1 });
        assert_eq!(
            controller.history().get(1).unwrap().score(),
            Some(Score::new(2).unwrap())
        );
        assert!(controller.history().get(0).unwrap().rating.is_none());
    }

    // ==================== Clear ====================

    #[tokio::test]
    async fn test_clear_removes_slot_and_keeps_session() {
        let (store, mut controller) = controller();
        submit(&mut controller, "keep me on screen", Category::Presentation).await;
        controller.rate(3).unwrap();
        let session_before = controller.session().clone();

        controller.clear_history();

        assert!(controller.history().is_empty());
        assert!(store.raw().is_none());
        assert!(store.load().unwrap().is_empty());
        assert_eq!(
            controller.session().current_result,
            session_before.current_result
        );
        assert_eq!(
            controller.session().current_prompt,
            session_before.current_prompt
        );
        assert_eq!(
            controller.session().current_rating,
            session_before.current_rating
        );
    }

    // ==================== Select ====================

    #[tokio::test]
    async fn test_select_restores_session_without_touching_log() {
        let (_, mut controller) = controller();
        submit(&mut controller, "fox", Category::Image).await;
        controller.rate(5).unwrap();
        submit(&mut controller, "song", Category::Music).await;
        controller.toggle_history_view();
        let log_before = controller.history().clone();

        let entry = controller.select_history_entry(1).unwrap().clone();

        let session = controller.session();
        assert_eq!(session.current_prompt, entry.prompt);
        assert_eq!(session.selected_category, entry.category);
        assert_eq!(session.current_result, entry.result);
        assert_eq!(session.current_rating, entry.score());
        assert!(!session.history_view_active);
        assert_eq!(controller.history(), &log_before);
    }

    #[test]
    fn test_select_out_of_range() {
        let (_, mut controller) = controller();
        assert_eq!(
            controller.select_history_entry(0).unwrap_err(),
            ControllerError::NoSuchEntry(0)
        );
    }

    #[test]
    fn test_toggle_history_view() {
        let (_, mut controller) = controller();
        controller.toggle_history_view();
        assert!(controller.session().history_view_active);
        controller.toggle_history_view();
        assert!(!controller.session().history_view_active);
    }

    // ==================== Persistence Failures ====================

    #[tokio::test]
    async fn test_write_failure_keeps_memory_state() {
        let store = Arc::new(MemoryStore::default());
        let observer = Arc::new(RecordingObserver::default());
        let mut controller = observed(
            store.clone(),
            ControllerSettings::default(),
            observer.clone(),
        );
        store.fail_writes.store(true, Ordering::SeqCst);

        submit(&mut controller, "p", Category::Code).await;

        assert_eq!(controller.history().len(), 1);
        assert!(
            controller
                .persistence_notice()
                .unwrap()
                .contains("quota exceeded")
        );
        assert!(
            observer
                .events
                .lock()
                .unwrap()
                .contains(&"persist_failed".to_string())
        );
        assert!(store.raw().is_none());

        store.fail_writes.store(false, Ordering::SeqCst);
        controller.rate(4).unwrap();
        assert!(controller.persistence_notice().is_none());
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_shutdown_retries_failed_write() {
        let (store, mut controller) = controller();
        store.fail_writes.store(true, Ordering::SeqCst);
        submit(&mut controller, "p", Category::All).await;
        store.fail_writes.store(false, Ordering::SeqCst);

        let log = controller.shutdown().unwrap();

        assert_eq!(log.len(), 1);
        assert_eq!(store.load().unwrap(), log.entries());
    }

    #[tokio::test]
    async fn test_journal_records_events() {
        let (_, controller) = controller();
        let journal = Arc::new(RecordingJournal::default());
        let mut controller = controller.with_journal(journal.clone());

        submit(&mut controller, "p", Category::All).await;
        controller.rate(5).unwrap();
        controller.select_history_entry(0).unwrap();
        controller.clear_history();

        assert_eq!(
            *journal.types.lock().unwrap(),
            vec!["generated", "rated", "entry_selected", "history_cleared"]
        );
    }
}
