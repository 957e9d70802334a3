use g3_core::catalog;
use g3_core::model::{Checkpoint, Checkpoints, Language, PageId, PageSnapshot, StepId};
use g3_core::progress::{self, Decision};
use storage::TutorialProgressStore;
use tracing::{debug, warn};

use super::event::TutorialEvent;
use super::presenter::StepPresenter;

/// Coarse lifecycle of the tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// `init` has not run yet.
    Uninitialized,
    /// Waiting for the user to pick a tutorial language.
    AwaitingLanguage,
    /// Guiding the user; events update checkpoints and re-evaluate steps.
    Active,
    /// Finished. Only `TutorialEvent::Reset` leaves this state.
    Complete,
}

/// Tracks tutorial progress and decides which step to present.
///
/// The engine owns the checkpoint set for the lifetime of a session and
/// hands every change to the store as a whole-record replace. Storage
/// failures are logged and never surface to the caller: a failed read starts
/// fresh, a failed write keeps the in-memory progress.
pub struct TutorialEngine<P> {
    store: TutorialProgressStore,
    presenter: P,
    state: EngineState,
    checkpoints: Checkpoints,
    language: Language,
    page: PageSnapshot,
    current_step: Option<StepId>,
}

impl<P: StepPresenter> TutorialEngine<P> {
    #[must_use]
    pub fn new(store: TutorialProgressStore, presenter: P) -> Self {
        Self {
            store,
            presenter,
            state: EngineState::Uninitialized,
            checkpoints: Checkpoints::default(),
            language: Language::default(),
            page: PageSnapshot::default(),
            current_step: None,
        }
    }

    /// Load saved progress and start or resume the tutorial on `page`.
    pub async fn init(&mut self, page: PageSnapshot) -> EngineState {
        self.page = page;
        self.current_step = None;
        self.checkpoints = self.store.load_checkpoints_or_default().await;

        if self.checkpoints.is_complete() {
            self.state = EngineState::Complete;
            debug!("tutorial already complete");
            return self.state;
        }

        self.state = EngineState::AwaitingLanguage;
        if !self.checkpoints.is_set(Checkpoint::LanguageSelected) {
            self.presenter.request_language(&catalog::language_prompt());
            return self.state;
        }

        self.language = self.store.load_language_or_default().await;
        self.state = EngineState::Active;
        debug!(language = %self.language, page = %self.page.page, "resuming tutorial");
        self.show_next_step().await;
        self.state
    }

    /// Record a navigation or page re-render and re-evaluate.
    pub async fn page_changed(&mut self, page: PageSnapshot) -> Option<StepId> {
        self.page = page;
        self.show_next_step().await
    }

    /// The step that would be shown on `page`, without recording anything.
    #[must_use]
    pub fn decide_next_step(&self, page: &PageSnapshot) -> Option<StepId> {
        if self.state != EngineState::Active {
            return None;
        }
        progress::next_step(page, &self.checkpoints)
    }

    /// Apply a user action and return the step on screen afterwards.
    ///
    /// Repeated delivery of the same event leaves the checkpoints unchanged.
    pub async fn handle(&mut self, event: TutorialEvent) -> Option<StepId> {
        match event {
            TutorialEvent::LanguageChosen(language) => self.choose_language(language).await,
            TutorialEvent::Reset => self.reset().await,
            TutorialEvent::CompletionAcknowledged => {
                if self.state == EngineState::Complete {
                    self.presenter.clear();
                }
            }
            _ if self.state != EngineState::Active => {
                debug!(?event, state = ?self.state, "ignoring tutorial event");
            }
            TutorialEvent::ComicOpened => {
                if self.mark(Checkpoint::ComicOpened).await {
                    self.clear_step();
                }
            }
            TutorialEvent::BookOpened => {
                self.clear_step();
                if self.page.is(PageId::Story) {
                    self.page = self.page.opened_book();
                }
                self.show_next_step().await;
            }
            TutorialEvent::WordClicked => {
                if self.mark(Checkpoint::WordClicked).await {
                    self.clear_step();
                }
            }
            TutorialEvent::PopupClosed => {
                if self.checkpoints.is_set(Checkpoint::WordClicked)
                    && !self.checkpoints.is_set(Checkpoint::NavigationShown)
                {
                    self.show_next_step().await;
                }
            }
            TutorialEvent::StoryCompleted => {
                if self.mark(Checkpoint::StoryCompleted).await {
                    self.show_next_step().await;
                }
            }
            TutorialEvent::WordsAddedToVault => {
                if self.mark(Checkpoint::WordsAddedToVault).await {
                    self.clear_step();
                    self.show_next_step().await;
                }
            }
            TutorialEvent::StepCompleted(step) => self.complete_step(step).await,
            TutorialEvent::NextClicked(step) => self.acknowledge_step(step).await,
            TutorialEvent::EscapePressed => {
                if let Some(step) = self.current_step.filter(|step| step.escape_skips()) {
                    self.complete_step(step).await;
                }
            }
            TutorialEvent::TagCreated => {
                if self.mark(Checkpoint::TagCreated).await {
                    self.show_next_step().await;
                }
            }
            TutorialEvent::TemplateCreated => {
                if self.mark(Checkpoint::TemplateCreated).await {
                    self.clear_step();
                }
            }
            TutorialEvent::QuizCompleted => {
                if self.mark(Checkpoint::QuizCompleted).await {
                    self.complete().await;
                }
            }
        }
        self.current_step
    }

    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    #[must_use]
    pub fn checkpoints(&self) -> &Checkpoints {
        &self.checkpoints
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn current_step(&self) -> Option<StepId> {
        self.current_step
    }

    #[must_use]
    pub fn page(&self) -> &PageSnapshot {
        &self.page
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    // ─── Transitions ───────────────────────────────────────────────────────────

    async fn choose_language(&mut self, language: Language) {
        match self.state {
            EngineState::Uninitialized | EngineState::Complete => {
                debug!(state = ?self.state, "ignoring language choice");
            }
            EngineState::Active => {
                if language == self.language {
                    return;
                }
                self.language = language;
                self.save_language().await;
                if let Some(step) = self.current_step {
                    self.present(step);
                }
            }
            EngineState::AwaitingLanguage => {
                self.language = language;
                self.mark(Checkpoint::LanguageSelected).await;
                self.save_language().await;
                self.state = EngineState::Active;
                self.presenter.clear();
                self.presenter.welcome(&catalog::welcome(language));
                debug!(%language, "tutorial started");
                self.show_next_step().await;
            }
        }
    }

    async fn complete_step(&mut self, step: StepId) {
        if self.current_step == Some(step) {
            self.clear_step();
        }
        match step {
            StepId::ReturnHome => {
                self.mark(Checkpoint::ReturnedHome).await;
            }
            StepId::GoToVault => {
                self.mark(Checkpoint::VaultVisited).await;
            }
            StepId::CustomizeQuiz => {
                self.mark(Checkpoint::CustomizeShown).await;
            }
            StepId::AddNewWord => {
                self.mark(Checkpoint::AddWordShown).await;
                self.show_next_step().await;
            }
            StepId::DeleteWord => {
                self.mark(Checkpoint::DeleteWordShown).await;
                self.show_next_step().await;
            }
            StepId::CreateTag => {
                self.mark(Checkpoint::TagCreated).await;
                self.show_next_step().await;
            }
            _ => {}
        }
    }

    async fn acknowledge_step(&mut self, step: StepId) {
        let flag = match step {
            StepId::ExplainDifficulty => Checkpoint::DifficultyExplained,
            StepId::AddNewWord => Checkpoint::AddWordShown,
            StepId::DeleteWord => Checkpoint::DeleteWordShown,
            StepId::TemplateInfo => Checkpoint::TemplateInfoShown,
            StepId::StartQuizInfo => Checkpoint::StartQuizInfoShown,
            _ => {
                debug!(%step, "step has no next button");
                return;
            }
        };

        self.clear_step();
        if step == StepId::StartQuizInfo {
            // Both flags land in the same write.
            self.checkpoints.set(flag);
            self.complete().await;
            return;
        }
        self.mark(flag).await;
        self.show_next_step().await;
    }

    async fn show_next_step(&mut self) -> Option<StepId> {
        if self.state != EngineState::Active {
            return None;
        }

        match progress::decide(&self.page, &self.checkpoints) {
            Decision::Show { step, mark } => {
                if let Some(checkpoint) = mark {
                    self.mark(checkpoint).await;
                }
                self.present(step);
                if let Some(checkpoint) = step.marks_on_show() {
                    self.mark(checkpoint).await;
                }
            }
            Decision::Idle => self.clear_step(),
            Decision::Complete => self.complete().await,
        }
        self.current_step
    }

    async fn complete(&mut self) {
        self.checkpoints.set(Checkpoint::TutorialComplete);
        self.persist().await;
        self.state = EngineState::Complete;
        self.current_step = None;
        self.presenter.clear();
        let text = catalog::step_text(StepId::TutorialComplete, self.language);
        self.presenter
            .celebrate(&text, catalog::finish_label(self.language));
        debug!("tutorial complete");
    }

    async fn reset(&mut self) {
        if let Err(err) = self.store.clear().await {
            warn!(error = %err, "could not clear saved tutorial progress");
        }
        self.checkpoints = Checkpoints::default();
        self.language = Language::default();
        self.current_step = None;
        self.state = EngineState::AwaitingLanguage;
        self.presenter.clear();
        self.presenter.request_language(&catalog::language_prompt());
        debug!("tutorial reset");
    }

    // ─── Helpers ───────────────────────────────────────────────────────────────

    fn present(&mut self, step: StepId) {
        self.current_step = Some(step);
        let text = catalog::step_text(step, self.language);
        self.presenter.show(step, &text);
        debug!(%step, page = %self.page.page, "showing tutorial step");
    }

    fn clear_step(&mut self) {
        if self.current_step.take().is_some() {
            self.presenter.clear();
        }
    }

    /// Set a checkpoint and persist it if it was not already set.
    async fn mark(&mut self, checkpoint: Checkpoint) -> bool {
        let changed = self.checkpoints.set(checkpoint);
        if changed {
            debug!(%checkpoint, "checkpoint reached");
            self.persist().await;
        }
        changed
    }

    async fn persist(&self) {
        if let Err(err) = self.store.save_checkpoints(&self.checkpoints).await {
            warn!(error = %err, "could not save tutorial progress, keeping it in memory");
        }
    }

    async fn save_language(&self) {
        if let Err(err) = self.store.save_language(self.language).await {
            warn!(error = %err, "could not save tutorial language");
        }
    }
}
