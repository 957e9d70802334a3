use std::sync::Arc;

use async_trait::async_trait;
use g3_core::catalog::{self, Greeting, StepText};
use g3_core::model::{Checkpoint, Checkpoints, Language, PageId, PageSnapshot, StepId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use services::{EngineState, StepPresenter, TutorialEngine, TutorialEvent};
use storage::repository::{InMemoryRepository, KeyValueRepository, StorageError};
use storage::tutorial::{LANGUAGE_KEY, PROGRESS_KEY};
use storage::TutorialProgressStore;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Shown {
    LanguagePrompt,
    Welcome(&'static str),
    Step(StepId, &'static str),
    Cleared,
    Celebrated(&'static str, String),
}

#[derive(Debug, Default)]
struct Recorder {
    log: Vec<Shown>,
}

impl Recorder {
    fn last(&self) -> Option<&Shown> {
        self.log.last()
    }
}

impl StepPresenter for Recorder {
    fn request_language(&mut self, _prompt: &Greeting) {
        self.log.push(Shown::LanguagePrompt);
    }

    fn welcome(&mut self, greeting: &Greeting) {
        self.log.push(Shown::Welcome(greeting.title));
    }

    fn show(&mut self, step: StepId, text: &StepText) {
        self.log.push(Shown::Step(step, text.title));
    }

    fn clear(&mut self) {
        self.log.push(Shown::Cleared);
    }

    fn celebrate(&mut self, text: &StepText, finish_label: &str) {
        self.log
            .push(Shown::Celebrated(text.title, finish_label.to_string()));
    }
}

/// Repository whose every call fails.
struct OfflineRepository;

#[async_trait]
impl KeyValueRepository for OfflineRepository {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn put(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn delete(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".into()))
    }
}

fn progress(flags: &[Checkpoint]) -> Checkpoints {
    flags
        .iter()
        .fold(Checkpoints::new(), |cp, flag| cp.with(*flag))
}

async fn seeded(
    flags: &[Checkpoint],
    language: Language,
) -> (InMemoryRepository, TutorialEngine<Recorder>) {
    let repo = InMemoryRepository::new();
    let store = TutorialProgressStore::new(Arc::new(repo.clone()));
    store.save_checkpoints(&progress(flags)).await.unwrap();
    store.save_language(language).await.unwrap();
    (repo, TutorialEngine::new(store, Recorder::default()))
}

async fn saved(repo: &InMemoryRepository) -> Checkpoints {
    TutorialProgressStore::new(Arc::new(repo.clone()))
        .load_checkpoints()
        .await
        .unwrap()
        .unwrap_or_default()
}

const HOME: PageSnapshot = PageSnapshot {
    page: PageId::Home,
    start_control: false,
    reading_marker: false,
};

#[tokio::test]
async fn fresh_install_asks_for_language_then_selects_comic() {
    let repo = InMemoryRepository::new();
    let store = TutorialProgressStore::new(Arc::new(repo.clone()));
    let mut engine = TutorialEngine::new(store, Recorder::default());

    assert_eq!(engine.init(HOME).await, EngineState::AwaitingLanguage);
    assert_eq!(engine.presenter().log, vec![Shown::LanguagePrompt]);
    assert_eq!(engine.current_step(), None);

    let step = engine
        .handle(TutorialEvent::LanguageChosen(Language::English))
        .await;
    assert_eq!(step, Some(StepId::SelectComic));
    assert_eq!(engine.state(), EngineState::Active);
    assert!(
        engine
            .presenter()
            .log
            .contains(&Shown::Welcome(catalog::welcome(Language::English).title))
    );
    assert_eq!(
        engine.presenter().last(),
        Some(&Shown::Step(
            StepId::SelectComic,
            catalog::step_text(StepId::SelectComic, Language::English).title
        ))
    );

    let stored = saved(&repo).await;
    assert!(stored.is_set(Checkpoint::LanguageSelected));
    assert_eq!(
        repo.get(LANGUAGE_KEY).await.unwrap().as_deref(),
        Some("english")
    );
}

#[tokio::test]
async fn opened_comic_on_home_shows_nothing() {
    let (_, mut engine) = seeded(
        &[Checkpoint::LanguageSelected, Checkpoint::ComicOpened],
        Language::English,
    )
    .await;

    assert_eq!(engine.init(HOME).await, EngineState::Active);
    assert_eq!(engine.current_step(), None);
    assert!(
        !engine
            .presenter()
            .log
            .iter()
            .any(|shown| matches!(shown, Shown::Step(..)))
    );
}

#[tokio::test]
async fn clicked_word_leads_to_navigation_hint_once() {
    let (repo, mut engine) = seeded(
        &[
            Checkpoint::LanguageSelected,
            Checkpoint::ComicOpened,
            Checkpoint::WordClicked,
        ],
        Language::Telugu,
    )
    .await;
    let reading = PageSnapshot::new(PageId::Story).with_reading_marker();

    engine.init(reading).await;
    assert_eq!(engine.current_step(), Some(StepId::NavigateStory));
    assert_eq!(
        engine.presenter().last(),
        Some(&Shown::Step(
            StepId::NavigateStory,
            catalog::step_text(StepId::NavigateStory, Language::Telugu).title
        ))
    );
    assert!(saved(&repo).await.is_set(Checkpoint::NavigationShown));

    let before = engine.presenter().log.len();
    engine.handle(TutorialEvent::PopupClosed).await;
    assert_eq!(engine.presenter().log.len(), before);
}

#[tokio::test]
async fn first_vault_visit_is_recorded_with_explanation() {
    let (repo, mut engine) = seeded(
        &[
            Checkpoint::LanguageSelected,
            Checkpoint::ComicOpened,
            Checkpoint::WordClicked,
        ],
        Language::English,
    )
    .await;

    engine.init(PageSnapshot::new(PageId::Vault)).await;
    assert_eq!(engine.current_step(), Some(StepId::ExplainDifficulty));
    assert!(engine.checkpoints().is_set(Checkpoint::VaultVisited));
    assert!(saved(&repo).await.is_set(Checkpoint::VaultVisited));
}

#[tokio::test]
async fn finished_quiz_completes_the_tutorial() {
    let (repo, mut engine) = seeded(
        &[
            Checkpoint::LanguageSelected,
            Checkpoint::ComicOpened,
            Checkpoint::WordClicked,
            Checkpoint::VaultVisited,
            Checkpoint::QuizStarted,
        ],
        Language::English,
    )
    .await;

    engine.init(PageSnapshot::new(PageId::Quiz)).await;
    assert_eq!(engine.current_step(), Some(StepId::CustomizeQuiz));

    let step = engine.handle(TutorialEvent::QuizCompleted).await;
    assert_eq!(step, None);
    assert_eq!(engine.state(), EngineState::Complete);
    assert_eq!(
        engine.presenter().last(),
        Some(&Shown::Celebrated(
            catalog::step_text(StepId::TutorialComplete, Language::English).title,
            "Start Learning!".to_string()
        ))
    );

    let stored = saved(&repo).await;
    assert!(stored.is_set(Checkpoint::QuizCompleted));
    assert!(stored.is_complete());
}

#[tokio::test]
async fn stored_quiz_completion_finishes_on_next_evaluation() {
    let (repo, mut engine) = seeded(
        &[
            Checkpoint::LanguageSelected,
            Checkpoint::ComicOpened,
            Checkpoint::WordClicked,
            Checkpoint::VaultVisited,
            Checkpoint::QuizStarted,
            Checkpoint::QuizCompleted,
        ],
        Language::English,
    )
    .await;

    assert_eq!(engine.init(HOME).await, EngineState::Complete);
    assert!(saved(&repo).await.is_complete());
}

#[tokio::test]
async fn completed_tutorial_stays_silent() {
    let (repo, mut engine) = seeded(
        &[Checkpoint::LanguageSelected, Checkpoint::TutorialComplete],
        Language::English,
    )
    .await;

    assert_eq!(engine.init(HOME).await, EngineState::Complete);
    assert!(engine.presenter().log.is_empty());
    assert_eq!(engine.decide_next_step(&HOME), None);

    for event in [
        TutorialEvent::ComicOpened,
        TutorialEvent::QuizCompleted,
        TutorialEvent::LanguageChosen(Language::Telugu),
        TutorialEvent::NextClicked(StepId::ExplainDifficulty),
    ] {
        assert_eq!(engine.handle(event).await, None);
    }
    assert_eq!(engine.page_changed(HOME).await, None);
    assert!(engine.presenter().log.is_empty());
    assert_eq!(
        saved(&repo).await,
        progress(&[Checkpoint::LanguageSelected, Checkpoint::TutorialComplete])
    );
}

#[tokio::test]
async fn reset_forgets_everything() {
    let (repo, mut engine) = seeded(
        &[
            Checkpoint::LanguageSelected,
            Checkpoint::ComicOpened,
            Checkpoint::WordClicked,
            Checkpoint::TutorialComplete,
        ],
        Language::Telugu,
    )
    .await;
    engine.init(HOME).await;

    engine.handle(TutorialEvent::Reset).await;
    assert_eq!(engine.state(), EngineState::AwaitingLanguage);
    assert_eq!(*engine.checkpoints(), Checkpoints::default());
    assert_eq!(engine.language(), Language::English);
    assert_eq!(engine.presenter().last(), Some(&Shown::LanguagePrompt));
    assert_eq!(repo.get(PROGRESS_KEY).await.unwrap(), None);
    assert_eq!(repo.get(LANGUAGE_KEY).await.unwrap(), None);

    let step = engine
        .handle(TutorialEvent::LanguageChosen(Language::English))
        .await;
    assert_eq!(step, Some(StepId::SelectComic));
}

#[tokio::test]
async fn unreadable_progress_starts_fresh() {
    let repo = InMemoryRepository::new();
    repo.put(PROGRESS_KEY, "{not json").await.unwrap();
    let store = TutorialProgressStore::new(Arc::new(repo.clone()));
    let mut engine = TutorialEngine::new(store, Recorder::default());

    assert_eq!(engine.init(HOME).await, EngineState::AwaitingLanguage);
    assert_eq!(*engine.checkpoints(), Checkpoints::default());
}

#[tokio::test]
async fn offline_storage_keeps_progress_in_memory() {
    let store = TutorialProgressStore::new(Arc::new(OfflineRepository));
    let mut engine = TutorialEngine::new(store, Recorder::default());

    assert_eq!(engine.init(HOME).await, EngineState::AwaitingLanguage);
    engine
        .handle(TutorialEvent::LanguageChosen(Language::Telugu))
        .await;
    assert_eq!(engine.current_step(), Some(StepId::SelectComic));
    assert_eq!(engine.language(), Language::Telugu);

    engine.handle(TutorialEvent::ComicOpened).await;
    assert!(engine.checkpoints().is_set(Checkpoint::ComicOpened));

    engine.handle(TutorialEvent::Reset).await;
    assert_eq!(engine.state(), EngineState::AwaitingLanguage);
}

#[tokio::test]
async fn switching_language_re_presents_current_step() {
    let (_, mut engine) = seeded(&[Checkpoint::LanguageSelected], Language::English).await;
    engine.init(HOME).await;
    assert_eq!(engine.current_step(), Some(StepId::SelectComic));

    engine
        .handle(TutorialEvent::LanguageChosen(Language::Telugu))
        .await;
    assert_eq!(engine.language(), Language::Telugu);
    assert_eq!(
        engine.presenter().last(),
        Some(&Shown::Step(
            StepId::SelectComic,
            catalog::step_text(StepId::SelectComic, Language::Telugu).title
        ))
    );
}

#[tokio::test]
async fn escape_only_skips_tag_step() {
    let (_, mut engine) = seeded(
        &[
            Checkpoint::LanguageSelected,
            Checkpoint::ComicOpened,
            Checkpoint::WordClicked,
            Checkpoint::VaultVisited,
            Checkpoint::DifficultyExplained,
        ],
        Language::English,
    )
    .await;
    engine.init(PageSnapshot::new(PageId::Vault)).await;
    assert_eq!(engine.current_step(), Some(StepId::AddNewWord));

    engine.handle(TutorialEvent::EscapePressed).await;
    assert_eq!(engine.current_step(), Some(StepId::AddNewWord));
    assert!(!engine.checkpoints().is_set(Checkpoint::AddWordShown));

    engine.handle(TutorialEvent::NextClicked(StepId::AddNewWord)).await;
    engine.handle(TutorialEvent::NextClicked(StepId::DeleteWord)).await;
    assert_eq!(engine.current_step(), Some(StepId::CreateTag));

    let step = engine.handle(TutorialEvent::EscapePressed).await;
    assert_eq!(step, None);
    assert!(engine.checkpoints().is_set(Checkpoint::TagCreated));
}

#[tokio::test]
async fn full_walkthrough_reaches_completion() {
    let repo = InMemoryRepository::new();
    let store = TutorialProgressStore::new(Arc::new(repo.clone()));
    let mut engine = TutorialEngine::new(store, Recorder::default());
    let cover = PageSnapshot::new(PageId::Story).with_start_control();
    let vault = PageSnapshot::new(PageId::Vault);
    let quiz = PageSnapshot::new(PageId::Quiz);

    engine.init(HOME).await;
    let lang = TutorialEvent::LanguageChosen(Language::Telugu);
    assert_eq!(engine.handle(lang).await, Some(StepId::SelectComic));
    assert_eq!(engine.handle(TutorialEvent::ComicOpened).await, None);

    assert_eq!(engine.page_changed(cover).await, Some(StepId::OpenBook));
    assert_eq!(
        engine.handle(TutorialEvent::BookOpened).await,
        Some(StepId::ClickWord)
    );
    assert_eq!(engine.handle(TutorialEvent::WordClicked).await, None);
    assert_eq!(
        engine.handle(TutorialEvent::PopupClosed).await,
        Some(StepId::NavigateStory)
    );
    assert_eq!(
        engine.handle(TutorialEvent::StoryCompleted).await,
        Some(StepId::AddToVault)
    );
    assert_eq!(
        engine.handle(TutorialEvent::WordsAddedToVault).await,
        Some(StepId::ReturnHome)
    );
    let done = TutorialEvent::StepCompleted(StepId::ReturnHome);
    assert_eq!(engine.handle(done).await, None);

    assert_eq!(engine.page_changed(HOME).await, Some(StepId::GoToVault));
    let done = TutorialEvent::StepCompleted(StepId::GoToVault);
    assert_eq!(engine.handle(done).await, None);

    assert_eq!(
        engine.page_changed(vault).await,
        Some(StepId::ExplainDifficulty)
    );
    let next = TutorialEvent::NextClicked(StepId::ExplainDifficulty);
    assert_eq!(engine.handle(next).await, Some(StepId::AddNewWord));
    let done = TutorialEvent::StepCompleted(StepId::AddNewWord);
    assert_eq!(engine.handle(done).await, Some(StepId::DeleteWord));
    let next = TutorialEvent::NextClicked(StepId::DeleteWord);
    assert_eq!(engine.handle(next).await, Some(StepId::CreateTag));
    assert_eq!(engine.handle(TutorialEvent::TagCreated).await, None);

    assert_eq!(engine.page_changed(HOME).await, Some(StepId::StartQuiz));
    let done = TutorialEvent::StepCompleted(StepId::StartQuiz);
    assert_eq!(engine.handle(done).await, None);

    assert_eq!(engine.page_changed(quiz).await, Some(StepId::CustomizeQuiz));
    let done = TutorialEvent::StepCompleted(StepId::CustomizeQuiz);
    assert_eq!(engine.handle(done).await, None);
    assert_eq!(engine.handle(TutorialEvent::TemplateCreated).await, None);
    assert_eq!(engine.page_changed(quiz).await, Some(StepId::TemplateInfo));
    let next = TutorialEvent::NextClicked(StepId::TemplateInfo);
    assert_eq!(engine.handle(next).await, Some(StepId::StartQuizInfo));
    let next = TutorialEvent::NextClicked(StepId::StartQuizInfo);
    assert_eq!(engine.handle(next).await, None);

    assert_eq!(engine.state(), EngineState::Complete);
    assert_eq!(
        engine.presenter().last(),
        Some(&Shown::Celebrated(
            catalog::step_text(StepId::TutorialComplete, Language::Telugu).title,
            catalog::finish_label(Language::Telugu).to_string()
        ))
    );
    engine.handle(TutorialEvent::CompletionAcknowledged).await;
    assert_eq!(engine.presenter().last(), Some(&Shown::Cleared));

    let stored = saved(&repo).await;
    assert!(stored.is_complete());
    assert!(stored.is_set(Checkpoint::StartQuizInfoShown));
    assert!(stored.is_set(Checkpoint::TemplateCreated));
    assert!(!stored.is_set(Checkpoint::QuizCompleted));

    let mut resumed = TutorialEngine::new(
        TutorialProgressStore::new(Arc::new(repo.clone())),
        Recorder::default(),
    );
    assert_eq!(resumed.init(HOME).await, EngineState::Complete);
}

/// Something the host can report: an action or a page change.
#[derive(Debug, Clone, Copy)]
enum Input {
    Event(TutorialEvent),
    Page(PageSnapshot),
}

async fn apply(engine: &mut TutorialEngine<Recorder>, input: Input) {
    match input {
        Input::Event(event) => {
            engine.handle(event).await;
        }
        Input::Page(page) => {
            engine.page_changed(page).await;
        }
    }
}

fn random_input(rng: &mut StdRng) -> Input {
    const STEPS: [StepId; 6] = [
        StepId::ReturnHome,
        StepId::GoToVault,
        StepId::AddNewWord,
        StepId::DeleteWord,
        StepId::CreateTag,
        StepId::CustomizeQuiz,
    ];
    const NEXT: [StepId; 5] = [
        StepId::ExplainDifficulty,
        StepId::AddNewWord,
        StepId::DeleteWord,
        StepId::TemplateInfo,
        StepId::StartQuizInfo,
    ];
    let step = STEPS[rng.random_range(0..STEPS.len())];
    let next = NEXT[rng.random_range(0..NEXT.len())];

    let event = match rng.random_range(0..16) {
        0 => TutorialEvent::LanguageChosen(Language::Telugu),
        1 => TutorialEvent::ComicOpened,
        2 => TutorialEvent::BookOpened,
        3 => TutorialEvent::WordClicked,
        4 => TutorialEvent::PopupClosed,
        5 => TutorialEvent::StoryCompleted,
        6 => TutorialEvent::WordsAddedToVault,
        7 => TutorialEvent::StepCompleted(step),
        8 => TutorialEvent::NextClicked(next),
        9 => TutorialEvent::EscapePressed,
        10 => TutorialEvent::TagCreated,
        11 => TutorialEvent::TemplateCreated,
        12 => TutorialEvent::QuizCompleted,
        _ => {
            let pages = [PageId::Home, PageId::Story, PageId::Vault, PageId::Quiz];
            let mut page = PageSnapshot::new(pages[rng.random_range(0..pages.len())]);
            page.start_control = rng.random_bool(0.5);
            page.reading_marker = rng.random_bool(0.5);
            return Input::Page(page);
        }
    };
    Input::Event(event)
}

#[tokio::test]
async fn checkpoints_only_grow_and_repeats_change_nothing() {
    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let store = TutorialProgressStore::new(Arc::new(InMemoryRepository::new()));
        let mut engine = TutorialEngine::new(store, Recorder::default());
        engine.init(HOME).await;
        engine
            .handle(TutorialEvent::LanguageChosen(Language::English))
            .await;

        for _ in 0..200 {
            let before = *engine.checkpoints();
            let input = random_input(&mut rng);
            apply(&mut engine, input).await;
            let once = *engine.checkpoints();
            assert!(
                before.reached().all(|cp| once.is_set(cp)),
                "seed {seed}: {input:?} cleared a checkpoint"
            );

            apply(&mut engine, input).await;
            assert_eq!(
                *engine.checkpoints(),
                once,
                "seed {seed}: repeating {input:?} changed checkpoints"
            );
        }
    }
}
