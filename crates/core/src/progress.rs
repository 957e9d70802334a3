//! Step selection.
//!
//! The tutorial is driven by an ordered table of stages. Each stage has a
//! guard and an ordered list of rules:
//!
//! * stages are tried top to bottom and the first stage whose guard holds
//!   owns the outcome;
//! * inside that stage the first rule whose predicate holds wins;
//! * an owning stage with no matching rule means "idle" (nothing is shown),
//!   it never falls through to later stages.
//!
//! Evaluation is pure. Two rules also record a checkpoint when they fire
//! (arriving on the vault page and arriving on the quiz page); those are
//! returned as `Decision::Show { mark, .. }` for the caller to persist.

use crate::model::Checkpoint::{
    AddWordShown, ComicOpened, CustomizeShown, DeleteWordShown, DifficultyExplained,
    NavigationShown, QuizCompleted, QuizStarted, ReturnedHome, StartQuizInfoShown,
    StoryCompleted, TagCreated, TemplateInfoShown, TutorialComplete, VaultVisited, WordClicked,
    WordsAddedToVault,
};
use crate::model::{Checkpoint, Checkpoints, PageId, PageSnapshot, StepId};

/// Outcome of evaluating the stage table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Present `step`, recording `mark` first if present.
    Show {
        step: StepId,
        mark: Option<Checkpoint>,
    },
    /// Nothing to show; the user is expected to act or navigate.
    Idle,
    /// Every milestone is done: switch to the terminal state.
    Complete,
}

impl Decision {
    #[must_use]
    pub fn step(self) -> Option<StepId> {
        match self {
            Decision::Show { step, .. } => Some(step),
            Decision::Idle | Decision::Complete => None,
        }
    }
}

type Predicate = fn(&PageSnapshot, &Checkpoints) -> bool;

struct Rule {
    when: Predicate,
    then: Decision,
}

struct Stage {
    name: &'static str,
    when: Predicate,
    rules: &'static [Rule],
}

const fn show(step: StepId) -> Decision {
    Decision::Show { step, mark: None }
}

const fn show_marking(step: StepId, mark: Checkpoint) -> Decision {
    Decision::Show {
        step,
        mark: Some(mark),
    }
}

fn always(_: &PageSnapshot, _: &Checkpoints) -> bool {
    true
}

const STAGES: &[Stage] = &[
    Stage {
        name: "finished",
        when: |_, cp| cp.is_set(TutorialComplete),
        rules: &[],
    },
    Stage {
        name: "pick-comic",
        when: |page, cp| !cp.is_set(ComicOpened) && page.is(PageId::Home),
        rules: &[Rule {
            when: always,
            then: show(StepId::SelectComic),
        }],
    },
    Stage {
        name: "comic-opening",
        when: |page, cp| {
            cp.is_set(ComicOpened) && !cp.is_set(WordClicked) && page.is(PageId::Home)
        },
        rules: &[],
    },
    Stage {
        name: "story",
        when: |page, _| page.is(PageId::Story),
        rules: &[
            Rule {
                when: |page, _| page.start_control && !page.reading_marker,
                then: show(StepId::OpenBook),
            },
            Rule {
                when: |page, cp| page.reading_marker && !cp.is_set(WordClicked),
                then: show(StepId::ClickWord),
            },
            Rule {
                when: |page, cp| {
                    page.reading_marker && cp.is_set(WordClicked) && !cp.is_set(NavigationShown)
                },
                then: show(StepId::NavigateStory),
            },
            Rule {
                when: |_, cp| cp.is_set(StoryCompleted) && !cp.is_set(WordsAddedToVault),
                then: show(StepId::AddToVault),
            },
            Rule {
                when: |_, cp| cp.is_set(WordsAddedToVault) && !cp.is_set(ReturnedHome),
                then: show(StepId::ReturnHome),
            },
        ],
    },
    Stage {
        name: "find-vault",
        when: |_, cp| !cp.is_set(VaultVisited),
        rules: &[
            Rule {
                when: |page, cp| page.is(PageId::Home) && cp.is_set(ReturnedHome),
                then: show(StepId::GoToVault),
            },
            Rule {
                when: |page, _| page.is(PageId::Vault),
                then: show_marking(StepId::ExplainDifficulty, VaultVisited),
            },
        ],
    },
    Stage {
        name: "vault-tour",
        when: |page, cp| page.is(PageId::Vault) && cp.is_set(VaultVisited),
        rules: &[
            Rule {
                when: |_, cp| !cp.is_set(DifficultyExplained),
                then: show(StepId::ExplainDifficulty),
            },
            Rule {
                when: |_, cp| !cp.is_set(AddWordShown),
                then: show(StepId::AddNewWord),
            },
            Rule {
                when: |_, cp| !cp.is_set(DeleteWordShown),
                then: show(StepId::DeleteWord),
            },
            Rule {
                when: |_, cp| !cp.is_set(TagCreated),
                then: show(StepId::CreateTag),
            },
        ],
    },
    Stage {
        name: "find-quiz",
        when: |_, cp| !cp.is_set(QuizStarted),
        rules: &[
            Rule {
                when: |page, _| page.is(PageId::Home) || page.is(PageId::Vault),
                then: show(StepId::StartQuiz),
            },
            Rule {
                when: |page, _| page.is(PageId::Quiz),
                then: show_marking(StepId::CustomizeQuiz, QuizStarted),
            },
        ],
    },
    Stage {
        name: "quiz-tour",
        when: |page, cp| page.is(PageId::Quiz) && cp.is_set(QuizStarted),
        rules: &[
            Rule {
                when: |_, cp| !cp.is_set(CustomizeShown),
                then: show(StepId::CustomizeQuiz),
            },
            Rule {
                when: |_, cp| !cp.is_set(TemplateInfoShown),
                then: show(StepId::TemplateInfo),
            },
            Rule {
                when: |_, cp| !cp.is_set(StartQuizInfoShown),
                then: show(StepId::StartQuizInfo),
            },
        ],
    },
    Stage {
        name: "wrap-up",
        when: |_, cp| cp.is_set(QuizCompleted) && !cp.is_set(TutorialComplete),
        rules: &[Rule {
            when: always,
            then: Decision::Complete,
        }],
    },
];

/// Evaluate the stage table for the given page and progress.
#[must_use]
pub fn decide(page: &PageSnapshot, checkpoints: &Checkpoints) -> Decision {
    match owning_stage(page, checkpoints) {
        Some(stage) => stage
            .rules
            .iter()
            .find(|rule| (rule.when)(page, checkpoints))
            .map_or(Decision::Idle, |rule| rule.then),
        None => Decision::Idle,
    }
}

/// The step `decide` would present, ignoring marks and completion.
#[must_use]
pub fn next_step(page: &PageSnapshot, checkpoints: &Checkpoints) -> Option<StepId> {
    decide(page, checkpoints).step()
}

/// Name of the stage that owns the outcome, for diagnostics.
#[must_use]
pub fn stage_name(page: &PageSnapshot, checkpoints: &Checkpoints) -> Option<&'static str> {
    owning_stage(page, checkpoints).map(|stage| stage.name)
}

fn owning_stage(page: &PageSnapshot, checkpoints: &Checkpoints) -> Option<&'static Stage> {
    STAGES.iter().find(|stage| (stage.when)(page, checkpoints))
}
