use g3_core::model::{Language, StepId};

/// User actions reported by the page host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialEvent {
    LanguageChosen(Language),
    ComicOpened,
    BookOpened,
    WordClicked,
    PopupClosed,
    StoryCompleted,
    WordsAddedToVault,
    /// The user clicked the highlighted target of a step.
    StepCompleted(StepId),
    /// The user pressed Next on a step that offers it.
    NextClicked(StepId),
    EscapePressed,
    /// A tag was created outside the guided step.
    TagCreated,
    /// A quiz template was saved.
    TemplateCreated,
    QuizCompleted,
    /// The completion message was dismissed.
    CompletionAcknowledged,
    Reset,
}
