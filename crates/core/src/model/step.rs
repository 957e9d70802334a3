use std::fmt;

use crate::model::Checkpoint;

/// Identifier of a guided tutorial step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    SelectComic,
    OpenBook,
    ClickWord,
    NavigateStory,
    AddToVault,
    ReturnHome,
    GoToVault,
    ExplainDifficulty,
    AddNewWord,
    DeleteWord,
    CreateTag,
    StartQuiz,
    CustomizeQuiz,
    TemplateInfo,
    StartQuizInfo,
    SaveTemplate,
    CompleteQuiz,
    TutorialComplete,
}

impl StepId {
    pub const ALL: [StepId; 18] = [
        StepId::SelectComic,
        StepId::OpenBook,
        StepId::ClickWord,
        StepId::NavigateStory,
        StepId::AddToVault,
        StepId::ReturnHome,
        StepId::GoToVault,
        StepId::ExplainDifficulty,
        StepId::AddNewWord,
        StepId::DeleteWord,
        StepId::CreateTag,
        StepId::StartQuiz,
        StepId::CustomizeQuiz,
        StepId::TemplateInfo,
        StepId::StartQuizInfo,
        StepId::SaveTemplate,
        StepId::CompleteQuiz,
        StepId::TutorialComplete,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            StepId::SelectComic => "selectComic",
            StepId::OpenBook => "openBook",
            StepId::ClickWord => "clickWord",
            StepId::NavigateStory => "navigateStory",
            StepId::AddToVault => "addToVault",
            StepId::ReturnHome => "returnHome",
            StepId::GoToVault => "goToVault",
            StepId::ExplainDifficulty => "explainDifficulty",
            StepId::AddNewWord => "addNewWord",
            StepId::DeleteWord => "deleteWord",
            StepId::CreateTag => "createTag",
            StepId::StartQuiz => "startQuiz",
            StepId::CustomizeQuiz => "customizeQuiz",
            StepId::TemplateInfo => "templateInfo",
            StepId::StartQuizInfo => "startQuizInfo",
            StepId::SaveTemplate => "saveTemplate",
            StepId::CompleteQuiz => "completeQuiz",
            StepId::TutorialComplete => "tutorialComplete",
        }
    }

    /// Look a step up by its key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.key() == key)
    }

    /// Logical on-screen target for the presentation layer to resolve.
    ///
    /// `None` means the step is shown without an anchor element.
    #[must_use]
    pub fn target(self) -> Option<&'static str> {
        match self {
            StepId::SelectComic => Some("comic:little-red-hen"),
            StepId::OpenBook => Some("story:start"),
            StepId::ClickWord => Some("story:text"),
            StepId::NavigateStory => Some("story:next"),
            StepId::AddToVault => Some("story:add-to-vault"),
            StepId::ReturnHome => Some("nav:logo"),
            StepId::GoToVault => Some("nav:vault"),
            StepId::ExplainDifficulty => Some("vault:difficulty-filters"),
            StepId::AddNewWord => Some("vault:add-word"),
            StepId::DeleteWord => Some("vault:delete-word"),
            StepId::CreateTag => Some("vault:add-tag"),
            StepId::StartQuiz => Some("nav:quiz-builder"),
            StepId::CustomizeQuiz => Some("quiz:customize"),
            StepId::TemplateInfo => Some("quiz:templates"),
            StepId::StartQuizInfo => Some("quiz:start"),
            StepId::SaveTemplate => Some("quiz:save-as-template"),
            StepId::CompleteQuiz | StepId::TutorialComplete => None,
        }
    }

    /// Steps the user can acknowledge with a Next button.
    #[must_use]
    pub fn has_next_button(self) -> bool {
        matches!(
            self,
            StepId::ExplainDifficulty
                | StepId::AddNewWord
                | StepId::DeleteWord
                | StepId::TemplateInfo
                | StepId::StartQuizInfo
        )
    }

    /// Steps the user can skip with the Escape key.
    #[must_use]
    pub fn escape_skips(self) -> bool {
        matches!(self, StepId::CreateTag)
    }

    /// Whether clicking the highlighted target counts as completing the step.
    ///
    /// The cover steps are advanced by dedicated page events instead, and the
    /// difficulty filters are only informational.
    #[must_use]
    pub fn completes_on_target_click(self) -> bool {
        self.target().is_some()
            && !matches!(
                self,
                StepId::SelectComic | StepId::OpenBook | StepId::ExplainDifficulty
            )
    }

    /// Checkpoint recorded as soon as the step is put on screen.
    #[must_use]
    pub fn marks_on_show(self) -> Option<Checkpoint> {
        match self {
            StepId::NavigateStory => Some(Checkpoint::NavigationShown),
            _ => None,
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for step in StepId::ALL {
            assert_eq!(StepId::from_key(step.key()), Some(step));
        }
        assert_eq!(StepId::from_key("nope"), None);
    }

    #[test]
    fn next_button_steps() {
        let with_next: Vec<_> = StepId::ALL
            .into_iter()
            .filter(|s| s.has_next_button())
            .collect();
        assert_eq!(
            with_next,
            vec![
                StepId::ExplainDifficulty,
                StepId::AddNewWord,
                StepId::DeleteWord,
                StepId::TemplateInfo,
                StepId::StartQuizInfo,
            ]
        );
    }

    #[test]
    fn informational_steps_do_not_complete_on_click() {
        assert!(!StepId::ExplainDifficulty.completes_on_target_click());
        assert!(!StepId::SelectComic.completes_on_target_click());
        assert!(!StepId::TutorialComplete.completes_on_target_click());
        assert!(StepId::ReturnHome.completes_on_target_click());
        assert!(StepId::CreateTag.completes_on_target_click());
    }

    #[test]
    fn navigation_hint_marks_itself_shown() {
        assert_eq!(
            StepId::NavigateStory.marks_on_show(),
            Some(Checkpoint::NavigationShown)
        );
        assert_eq!(StepId::ClickWord.marks_on_show(), None);
    }
}
