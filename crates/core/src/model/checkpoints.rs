use serde::{Deserialize, Serialize};
use std::fmt;

/// A single tutorial milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Checkpoint {
    LanguageSelected,
    ComicOpened,
    WordClicked,
    NavigationShown,
    StoryCompleted,
    WordsAddedToVault,
    ReturnedHome,
    VaultVisited,
    DifficultyExplained,
    AddWordShown,
    DeleteWordShown,
    TagCreated,
    QuizStarted,
    CustomizeShown,
    TemplateInfoShown,
    StartQuizInfoShown,
    QuizCompleted,
    TemplateCreated,
    TutorialComplete,
}

impl Checkpoint {
    pub const ALL: [Checkpoint; 19] = [
        Checkpoint::LanguageSelected,
        Checkpoint::ComicOpened,
        Checkpoint::WordClicked,
        Checkpoint::NavigationShown,
        Checkpoint::StoryCompleted,
        Checkpoint::WordsAddedToVault,
        Checkpoint::ReturnedHome,
        Checkpoint::VaultVisited,
        Checkpoint::DifficultyExplained,
        Checkpoint::AddWordShown,
        Checkpoint::DeleteWordShown,
        Checkpoint::TagCreated,
        Checkpoint::QuizStarted,
        Checkpoint::CustomizeShown,
        Checkpoint::TemplateInfoShown,
        Checkpoint::StartQuizInfoShown,
        Checkpoint::QuizCompleted,
        Checkpoint::TemplateCreated,
        Checkpoint::TutorialComplete,
    ];

    /// Key used for this flag in the persisted progress record.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Checkpoint::LanguageSelected => "languageSelected",
            Checkpoint::ComicOpened => "comicOpened",
            Checkpoint::WordClicked => "wordClicked",
            Checkpoint::NavigationShown => "navigationShown",
            Checkpoint::StoryCompleted => "storyCompleted",
            Checkpoint::WordsAddedToVault => "wordsAddedToVault",
            Checkpoint::ReturnedHome => "returnedHome",
            Checkpoint::VaultVisited => "vaultVisited",
            Checkpoint::DifficultyExplained => "difficultyExplained",
            Checkpoint::AddWordShown => "addWordShown",
            Checkpoint::DeleteWordShown => "deleteWordShown",
            Checkpoint::TagCreated => "tagCreated",
            Checkpoint::QuizStarted => "quizStarted",
            Checkpoint::CustomizeShown => "customizeShown",
            Checkpoint::TemplateInfoShown => "templateInfoShown",
            Checkpoint::StartQuizInfoShown => "startQuizInfoShown",
            Checkpoint::QuizCompleted => "quizCompleted",
            Checkpoint::TemplateCreated => "templateCreated",
            Checkpoint::TutorialComplete => "tutorialComplete",
        }
    }
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The user's tutorial progress.
///
/// Flags only ever go from `false` to `true`. No operation clears a single
/// flag; starting over means replacing the whole record with
/// `Checkpoints::default()`.
///
/// Deserialization merges onto all-false defaults, so records written by
/// older builds (missing keys) still load and unknown keys are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Checkpoints {
    language_selected: bool,
    comic_opened: bool,
    word_clicked: bool,
    navigation_shown: bool,
    story_completed: bool,
    words_added_to_vault: bool,
    returned_home: bool,
    vault_visited: bool,
    difficulty_explained: bool,
    add_word_shown: bool,
    delete_word_shown: bool,
    tag_created: bool,
    quiz_started: bool,
    customize_shown: bool,
    template_info_shown: bool,
    start_quiz_info_shown: bool,
    quiz_completed: bool,
    template_created: bool,
    tutorial_complete: bool,
}

impl Checkpoints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`Checkpoints::set`].
    #[must_use]
    pub fn with(mut self, checkpoint: Checkpoint) -> Self {
        self.set(checkpoint);
        self
    }

    #[must_use]
    pub fn is_set(&self, checkpoint: Checkpoint) -> bool {
        *self.flag(checkpoint)
    }

    /// Mark a checkpoint as reached.
    ///
    /// Returns `true` if the flag was previously unset.
    pub fn set(&mut self, checkpoint: Checkpoint) -> bool {
        let flag = self.flag_mut(checkpoint);
        let changed = !*flag;
        *flag = true;
        changed
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tutorial_complete
    }

    /// Number of checkpoints reached so far.
    #[must_use]
    pub fn set_count(&self) -> usize {
        Checkpoint::ALL.iter().filter(|cp| self.is_set(**cp)).count()
    }

    /// Iterate over the reached checkpoints in declaration order.
    pub fn reached(&self) -> impl Iterator<Item = Checkpoint> + '_ {
        Checkpoint::ALL.into_iter().filter(|cp| self.is_set(*cp))
    }

    fn flag(&self, checkpoint: Checkpoint) -> &bool {
        match checkpoint {
            Checkpoint::LanguageSelected => &self.language_selected,
            Checkpoint::ComicOpened => &self.comic_opened,
            Checkpoint::WordClicked => &self.word_clicked,
            Checkpoint::NavigationShown => &self.navigation_shown,
            Checkpoint::StoryCompleted => &self.story_completed,
            Checkpoint::WordsAddedToVault => &self.words_added_to_vault,
            Checkpoint::ReturnedHome => &self.returned_home,
            Checkpoint::VaultVisited => &self.vault_visited,
            Checkpoint::DifficultyExplained => &self.difficulty_explained,
            Checkpoint::AddWordShown => &self.add_word_shown,
            Checkpoint::DeleteWordShown => &self.delete_word_shown,
            Checkpoint::TagCreated => &self.tag_created,
            Checkpoint::QuizStarted => &self.quiz_started,
            Checkpoint::CustomizeShown => &self.customize_shown,
            Checkpoint::TemplateInfoShown => &self.template_info_shown,
            Checkpoint::StartQuizInfoShown => &self.start_quiz_info_shown,
            Checkpoint::QuizCompleted => &self.quiz_completed,
            Checkpoint::TemplateCreated => &self.template_created,
            Checkpoint::TutorialComplete => &self.tutorial_complete,
        }
    }

    fn flag_mut(&mut self, checkpoint: Checkpoint) -> &mut bool {
        match checkpoint {
            Checkpoint::LanguageSelected => &mut self.language_selected,
            Checkpoint::ComicOpened => &mut self.comic_opened,
            Checkpoint::WordClicked => &mut self.word_clicked,
            Checkpoint::NavigationShown => &mut self.navigation_shown,
            Checkpoint::StoryCompleted => &mut self.story_completed,
            Checkpoint::WordsAddedToVault => &mut self.words_added_to_vault,
            Checkpoint::ReturnedHome => &mut self.returned_home,
            Checkpoint::VaultVisited => &mut self.vault_visited,
            Checkpoint::DifficultyExplained => &mut self.difficulty_explained,
            Checkpoint::AddWordShown => &mut self.add_word_shown,
            Checkpoint::DeleteWordShown => &mut self.delete_word_shown,
            Checkpoint::TagCreated => &mut self.tag_created,
            Checkpoint::QuizStarted => &mut self.quiz_started,
            Checkpoint::CustomizeShown => &mut self.customize_shown,
            Checkpoint::TemplateInfoShown => &mut self.template_info_shown,
            Checkpoint::StartQuizInfoShown => &mut self.start_quiz_info_shown,
            Checkpoint::QuizCompleted => &mut self.quiz_completed,
            Checkpoint::TemplateCreated => &mut self.template_created,
            Checkpoint::TutorialComplete => &mut self.tutorial_complete,
        }
    }
}
