use serde::{Deserialize, Serialize};

/// A vocabulary entry from the word vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    pub english: String,
    pub telugu: String,
}

impl WordPair {
    #[must_use]
    pub fn new(english: impl Into<String>, telugu: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            telugu: telugu.into(),
        }
    }

    /// Words without a Telugu side cannot be asked as translations.
    #[must_use]
    pub fn has_translation(&self) -> bool {
        !self.telugu.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Multiple-choice translation of a single word.
    Translation,
    /// Reading comprehension over a short passage.
    Passage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationDirection {
    TeluguToEnglish,
    EnglishToTelugu,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub kind: QuestionKind,
    /// English word the question was built from.
    pub word: String,
    pub prompt: String,
    pub passage: Option<String>,
    pub options: Vec<String>,
    pub correct: String,
    pub direction: Option<TranslationDirection>,
}

impl Question {
    /// Position of the correct answer among the options.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|opt| *opt == self.correct)
    }

    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        answer.trim() == self.correct
    }
}
