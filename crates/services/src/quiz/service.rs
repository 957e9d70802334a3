use std::sync::Arc;

use g3_core::model::{Question, WordPair};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use super::parse::parse_passage;
use super::templates;
use crate::inference::InferenceClient;

/// Which kinds of questions a quiz contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizMix {
    Translation,
    Passage,
    #[default]
    Mixed,
}

/// Prompt asking the model for a grade-3 passage and one comprehension
/// question about it.
#[must_use]
pub fn passage_prompt(word: &str) -> String {
    format!(
        "Create a short, simple, and interesting passage for grade 3 students that uses the word \"{word}\".

Then create ONE simple multiple choice question about the passage.

Format your response EXACTLY as:
PASSAGE: [3-4 sentence passage here]
QUESTION: [Simple comprehension question]
CORRECT: [Correct answer]
WRONG1: [Plausible wrong answer]
WRONG2: [Plausible wrong answer]
WRONG3: [Plausible wrong answer]

Requirements:
- Passage should be engaging and age-appropriate
- Use simple vocabulary
- Question should test basic comprehension
- All options should be believable"
    )
}

#[derive(Clone, Default)]
pub struct QuizService {
    inference: Option<Arc<dyn InferenceClient>>,
}

impl QuizService {
    #[must_use]
    pub fn new(inference: Option<Arc<dyn InferenceClient>>) -> Self {
        Self { inference }
    }

    /// A service that never calls a model.
    #[must_use]
    pub fn templates_only() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_inference(&self) -> bool {
        self.inference.is_some()
    }

    /// Build a quiz over `words`.
    ///
    /// Translation questions skip words without a Telugu side; passage
    /// questions skip words without an English side. A mixed quiz is
    /// shuffled. Generation never fails: model problems fall back to
    /// templates.
    pub async fn generate_questions<R: Rng + ?Sized>(
        &self,
        words: &[WordPair],
        mix: QuizMix,
        rng: &mut R,
    ) -> Vec<Question> {
        let mut questions = Vec::new();

        if matches!(mix, QuizMix::Translation | QuizMix::Mixed) {
            for word in words.iter().filter(|w| w.has_translation()) {
                questions.push(templates::translation_question(word, words, rng));
            }
        }

        if matches!(mix, QuizMix::Passage | QuizMix::Mixed) {
            for word in words.iter().filter(|w| !w.english.trim().is_empty()) {
                questions.push(self.passage_question(word, rng).await);
            }
        }

        if mix == QuizMix::Mixed {
            questions.shuffle(rng);
        }
        debug!(count = questions.len(), ?mix, "generated quiz");
        questions
    }

    /// One passage question for `word`, from the model when possible.
    pub async fn passage_question<R: Rng + ?Sized>(&self, word: &WordPair, rng: &mut R) -> Question {
        let Some(client) = self.inference.as_ref() else {
            return templates::template_passage_question(word, rng);
        };

        match client.infer(&passage_prompt(word.english.trim())).await {
            Ok(content) => match parse_passage(&content) {
                Some(draft) => templates::drafted_passage_question(word, draft, rng),
                None => {
                    warn!(word = %word.english, "unparseable passage response, using template");
                    templates::template_passage_question(word, rng)
                }
            },
            Err(err) => {
                warn!(word = %word.english, error = %err, "passage generation failed, using template");
                templates::template_passage_question(word, rng)
            }
        }
    }
}
