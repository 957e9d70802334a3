//! Vocabulary quiz generation.
//!
//! Translation questions are always built from templates. Passage questions
//! ask the inference backend first and fall back to a fixed story template
//! whenever the backend is missing, fails, or answers in the wrong shape.

mod parse;
mod service;
mod templates;

pub use parse::{PassageDraft, parse_passage};
pub use service::{QuizMix, QuizService, passage_prompt};
