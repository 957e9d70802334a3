mod checkpoints;
mod inference_settings;
mod language;
mod page;
mod step;
mod vocab;

pub use checkpoints::{Checkpoint, Checkpoints};
pub use inference_settings::{InferenceSettings, InferenceSettingsDraft, InferenceSettingsError};
pub use language::{Language, LanguageError};
pub use page::{PageId, PageSnapshot};
pub use step::StepId;
pub use vocab::{Question, QuestionKind, TranslationDirection, WordPair};
