#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod inference;
pub mod quiz;
pub mod tutorial;

pub use app_services::AppServices;
pub use error::{AppServicesError, InferenceError};
pub use inference::{HttpInferenceClient, InferenceClient, InferenceConfig};
pub use quiz::{QuizMix, QuizService};
pub use tutorial::{EngineState, NullPresenter, StepPresenter, TutorialEngine, TutorialEvent};
