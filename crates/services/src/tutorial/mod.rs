mod engine;
mod event;
mod presenter;

pub use engine::{EngineState, TutorialEngine};
pub use event::TutorialEvent;
pub use presenter::{NullPresenter, StepPresenter};
