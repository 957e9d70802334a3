use g3_core::catalog::{Greeting, StepText};
use g3_core::model::StepId;

/// Presentation seam for the tutorial.
///
/// The engine decides *what* to show; implementors decide *how*: resolving
/// `StepId::target` to an on-screen element, waiting for it to appear,
/// positioning tooltips. None of that reaches the engine.
pub trait StepPresenter {
    /// Ask the user to pick a tutorial language.
    fn request_language(&mut self, prompt: &Greeting);

    /// Show the banner that follows a language choice.
    fn welcome(&mut self, greeting: &Greeting);

    /// Present `step`, replacing whatever step was on screen.
    fn show(&mut self, step: StepId, text: &StepText);

    /// Remove every tutorial element from the screen.
    fn clear(&mut self);

    /// Show the completion message with a dismiss button labelled `finish_label`.
    fn celebrate(&mut self, text: &StepText, finish_label: &str);
}

/// Presenter that ignores everything, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl StepPresenter for NullPresenter {
    fn request_language(&mut self, _prompt: &Greeting) {}
    fn welcome(&mut self, _greeting: &Greeting) {}
    fn show(&mut self, _step: StepId, _text: &StepText) {}
    fn clear(&mut self) {}
    fn celebrate(&mut self, _text: &StepText, _finish_label: &str) {}
}
