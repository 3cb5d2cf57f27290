mod model;
mod presenter;

pub use model::{
    DisplayModel, Field, PollOutcome, ViewMode, PLACEHOLDER_MESSAGE, UNAVAILABLE_TEXT,
};
pub use presenter::{Presenter, TerminalPresenter};

/// Holds the display state for the latest poll outcome.
#[derive(Debug, Default)]
pub struct StatusView {
    model: DisplayModel,
}

impl StatusView {
    /// Starts in placeholder mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the display state with the rendering of `outcome`.
    pub fn render(&mut self, outcome: &PollOutcome) -> &DisplayModel {
        self.model = DisplayModel::from_outcome(outcome);
        &self.model
    }

    pub fn model(&self) -> &DisplayModel {
        &self.model
    }
}
