use std::io::Write;

use chrono::Local;

use crate::types::MonitorError;

use super::model::DisplayModel;

/// Consumer of rendered display state.
pub trait Presenter: Send {
    fn present(&mut self, model: &DisplayModel) -> Result<(), MonitorError>;
}

/// Writes the visible panel as plain `label: value` lines.
pub struct TerminalPresenter<W> {
    out: W,
}

impl TerminalPresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Presenter for TerminalPresenter<W> {
    fn present(&mut self, model: &DisplayModel) -> Result<(), MonitorError> {
        writeln!(
            self.out,
            "── Nursery status ({}) ──",
            Local::now().format("%H:%M:%S")
        )?;
        if let Some(message) = model.placeholder_message() {
            writeln!(self.out, "{message}")?;
        }
        for (field, value) in model.fields() {
            writeln!(self.out, "{:>14}: {}", field.label(), value)?;
        }
        if let Some(timeout) = model.ring_timeout() {
            writeln!(self.out, "{:>14}: {}", "Ring timeout", timeout)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{PollOutcome, PLACEHOLDER_MESSAGE};

    #[test]
    fn placeholder_panel_shows_waiting_message() {
        let mut presenter = TerminalPresenter::new(Vec::new());
        presenter
            .present(&DisplayModel::from_outcome(&PollOutcome::Unavailable))
            .unwrap();
        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(text.contains(PLACEHOLDER_MESSAGE));
        assert!(text.contains("Temperature: N/A"));
        assert_eq!(text.lines().count(), 12);
    }

    #[test]
    fn populated_panel_omits_waiting_message() {
        let snapshot = serde_json::from_str(r#"{"brightness": 0, "humidity": 45}"#).unwrap();
        let mut presenter = TerminalPresenter::new(Vec::new());
        presenter
            .present(&DisplayModel::from_outcome(&PollOutcome::Success(snapshot)))
            .unwrap();
        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(!text.contains(PLACEHOLDER_MESSAGE));
        assert!(text.contains("Light: OFF"));
        assert!(text.contains("Humidity: 45 %"));
        assert_eq!(text.lines().count(), 11);
    }

    #[test]
    fn populated_panel_reports_ring_timeout() {
        let snapshot =
            serde_json::from_str(r#"{"brightness": 3, "timeout": "12 seconds remaining"}"#)
                .unwrap();
        let mut presenter = TerminalPresenter::new(Vec::new());
        presenter
            .present(&DisplayModel::from_outcome(&PollOutcome::Success(snapshot)))
            .unwrap();
        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(text.contains("Ring timeout: 12 seconds remaining"));
        assert_eq!(text.lines().count(), 12);
    }
}
