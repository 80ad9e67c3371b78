// src/ports/text.rs
use crate::domain::{ControlState, Feedback, TermsView};

/// Renders the view for a terminal, one line per row
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, view: &TermsView) -> String {
        let mut lines = Vec::new();

        if let Some(feedback) = view.feedback() {
            lines.push(self.render_feedback(feedback));
        }

        match view.list().placeholder() {
            Some(placeholder) => lines.push(format!("  {}", placeholder)),
            None => lines.extend(view.list().rows().iter().enumerate().map(|(index, row)| {
                let control = match row.control {
                    ControlState::Idle => "Delete",
                    ControlState::InFlight => "Deleting...",
                };
                format!("{:>3}. {}  [{}]", index + 1, row.term, control)
            })),
        }

        lines.iter().map(|line| format!("{}\n", line)).collect()
    }

    pub fn render_feedback(&self, feedback: &Feedback) -> String {
        match feedback {
            Feedback::Status(message) => message.clone(),
            Feedback::Error(message) => format!("Error: {}", message),
        }
    }
}
