// src/ports/html.rs
use crate::domain::{ControlState, ListView};
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

/// Renders the list as the markup of the options widget
#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    #[instrument(level = "trace", skip(self), ret)]
    pub fn render(&self, list: &ListView) -> String {
        let mut lines = vec!["<ul id=\"options-list\">".to_string()];

        if let Some(placeholder) = list.placeholder() {
            lines.push(format!("  <li>{}</li>", encode_text(placeholder)));
        }

        lines.extend(list.rows().iter().map(|row| {
            let (label, disabled) = match row.control {
                ControlState::Idle => ("Delete", ""),
                ControlState::InFlight => ("Deleting...", " disabled"),
            };
            format!(
                r#"  <li><span>{}</span><button class="delete-btn" data-term="{}"{}>{}</button></li>"#,
                encode_text(row.term.as_str()),
                encode_double_quoted_attribute(row.term.as_str()),
                disabled,
                label
            )
        }));

        lines.push("</ul>".to_string());
        lines.iter().map(|line| format!("{}\n", line)).collect()
    }
}
