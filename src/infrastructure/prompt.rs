// src/infrastructure/prompt.rs
use crate::application::Confirmer;
use dialoguer::{theme::ColorfulTheme, Confirm};
use tracing::error;

/// Asks on the terminal; a prompt that cannot be shown counts as "no"
#[derive(Debug, Default)]
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&mut self, prompt: &str) -> bool {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or_else(|e| {
                error!(error = %e, "Confirmation prompt failed");
                false
            })
    }
}
