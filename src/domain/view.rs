// src/domain/view.rs
use crate::domain::{DomainError, MutationOutcome, Term};
use serde::Serialize;

/// Whether a trigger may start a new request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ControlState {
    Idle,
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermRow {
    pub term: Term,
    pub control: ControlState,
}

/// What the list area currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Rows(Vec<TermRow>),
    Empty,
    LoadFailed,
    ConfigurationError,
}

impl ListView {
    /// Build the list from a server response, every control idle
    pub fn from_terms(terms: Vec<Term>) -> Self {
        if terms.is_empty() {
            return ListView::Empty;
        }
        ListView::Rows(
            terms
                .into_iter()
                .map(|term| TermRow {
                    term,
                    control: ControlState::Idle,
                })
                .collect(),
        )
    }

    pub fn rows(&self) -> &[TermRow] {
        match self {
            ListView::Rows(rows) => rows,
            _ => &[],
        }
    }

    pub fn terms(&self) -> Vec<&Term> {
        self.rows().iter().map(|row| &row.term).collect()
    }

    /// Single-line text shown instead of rows
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ListView::Loading => Some("Loading..."),
            ListView::Rows(_) => None,
            ListView::Empty => Some("No options defined yet."),
            ListView::LoadFailed => Some("Failed to load options."),
            ListView::ConfigurationError => Some("Configuration Error"),
        }
    }

    fn row_mut(&mut self, term: &Term) -> Option<&mut TermRow> {
        match self {
            ListView::Rows(rows) => rows.iter_mut().find(|row| &row.term == term),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Status(String),
    Error(String),
}

/// Everything the user sees: list, input field, add control and feedback line.
///
/// The list is only ever replaced wholesale with what the service returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermsView {
    list: ListView,
    input: String,
    add_control: ControlState,
    feedback: Option<Feedback>,
}

impl TermsView {
    pub fn new() -> Self {
        Self {
            list: ListView::Loading,
            input: String::new(),
            add_control: ControlState::Idle,
            feedback: None,
        }
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn add_control(&self) -> ControlState {
        self.add_control
    }

    pub fn delete_control(&self, term: &Term) -> Option<ControlState> {
        self.list
            .rows()
            .iter()
            .find(|row| &row.term == term)
            .map(|row| row.control)
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn clear_feedback(&mut self) {
        self.feedback = None;
    }

    pub fn show_status(&mut self, message: impl Into<String>) {
        self.feedback = Some(Feedback::Status(message.into()));
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.feedback = Some(Feedback::Error(message.into()));
    }

    pub fn start_loading(&mut self) {
        self.list = ListView::Loading;
    }

    pub fn replace_terms(&mut self, terms: Vec<Term>) {
        self.list = ListView::from_terms(terms);
    }

    /// Put the list area into its failure placeholder and report why
    pub fn fail_loading(&mut self, error: &DomainError) {
        match error {
            DomainError::Configuration(message) => {
                self.list = ListView::ConfigurationError;
                self.show_error(message.clone());
            }
            other => {
                self.list = ListView::LoadFailed;
                self.show_error(format!("Could not load options. ({})", other));
            }
        }
    }

    pub fn begin_add(&mut self) -> Result<(), DomainError> {
        if self.add_control == ControlState::InFlight {
            return Err(DomainError::ControlBusy("Adding a term".to_string()));
        }
        self.add_control = ControlState::InFlight;
        Ok(())
    }

    pub fn finish_add(&mut self, result: Result<MutationOutcome, DomainError>) {
        self.add_control = ControlState::Idle;
        match result {
            Ok(outcome) => {
                self.input.clear();
                self.show_status(outcome.message);
                self.replace_terms(outcome.terms);
            }
            Err(e) => self.show_error(e.to_string()),
        }
    }

    pub fn begin_delete(&mut self, term: &Term) -> Result<(), DomainError> {
        let row = self
            .list
            .row_mut(term)
            .ok_or_else(|| DomainError::UnknownTerm(term.to_string()))?;
        if row.control == ControlState::InFlight {
            return Err(DomainError::ControlBusy(format!("Deleting \"{}\"", term)));
        }
        row.control = ControlState::InFlight;
        Ok(())
    }

    /// On success the row vanishes with the re-render; on failure its control is re-enabled
    pub fn finish_delete(&mut self, term: &Term, result: Result<MutationOutcome, DomainError>) {
        match result {
            Ok(outcome) => {
                self.show_status(outcome.message);
                self.replace_terms(outcome.terms);
            }
            Err(e) => {
                if let Some(row) = self.list.row_mut(term) {
                    row.control = ControlState::Idle;
                }
                self.show_error(e.to_string());
            }
        }
    }
}

impl Default for TermsView {
    fn default() -> Self {
        Self::new()
    }
}
