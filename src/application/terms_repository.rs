// src/application/terms_repository.rs
use crate::domain::{DomainError, Mutation, MutationOutcome, Term};

/// Remote store owning the authoritative list of terms
pub trait TermsRepository {
    /// Fail fast before any control is disabled when the endpoint is unusable
    fn check_configured(&self) -> Result<(), DomainError> {
        Ok(())
    }

    fn fetch_terms(&mut self) -> Result<Vec<Term>, DomainError>;

    /// Apply an add or delete and return the list as it is afterwards
    fn apply(&mut self, mutation: &Mutation) -> Result<MutationOutcome, DomainError>;
}

/// Interactive yes/no question asked before destructive operations
pub trait Confirmer {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirmer for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Answers yes without asking, for `--yes`
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}
