// src/application/sync_client.rs
use crate::application::{Confirmer, TermsRepository};
use crate::domain::{DomainError, Mutation, Term, TermsView};
use tracing::{debug, error, info};

/// How a single operation ended; the details are already in the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationReport {
    Completed,
    Cancelled,
    Failed(DomainError),
}

impl OperationReport {
    pub fn is_failure(&self) -> bool {
        matches!(self, OperationReport::Failed(_))
    }
}

/// Keeps a [`TermsView`] in step with the remote list.
///
/// Each operation is one round trip. Errors never escape: they are logged,
/// written into the view and returned as [`OperationReport::Failed`].
pub struct TermsSyncClient<R: TermsRepository> {
    repository: R,
    view: TermsView,
}

impl<R: TermsRepository> TermsSyncClient<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            view: TermsView::new(),
        }
    }

    pub fn view(&self) -> &TermsView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut TermsView {
        &mut self.view
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn load(&mut self) -> OperationReport {
        self.view.clear_feedback();
        self.view.start_loading();

        let result = self
            .repository
            .check_configured()
            .and_then(|_| self.repository.fetch_terms());

        match result {
            Ok(terms) => {
                info!(count = terms.len(), "Loaded terms");
                self.view.replace_terms(terms);
                OperationReport::Completed
            }
            Err(e) => {
                error!(error = %e, "Failed to load options");
                self.view.fail_loading(&e);
                OperationReport::Failed(e)
            }
        }
    }

    /// Put `input` into the input field and add it
    pub fn submit(&mut self, input: &str) -> OperationReport {
        self.view.set_input(input);
        self.add()
    }

    /// Add whatever is in the input field
    pub fn add(&mut self) -> OperationReport {
        self.view.clear_feedback();

        let term = match self.prepare_add() {
            Ok(term) => term,
            Err(e) => return self.reject(e, "Add rejected"),
        };

        debug!(%term, "Adding term");
        let result = self.repository.apply(&Mutation::Add { term: term.clone() });
        let report = report_for(&result, "Error adding term");
        if !report.is_failure() {
            info!(%term, "Added term");
        }
        self.view.finish_add(result);
        report
    }

    pub fn delete(&mut self, term: &Term, confirmer: &mut dyn Confirmer) -> OperationReport {
        self.view.clear_feedback();

        if let Err(e) = self.prepare_delete(term) {
            return self.reject(e, "Delete rejected");
        }

        let prompt = format!("Are you sure you want to delete \"{}\"?", term);
        if !confirmer.confirm(&prompt) {
            debug!(%term, "Delete cancelled by user");
            return OperationReport::Cancelled;
        }

        if let Err(e) = self.view.begin_delete(term) {
            return self.reject(e, "Delete rejected");
        }

        debug!(%term, "Deleting term");
        let result = self.repository.apply(&Mutation::Delete { term: term.clone() });
        let report = report_for(&result, "Error deleting term");
        if !report.is_failure() {
            info!(%term, "Deleted term");
        }
        self.view.finish_delete(term, result);
        report
    }

    fn prepare_add(&mut self) -> Result<Term, DomainError> {
        let term = Term::parse(self.view.input())?;
        self.repository.check_configured()?;
        self.view.begin_add()?;
        Ok(term)
    }

    fn prepare_delete(&self, term: &Term) -> Result<(), DomainError> {
        if term.as_str().is_empty() {
            return Err(DomainError::Validation(
                "Internal error: Cannot identify term to delete.".to_string(),
            ));
        }
        if self.view.delete_control(term).is_none() {
            return Err(DomainError::UnknownTerm(term.to_string()));
        }
        self.repository.check_configured()
    }

    fn reject(&mut self, e: DomainError, context: &str) -> OperationReport {
        error!(error = %e, "{}", context);
        self.view.show_error(e.to_string());
        OperationReport::Failed(e)
    }
}

fn report_for<T>(result: &Result<T, DomainError>, context: &str) -> OperationReport {
    match result {
        Ok(_) => OperationReport::Completed,
        Err(e) => {
            error!(error = %e, "{}", context);
            OperationReport::Failed(e.clone())
        }
    }
}
