// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::TermsRepository;
use crate::domain::{DomainError, Mutation, MutationOutcome, Term};

/// Shared mock repository for testing the sync client without a server
///
/// Records every call so tests can assert that nothing reached the network.
///
/// # Examples
///
/// ```
/// use termsync::util::testing::MockTermsRepository;
///
/// let mock = MockTermsRepository::builder()
///     .with_terms(&["a", "b"])
///     .with_mutation_success("Term added", &["a", "b", "c"])
///     .build();
/// assert_eq!(mock.fetch_calls(), 0);
/// ```
pub struct MockTermsRepository {
    configured: bool,
    fetch_result: Result<Vec<Term>, DomainError>,
    mutation_result: Result<MutationOutcome, DomainError>,
    fetch_calls: usize,
    mutations: Vec<Mutation>,
}

impl MockTermsRepository {
    pub fn builder() -> MockTermsRepositoryBuilder {
        MockTermsRepositoryBuilder::new()
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls
    }

    /// Mutations in the order they were sent
    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }
}

impl TermsRepository for MockTermsRepository {
    fn check_configured(&self) -> Result<(), DomainError> {
        if self.configured {
            Ok(())
        } else {
            Err(DomainError::Configuration(
                "Endpoint is not configured.".to_string(),
            ))
        }
    }

    fn fetch_terms(&mut self) -> Result<Vec<Term>, DomainError> {
        self.fetch_calls += 1;
        self.fetch_result.clone()
    }

    fn apply(&mut self, mutation: &Mutation) -> Result<MutationOutcome, DomainError> {
        self.mutations.push(mutation.clone());
        self.mutation_result.clone()
    }
}

/// Builder for MockTermsRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockTermsRepositoryBuilder {
    configured: bool,
    fetch_result: Result<Vec<Term>, DomainError>,
    mutation_result: Result<MutationOutcome, DomainError>,
}

impl MockTermsRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            configured: true,
            fetch_result: Ok(vec![]),
            mutation_result: Err(DomainError::Application(
                "No mutation response configured".to_string(),
            )),
        }
    }

    /// List returned by fetch_terms
    pub fn with_terms(mut self, terms: &[&str]) -> Self {
        self.fetch_result = Ok(terms.iter().map(|t| Term::from(*t)).collect());
        self
    }

    pub fn with_fetch_error(mut self, error: DomainError) -> Self {
        self.fetch_result = Err(error);
        self
    }

    /// Every mutation succeeds with this message and resulting list
    pub fn with_mutation_success(mut self, message: &str, terms: &[&str]) -> Self {
        self.mutation_result = Ok(MutationOutcome {
            message: message.to_string(),
            terms: terms.iter().map(|t| Term::from(*t)).collect(),
        });
        self
    }

    pub fn with_mutation_error(mut self, error: DomainError) -> Self {
        self.mutation_result = Err(error);
        self
    }

    /// Behave like a client whose endpoint was never set
    pub fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    pub fn build(self) -> MockTermsRepository {
        MockTermsRepository {
            configured: self.configured,
            fetch_result: self.fetch_result,
            mutation_result: self.mutation_result,
            fetch_calls: 0,
            mutations: vec![],
        }
    }
}

impl Default for MockTermsRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper", "mio", "mockito"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
