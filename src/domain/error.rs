// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Endpoint missing, still the placeholder, or not a valid URL
    #[error("{0}")]
    Configuration(String),
    /// Network failure or non-2xx status
    #[error("{0}")]
    Transport(String),
    /// Body is not JSON or not the expected shape
    #[error("{0}")]
    Protocol(String),
    /// The service answered but reported a failure
    #[error("{0}")]
    Application(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0} is already in progress")]
    ControlBusy(String),
    #[error("Term is not in the current list: {0}")]
    UnknownTerm(String),
}
