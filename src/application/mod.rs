// src/application/mod.rs
pub mod sync_client;
pub mod terms_repository;

pub use sync_client::{OperationReport, TermsSyncClient};
pub use terms_repository::{AssumeYes, Confirmer, TermsRepository};
