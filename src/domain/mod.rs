// src/domain/mod.rs
pub mod error;
pub mod term;
pub mod view;

pub use error::DomainError;
pub use term::{Mutation, MutationOutcome, Term};
pub use view::{ControlState, Feedback, ListView, TermRow, TermsView};
