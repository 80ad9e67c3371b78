// src/domain/term.rs
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry of the remote list.
///
/// Terms coming back from the service are kept verbatim since the literal
/// string is what a delete request has to send. Only user input goes
/// through [`Term::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Term(String);

impl Term {
    /// Trim user input and reject it when nothing is left
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("Please enter a term.".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Term {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Change requested from the service; serializes to `{"action": ..., "term": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Mutation {
    Add { term: Term },
    Delete { term: Term },
}

impl Mutation {
    pub fn term(&self) -> &Term {
        match self {
            Mutation::Add { term } | Mutation::Delete { term } => term,
        }
    }

    /// Capitalized verb used in fallback failure messages
    pub fn verb(&self) -> &'static str {
        match self {
            Mutation::Add { .. } => "Add",
            Mutation::Delete { .. } => "Delete",
        }
    }
}

/// Success path of a mutation: the confirmation plus the authoritative list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub message: String,
    pub terms: Vec<Term>,
}
