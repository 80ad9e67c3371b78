// src/infrastructure/http.rs
use crate::application::TermsRepository;
use crate::constants::ENDPOINT_PLACEHOLDER;
use crate::domain::{DomainError, Mutation, MutationOutcome, Term};
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Terms stored behind a single script endpoint.
///
/// `GET` returns the list, `POST` applies a mutation and returns the list
/// afterwards. Every response body is read as text first so error messages
/// survive a body that is not JSON.
pub struct HttpTermsRepository {
    client: Client,
    endpoint: Result<Url, DomainError>,
}

#[derive(Debug, Deserialize)]
struct MutationResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    terms: Option<Value>,
}

impl HttpTermsRepository {
    /// An unusable endpoint is kept and reported by every call, not here
    pub fn new(endpoint: Option<&str>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let endpoint = parse_endpoint(endpoint);
        debug!(?endpoint, ?timeout, "Creating HttpTermsRepository");

        Ok(Self { client, endpoint })
    }

    fn endpoint(&self) -> Result<&Url, DomainError> {
        self.endpoint.as_ref().map_err(|e| e.clone())
    }
}

impl TermsRepository for HttpTermsRepository {
    fn check_configured(&self) -> Result<(), DomainError> {
        self.endpoint().map(|_| ())
    }

    #[instrument(level = "debug", skip(self))]
    fn fetch_terms(&mut self) -> Result<Vec<Term>, DomainError> {
        let endpoint = self.endpoint()?.clone();

        let response = self
            .client
            .get(endpoint)
            .send()
            .map_err(|e| DomainError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| DomainError::Transport(e.to_string()))?;
        debug!(%status, body_len = body.len(), "Received term list response");

        if !status.is_success() {
            let message = message_from_body(&body, &["error", "message"])
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            return Err(DomainError::Transport(message));
        }

        let value: Value = serde_json::from_str(&body).map_err(|_| invalid_format())?;
        parse_term_list(value)
    }

    #[instrument(level = "debug", skip(self))]
    fn apply(&mut self, mutation: &Mutation) -> Result<MutationOutcome, DomainError> {
        let endpoint = self.endpoint()?.clone();

        let response = self
            .client
            .post(endpoint)
            .json(mutation)
            .send()
            .map_err(|e| DomainError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| DomainError::Transport(e.to_string()))?;
        debug!(%status, body_len = body.len(), "Received mutation response");

        if !status.is_success() {
            return Err(DomainError::Transport(request_failed_message(status, &body)));
        }

        let parsed: MutationResponse = serde_json::from_str(&body)
            .map_err(|e| DomainError::Protocol(format!("Invalid response from backend: {}", e)))?;

        if !parsed.success {
            let message = parsed
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| {
                    format!("{} operation reported failure from script.", mutation.verb())
                });
            return Err(DomainError::Application(message));
        }

        let terms = parsed
            .terms
            .and_then(|value| parse_term_list(value).ok())
            .ok_or_else(|| DomainError::Protocol("Invalid data received.".to_string()))?;

        Ok(MutationOutcome {
            message: parsed.message.unwrap_or_default(),
            terms,
        })
    }
}

/// Reject a missing, placeholder or non-http(s) endpoint
pub fn parse_endpoint(raw: Option<&str>) -> Result<Url, DomainError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() || raw == ENDPOINT_PLACEHOLDER {
        return Err(DomainError::Configuration(
            "Endpoint URL is not configured. Use --endpoint, TERMSYNC_ENDPOINT or the config file."
                .to_string(),
        ));
    }

    let url = Url::parse(raw).map_err(|e| {
        DomainError::Configuration(format!("Invalid endpoint URL '{}': {}", raw, e))
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(DomainError::Configuration(format!(
            "Unsupported endpoint scheme '{}'",
            other
        ))),
    }
}

/// Accept a JSON array of strings; `{error: ...}` is the service's own failure report
fn parse_term_list(value: Value) -> Result<Vec<Term>, DomainError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(Term::from(s)),
                _ => Err(invalid_format()),
            })
            .collect(),
        Value::Object(ref map) if map.get("error").is_some_and(is_truthy) => {
            Err(DomainError::Application(value_text(&map["error"])))
        }
        _ => Err(invalid_format()),
    }
}

fn request_failed_message(status: StatusCode, body: &str) -> String {
    message_from_body(body, &["message"])
        .unwrap_or_else(|| format!("Request failed (Status: {})", status.as_u16()))
}

/// First non-empty field among `keys` of a JSON object body
fn message_from_body(body: &str, keys: &[&str]) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    keys.iter()
        .filter_map(|key| value.get(*key))
        .find(|field| is_truthy(field))
        .map(value_text)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn invalid_format() -> DomainError {
    DomainError::Protocol("Invalid data format received from backend.".to_string())
}
