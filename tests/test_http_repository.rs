mod helpers;

use helpers::{TestService, EXEC_PATH};
use mockito::Matcher;
use serde_json::json;
use std::time::Duration;
use termsync::application::TermsRepository;
use termsync::domain::{DomainError, Mutation, Term};
use termsync::infrastructure::HttpTermsRepository;

fn add(term: &str) -> Mutation {
    Mutation::Add {
        term: Term::from(term),
    }
}

#[test]
fn given_array_body_when_fetching_then_returns_terms_in_order() {
    // Arrange
    let mut service = TestService::new();
    let mock = service.mock_list(200, r#"["b", "a"]"#);
    let mut repo = service.repository();

    // Act
    let terms = repo.fetch_terms().expect("Fetch should succeed");

    // Assert
    assert_eq!(terms, vec![Term::from("b"), Term::from("a")]);
    mock.assert();
}

#[test]
fn given_error_object_with_ok_status_when_fetching_then_application_error() {
    // Arrange
    let mut service = TestService::new();
    let _mock = service.mock_list(200, r#"{"error": "Sheet 'Options' not found"}"#);
    let mut repo = service.repository();

    // Act
    let result = repo.fetch_terms();

    // Assert
    assert_eq!(
        result,
        Err(DomainError::Application("Sheet 'Options' not found".to_string()))
    );
}

#[test]
fn given_non_json_body_when_fetching_then_protocol_error() {
    // Arrange
    let mut service = TestService::new();
    let _mock = service.mock_list(200, "<html>Sign in</html>");
    let mut repo = service.repository();

    // Act
    let result = repo.fetch_terms();

    // Assert
    assert_eq!(
        result,
        Err(DomainError::Protocol(
            "Invalid data format received from backend.".to_string()
        ))
    );
}

#[test]
fn given_server_error_with_json_body_when_fetching_then_uses_body_error() {
    // Arrange
    let mut service = TestService::new();
    let _mock = service.mock_list(500, r#"{"error": "Script crashed"}"#);
    let mut repo = service.repository();

    // Act
    let result = repo.fetch_terms();

    // Assert
    assert_eq!(result, Err(DomainError::Transport("Script crashed".to_string())));
}

#[test]
fn given_server_error_without_json_when_fetching_then_reports_status() {
    // Arrange
    let mut service = TestService::new();
    let _mock = service.mock_list(404, "Not Found");
    let mut repo = service.repository();

    // Act
    let result = repo.fetch_terms();

    // Assert
    assert_eq!(
        result,
        Err(DomainError::Transport("HTTP error! status: 404".to_string()))
    );
}

#[test]
fn given_add_when_applying_then_posts_json_action_and_term() {
    // Arrange
    let mut service = TestService::new();
    let mock = service
        .server
        .mock("POST", EXEC_PATH)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"action": "add", "term": "c"})))
        .with_status(200)
        .with_body(r#"{"success": true, "message": "Term 'c' added.", "terms": ["a", "b", "c"]}"#)
        .create();
    let mut repo = service.repository();

    // Act
    let outcome = repo.apply(&add("c")).expect("Add should succeed");

    // Assert
    assert_eq!(outcome.message, "Term 'c' added.");
    assert_eq!(outcome.terms.len(), 3);
    mock.assert();
}

#[test]
fn given_delete_when_applying_then_posts_delete_action() {
    // Arrange
    let mut service = TestService::new();
    let mock = service
        .server
        .mock("POST", EXEC_PATH)
        .match_body(Matcher::Json(json!({"action": "delete", "term": "a"})))
        .with_status(200)
        .with_body(r#"{"success": true, "message": "Deleted.", "terms": []}"#)
        .create();
    let mut repo = service.repository();

    // Act
    let outcome = repo
        .apply(&Mutation::Delete {
            term: Term::from("a"),
        })
        .expect("Delete should succeed");

    // Assert
    assert!(outcome.terms.is_empty());
    mock.assert();
}

#[test]
fn given_success_false_with_message_when_applying_then_application_error() {
    // Arrange
    let mut service = TestService::new();
    let _mock = service.mock_mutation(200, r#"{"success": false, "message": "Term already exists."}"#);
    let mut repo = service.repository();

    // Act
    let result = repo.apply(&add("a"));

    // Assert
    assert_eq!(
        result,
        Err(DomainError::Application("Term already exists.".to_string()))
    );
}

#[test]
fn given_success_false_without_message_when_applying_then_uses_operation_fallback() {
    // Arrange
    let mut service = TestService::new();
    let _mock = service.mock_mutation(200, r#"{"success": false}"#);
    let mut repo = service.repository();

    // Act
    let result = repo.apply(&Mutation::Delete {
        term: Term::from("a"),
    });

    // Assert
    assert_eq!(
        result,
        Err(DomainError::Application(
            "Delete operation reported failure from script.".to_string()
        ))
    );
}

#[test]
fn given_non_2xx_without_message_when_applying_then_reports_status() {
    // Arrange
    let mut service = TestService::new();
    let _mock = service.mock_mutation(503, "Service Unavailable");
    let mut repo = service.repository();

    // Act
    let result = repo.apply(&add("a"));

    // Assert
    assert_eq!(
        result,
        Err(DomainError::Transport("Request failed (Status: 503)".to_string()))
    );
}

#[test]
fn given_non_2xx_with_message_when_applying_then_uses_body_message() {
    // Arrange
    let mut service = TestService::new();
    let _mock = service.mock_mutation(400, r#"{"success": false, "message": "Missing term."}"#);
    let mut repo = service.repository();

    // Act
    let result = repo.apply(&add("a"));

    // Assert
    assert_eq!(result, Err(DomainError::Transport("Missing term.".to_string())));
}

#[test]
fn given_success_without_terms_when_applying_then_protocol_error() {
    // Arrange
    let mut service = TestService::new();
    let _mock = service.mock_mutation(200, r#"{"success": true, "message": "ok"}"#);
    let mut repo = service.repository();

    // Act
    let result = repo.apply(&add("a"));

    // Assert
    assert_eq!(
        result,
        Err(DomainError::Protocol("Invalid data received.".to_string()))
    );
}

#[test]
fn given_no_endpoint_when_fetching_then_configuration_error() {
    // Arrange
    let mut repo = HttpTermsRepository::new(None, Duration::from_secs(1))
        .expect("HTTP client should build");

    // Act
    let result = repo.fetch_terms();

    // Assert
    assert!(matches!(result, Err(DomainError::Configuration(_))));
    assert!(repo.check_configured().is_err());
}

#[test]
fn given_unreachable_server_when_fetching_then_transport_error() {
    // Arrange
    let mut repo = HttpTermsRepository::new(Some("http://127.0.0.1:1/exec"), Duration::from_secs(2))
        .expect("HTTP client should build");

    // Act
    let result = repo.fetch_terms();

    // Assert
    assert!(matches!(result, Err(DomainError::Transport(_))));
}
