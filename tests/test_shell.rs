use std::io::Cursor;
use termsync::application::{AssumeYes, TermsSyncClient};
use termsync::cli::shell::Shell;
use termsync::domain::{DomainError, Mutation, Term};
use termsync::util::testing::MockTermsRepository;

fn run_session(mock: MockTermsRepository, script: &str) -> (String, Vec<Mutation>) {
    let mut confirmer = AssumeYes;
    let mut shell = Shell::new(TermsSyncClient::new(mock), &mut confirmer);
    let mut output = Vec::new();

    shell
        .run(Cursor::new(script.to_string()), &mut output)
        .expect("Session should finish");

    let mutations = shell.client().repository().mutations().to_vec();
    (String::from_utf8(output).expect("Output is UTF-8"), mutations)
}

#[test]
fn given_session_when_starting_then_renders_loaded_list() {
    // Arrange
    let mock = MockTermsRepository::builder().with_terms(&["a", "b"]).build();

    // Act
    let (output, _) = run_session(mock, "quit\n");

    // Assert
    assert!(output.starts_with("  1. a  [Delete]\n  2. b  [Delete]\n> "));
}

#[test]
fn given_add_command_when_running_then_sends_trimmed_term_and_rerenders() {
    // Arrange
    let mock = MockTermsRepository::builder()
        .with_terms(&["a"])
        .with_mutation_success("Term added.", &["a", "new term"])
        .build();

    // Act
    let (output, mutations) = run_session(mock, "add   new term  \n");

    // Assert
    assert_eq!(
        mutations,
        vec![Mutation::Add {
            term: Term::from("new term")
        }]
    );
    assert!(output.contains("Term added.\n  1. a  [Delete]\n  2. new term  [Delete]\n"));
}

#[test]
fn given_bare_add_when_running_then_validation_error_without_request() {
    // Arrange
    let mock = MockTermsRepository::builder().with_terms(&["a"]).build();

    // Act
    let (output, mutations) = run_session(mock, "add\nexit\n");

    // Assert
    assert!(mutations.is_empty());
    assert!(output.contains("Error: Please enter a term."));
}

#[test]
fn given_delete_by_row_when_running_then_deletes_that_term() {
    // Arrange
    let mock = MockTermsRepository::builder()
        .with_terms(&["a", "b"])
        .with_mutation_success("Term deleted.", &["a"])
        .build();

    // Act
    let (output, mutations) = run_session(mock, "delete #2\n");

    // Assert
    assert_eq!(
        mutations,
        vec![Mutation::Delete {
            term: Term::from("b")
        }]
    );
    assert!(output.contains("Term deleted.\n  1. a  [Delete]\n"));
}

#[test]
fn given_row_out_of_range_when_deleting_then_reports_error() {
    // Arrange
    let mock = MockTermsRepository::builder().with_terms(&["a"]).build();

    // Act
    let (output, mutations) = run_session(mock, "delete #5\n");

    // Assert
    assert!(mutations.is_empty());
    assert!(output.contains("Error: There is no row #5."));
}

#[test]
fn given_failed_mutation_when_running_then_session_stays_interactive() {
    // Arrange
    let mock = MockTermsRepository::builder()
        .with_terms(&["a"])
        .with_mutation_error(DomainError::Transport("Request failed (Status: 500)".to_string()))
        .build();

    // Act
    let (output, mutations) = run_session(mock, "add b\nadd c\nquit\n");

    // Assert
    assert_eq!(mutations.len(), 2);
    assert_eq!(output.matches("Error: Request failed (Status: 500)").count(), 2);
}

#[test]
fn given_unknown_command_when_running_then_prints_hint() {
    // Arrange
    let mock = MockTermsRepository::builder().with_terms(&[]).build();

    // Act
    let (output, _) = run_session(mock, "frobnicate\n");

    // Assert
    assert!(output.contains("Unknown command 'frobnicate'"));
    assert!(output.contains("No options defined yet."));
}
