// src/cli/shell.rs
use crate::application::{Confirmer, TermsRepository, TermsSyncClient};
use crate::domain::Term;
use crate::ports::TextPresenter;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Commands:
  add <term>        add a term
  delete <term>     delete a term (or `delete #<n>` for row n)
  list | refresh    reload the list
  help              show this help
  quit | exit       leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Term(String),
    Row(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add(String),
    Delete(DeleteTarget),
    Refresh,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Split a line into a command and its untouched remainder
pub fn parse_line(line: &str) -> ShellCommand {
    let line = line.trim();
    if line.is_empty() {
        return ShellCommand::Empty;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "add" => ShellCommand::Add(rest.to_string()),
        "delete" | "del" | "rm" => {
            let target = rest
                .strip_prefix('#')
                .and_then(|n| n.parse::<usize>().ok())
                .map(DeleteTarget::Row)
                .unwrap_or_else(|| DeleteTarget::Term(rest.to_string()));
            ShellCommand::Delete(target)
        }
        "list" | "refresh" | "ls" => ShellCommand::Refresh,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => ShellCommand::Unknown(other.to_string()),
    }
}

/// Line-driven session over one live view
pub struct Shell<'a, R: TermsRepository> {
    client: TermsSyncClient<R>,
    confirmer: &'a mut dyn Confirmer,
    presenter: TextPresenter,
}

impl<'a, R: TermsRepository> Shell<'a, R> {
    pub fn new(client: TermsSyncClient<R>, confirmer: &'a mut dyn Confirmer) -> Self {
        Self {
            client,
            confirmer,
            presenter: TextPresenter::new(),
        }
    }

    pub fn client(&self) -> &TermsSyncClient<R> {
        &self.client
    }

    /// Load, then run commands until `quit` or end of input
    pub fn run<I: BufRead, O: Write>(&mut self, input: I, output: &mut O) -> Result<()> {
        self.client.load();
        self.render(output)?;

        let mut lines = input.lines();
        loop {
            write!(output, "> ").context("Failed to write prompt")?;
            output.flush().context("Failed to flush output")?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };
            let line = line.context("Failed to read command")?;
            let command = parse_line(&line);
            debug!(?command, "Shell command");

            match command {
                ShellCommand::Empty => continue,
                ShellCommand::Quit => break,
                ShellCommand::Help => writeln!(output, "{}", HELP)?,
                ShellCommand::Unknown(word) => {
                    writeln!(output, "Unknown command '{}'. Type `help` for commands.", word)?
                }
                ShellCommand::Refresh => {
                    self.client.load();
                    self.render(output)?;
                }
                ShellCommand::Add(text) => {
                    self.client.submit(&text);
                    self.render(output)?;
                }
                ShellCommand::Delete(target) => {
                    if let Some(term) = self.resolve(target) {
                        self.client.delete(&term, &mut *self.confirmer);
                    }
                    self.render(output)?;
                }
            }
        }
        Ok(())
    }

    fn resolve(&mut self, target: DeleteTarget) -> Option<Term> {
        match target {
            DeleteTarget::Term(text) => Some(Term::from(text)),
            DeleteTarget::Row(n) => {
                let term = n
                    .checked_sub(1)
                    .and_then(|index| self.client.view().list().rows().get(index))
                    .map(|row| row.term.clone());
                if term.is_none() {
                    self.client.view_mut().show_error(format!("There is no row #{}.", n));
                }
                term
            }
        }
    }

    fn render<O: Write>(&self, output: &mut O) -> Result<()> {
        write!(output, "{}", self.presenter.render(self.client.view()))
            .context("Failed to write view")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("add  new term ", ShellCommand::Add("new term".to_string()))]
    #[case("add", ShellCommand::Add(String::new()))]
    #[case("DELETE apples", ShellCommand::Delete(DeleteTarget::Term("apples".to_string())))]
    #[case("delete #2", ShellCommand::Delete(DeleteTarget::Row(2)))]
    #[case("rm #x", ShellCommand::Delete(DeleteTarget::Term("#x".to_string())))]
    #[case("refresh", ShellCommand::Refresh)]
    #[case("   ", ShellCommand::Empty)]
    #[case("exit", ShellCommand::Quit)]
    #[case("frobnicate now", ShellCommand::Unknown("frobnicate".to_string()))]
    fn given_line_when_parsing_then_returns_command(#[case] line: &str, #[case] expected: ShellCommand) {
        assert_eq!(parse_line(line), expected);
    }
}
