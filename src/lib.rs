// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use application::{AssumeYes, Confirmer, OperationReport, TermsRepository, TermsSyncClient};
use cli::args::{Args, Command, OutputFormat};
use cli::shell::Shell;
use domain::Term;
use infrastructure::config::default_config_path;
use infrastructure::{Config, HttpTermsRepository, TerminalConfirmer};
use ports::{HtmlPresenter, TextPresenter};
use tracing::{debug, info};

pub fn run(args: Args) -> Result<ExitCode> {
    debug!(?args, "Starting termsync with arguments");

    let config_path = match args.config {
        Some(ref path) => {
            debug!(?path, "Using provided config path");
            path.clone()
        }
        None => default_config_path()?,
    };

    let endpoint = args.endpoint.clone();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = match args.command {
        Command::Init => {
            init(endpoint.as_deref(), &config_path)?;
            writeln!(out, "Wrote config to {}", config_path.display())?;
            OperationReport::Completed
        }
        Command::List { format } => {
            let client = build_client(endpoint.as_deref(), &config_path)?;
            list(client, format, &mut out)?
        }
        Command::Add { term } => {
            let client = build_client(endpoint.as_deref(), &config_path)?;
            add(client, &term, &mut out)?
        }
        Command::Delete { term, yes } => {
            let client = build_client(endpoint.as_deref(), &config_path)?;
            let mut confirmer: Box<dyn Confirmer> = if yes {
                Box::new(AssumeYes)
            } else {
                Box::new(TerminalConfirmer)
            };
            delete(client, &term, confirmer.as_mut(), &mut out)?
        }
        Command::Shell => {
            let client = build_client(endpoint.as_deref(), &config_path)?;
            let mut confirmer = TerminalConfirmer;
            let mut shell = Shell::new(client, &mut confirmer);
            shell.run(io::BufReader::new(io::stdin()), &mut out)?;
            OperationReport::Completed
        }
    };

    Ok(exit_code(&report))
}

/// Write a new config file, seeded with the endpoint override when one is given
pub fn init(endpoint: Option<&str>, config_path: &Path) -> Result<Config> {
    let config = match non_blank(endpoint) {
        Some(url) => Config::default().with_endpoint_url(url),
        None => Config::default(),
    };
    config.create(config_path)?;
    info!(?config_path, "Wrote config");
    Ok(config)
}

/// A non-blank flag or environment value wins over the config file
pub fn resolve_endpoint<'a>(endpoint: Option<&'a str>, config: &'a Config) -> Option<&'a str> {
    non_blank(endpoint).or(config.endpoint_url())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

pub fn build_client(
    endpoint: Option<&str>,
    config_path: &Path,
) -> Result<TermsSyncClient<HttpTermsRepository>> {
    let config = Config::load_or_default(config_path)?;
    let endpoint = resolve_endpoint(endpoint, &config);
    let repository = HttpTermsRepository::new(endpoint, config.timeout())?;
    Ok(TermsSyncClient::new(repository))
}

pub fn list<R: TermsRepository, W: Write>(
    mut client: TermsSyncClient<R>,
    format: OutputFormat,
    out: &mut W,
) -> Result<OperationReport> {
    let report = client.load();
    let view = client.view();

    match format {
        OutputFormat::Text => write!(out, "{}", TextPresenter::new().render(view))?,
        OutputFormat::Html => write!(out, "{}", HtmlPresenter::new().render(view.list()))?,
        OutputFormat::Json => {
            if report.is_failure() {
                if let Some(feedback) = view.feedback() {
                    eprintln!("{}", TextPresenter::new().render_feedback(feedback));
                }
            } else {
                let terms = view.list().terms();
                let json = serde_json::to_string_pretty(&terms).context("Failed to serialize terms")?;
                writeln!(out, "{}", json)?;
            }
        }
    }
    Ok(report)
}

/// The list is only printed once the service has returned one
pub fn add<R: TermsRepository, W: Write>(
    mut client: TermsSyncClient<R>,
    term: &str,
    out: &mut W,
) -> Result<OperationReport> {
    let report = client.submit(term);
    let presenter = TextPresenter::new();

    if report.is_failure() {
        if let Some(feedback) = client.view().feedback() {
            writeln!(out, "{}", presenter.render_feedback(feedback))?;
        }
    } else {
        write!(out, "{}", presenter.render(client.view()))?;
    }
    Ok(report)
}

/// Load first: a term can only be deleted through its rendered row
pub fn delete<R: TermsRepository, W: Write>(
    mut client: TermsSyncClient<R>,
    term: &str,
    confirmer: &mut dyn Confirmer,
    out: &mut W,
) -> Result<OperationReport> {
    let presenter = TextPresenter::new();

    let loaded = client.load();
    if loaded.is_failure() {
        write!(out, "{}", presenter.render(client.view()))?;
        return Ok(loaded);
    }

    let report = client.delete(&Term::from(term), confirmer);
    match report {
        OperationReport::Cancelled => writeln!(out, "Cancelled.")?,
        _ => write!(out, "{}", presenter.render(client.view()))?,
    }
    Ok(report)
}

fn exit_code(report: &OperationReport) -> ExitCode {
    if report.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
