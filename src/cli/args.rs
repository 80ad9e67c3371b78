// src/cli/args.rs
use crate::constants::ENDPOINT_ENV_VAR;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Script endpoint URL, overrides the config file
    #[arg(short, long, value_name = "URL", global = true, env = ENDPOINT_ENV_VAR)]
    pub endpoint: Option<String>,

    /// Path to config file (default: <config dir>/termsync/config.toml)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the current list of terms
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Add a term to the list
    Add {
        /// Term to add
        #[arg(value_name = "TERM")]
        term: String,
    },

    /// Delete a term from the list
    Delete {
        /// Term to delete, exactly as listed
        #[arg(value_name = "TERM")]
        term: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Interactive session: add and delete terms against a live list
    Shell,

    /// Write a default config file
    Init,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}
