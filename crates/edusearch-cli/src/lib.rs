//! EduSearch CLI Library
//!
//! Command-line front end for the EduSearch catalog.
//!
//! # Overview
//!
//! - **Search**: find classes and exams whose name contains a keyword (`edusearch search`)
//! - **Configuration**: database settings from `.env`, environment and flags
//! - **Reporting**: one line per result, or a categorized error message

pub mod commands;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, Failure, Result};

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};

/// Usage help printed when arguments are missing or rejected
pub const USAGE: &str = "Usage: edusearch search <keyword>
  <keyword>: Term to search for (minimum 3 characters)";

/// EduSearch - keyword search over classes and exams
#[derive(Parser, Debug)]
#[command(name = "edusearch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database URL (e.g. sqlite://edusearch.db)
    #[arg(long, env = "DATABASE_URL", global = true)]
    pub database_url: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search classes and exams by name
    Search {
        /// Term to search for (minimum 3 characters); several words are joined with spaces
        keyword: Vec<String>,
    },
}

/// How an argument parsing failure should be reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgProblem {
    /// `--help` or `--version`; clap already rendered the text
    Informational,

    /// The first argument is not a known command
    UnknownCommand(String),

    /// Anything else clap rejected
    Invalid,
}

/// Sort a clap parsing error into the categories the CLI reports
pub fn classify_parse_error(err: &clap::Error) -> ArgProblem {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ArgProblem::Informational,
        ErrorKind::InvalidSubcommand => {
            let name = match err.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(name)) => name.clone(),
                _ => String::new(),
            };
            ArgProblem::UnknownCommand(name)
        }
        _ => ArgProblem::Invalid,
    }
}

/// The keyword given to `search`, or `None` when no words were passed
pub fn search_keyword(words: &[String]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// Print [`USAGE`] to standard output
pub fn print_usage() {
    println!("{}", USAGE);
}
