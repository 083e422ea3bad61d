//! EduSearch CLI - Main entry point

use clap::Parser;
use edusearch_cli::{
    classify_parse_error, print_usage, search_keyword, ArgProblem, Cli, CliError, Commands,
    Config, Failure,
};
use edusearch_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::io;
use std::process;
use tracing::{error, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Loaded before logging so LOG_* settings in .env apply; problems are logged below
    let dotenv_problem = load_dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => process::exit(report_parse_error(&err)),
    };

    // Initialize logging based on verbose flag and environment
    let log_config = LogConfig::builder()
        .level(if cli.verbose { LogLevel::Debug } else { LogLevel::Warn })
        .output(LogOutput::Console)
        .log_file_prefix("edusearch-cli")
        .build();

    // Environment variables take precedence
    let log_config = log_config.clone().merge_env().unwrap_or(log_config);

    // Initialize logging (ignore errors as CLI should work without logging)
    let _log_guard = init_logging(&log_config).ok();

    if let Some(e) = dotenv_problem {
        warn!(error = %e, "Ignoring unreadable .env file");
    }

    let keyword = match &cli.command {
        Some(Commands::Search { keyword }) => search_keyword(keyword),
        None => None,
    };

    let Some(keyword) = keyword else {
        print_usage();
        process::exit(1);
    };

    let result = match Config::from_cli(&cli) {
        Ok(config) => edusearch_cli::commands::search::run(&keyword, &config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!(error = %e, "Command failed");
        report_failure(&e);
        process::exit(1);
    }
}

/// Load `.env` if present; a missing file is not a problem
fn load_dotenv() -> Option<dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(_) => None,
        Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => Some(e),
    }
}

/// Print a parsing problem and return the exit code
fn report_parse_error(err: &clap::Error) -> i32 {
    match classify_parse_error(err) {
        ArgProblem::Informational => {
            let _ = err.print();
            0
        }
        ArgProblem::UnknownCommand(name) => {
            eprintln!("Unknown command: {}", name);
            print_usage();
            1
        }
        ArgProblem::Invalid => {
            let _ = err.print();
            print_usage();
            1
        }
    }
}

fn report_failure(err: &CliError) {
    match err.failure() {
        Failure::Validation => {
            eprintln!("Error: {}", err);
            print_usage();
        }
        Failure::Database => eprintln!("Database error: {}", err),
        Failure::Unexpected => eprintln!("Unexpected error: {}", err),
    }
}
