//! Configuration management for EduSearch CLI
//!
//! Database settings come from the environment (a `.env` file is loaded by
//! `main`), with `--database-url` taking precedence.

use edusearch_catalog::DbConfig;

use crate::error::{CliError, Result};
use crate::Cli;

/// URL scheme the catalog database must use
const SQLITE_SCHEME: &str = "sqlite:";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Catalog database settings
    pub database: DbConfig,

    /// Enable verbose output
    pub verbose: bool,
}

impl Config {
    /// Environment settings overridden by command-line flags
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = Self {
            database: DbConfig::from_env(),
            verbose: cli.verbose,
        };

        if let Some(url) = cli.database_url.as_deref().filter(|url| !url.trim().is_empty()) {
            config.database.url = url.trim().to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the catalog cannot work with
    pub fn validate(&self) -> Result<()> {
        if !self.database.url.starts_with(SQLITE_SCHEME) {
            return Err(CliError::config(format!(
                "unsupported database URL '{}', expected a {} URL",
                self.database.url, SQLITE_SCHEME
            )));
        }

        if self.database.connect_timeout_secs == 0 {
            return Err(CliError::config("connect timeout must be greater than zero"));
        }

        Ok(())
    }
}
