//! Error types for EduSearch CLI

use edusearch_catalog::CatalogError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors a CLI command can end with
#[derive(Error, Debug)]
pub enum CliError {
    /// Search or storage failure from the catalog
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check DATABASE_URL and DB_CONNECT_TIMEOUT.")]
    Config(String),
}

/// Category of a failure, used to pick the message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Bad input; reported as `Error: ...` followed by the usage help
    Validation,

    /// Storage unreachable or a query failed; reported as `Database error: ...`
    Database,

    /// Everything else; reported as `Unexpected error: ...`
    Unexpected,
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn failure(&self) -> Failure {
        match self {
            Self::Catalog(err) if err.is_validation() => Failure::Validation,
            Self::Catalog(err) if err.is_database() => Failure::Database,
            _ => Failure::Unexpected,
        }
    }
}
