//! Error types for catalog operations

use crate::validation::ValidationError;
use thiserror::Error;

/// Result type alias for catalog operations
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Everything that can go wrong while searching or persisting resources
///
/// Absence of a row is not an error: lookups return `Ok(None)`.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Input or stored data broke a model rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Connecting to or querying the database failed
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

impl CatalogError {
    /// True for errors caused by invalid input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// True for connectivity and query failures
    pub fn is_database(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}
