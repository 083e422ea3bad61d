//! Database handle and connection settings
//!
//! A [`Database`] is created once at startup and cloned into each repository.
//! It wraps a pool capped at a single connection; the connection is opened on
//! the first query and reused for the rest of the process.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::error::CatalogResult;

// ============================================================================
// Database Configuration Constants
// ============================================================================

/// Database URL used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://edusearch.db";

/// Seconds to wait for the connection before giving up.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Table definitions for the `classes` and `exams` tables.
pub const SCHEMA: &str = include_str!("../schema.sql");

/// Connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub url: String,
    pub connect_timeout_secs: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl DbConfig {
    /// Read `DATABASE_URL` and `DB_CONNECT_TIMEOUT`, falling back to defaults
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let connect_timeout_secs = std::env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS);

        Self {
            url,
            connect_timeout_secs,
        }
    }
}

/// Shared handle to the catalog database
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Prepare a handle without touching the database yet
    ///
    /// Fails only if the URL cannot be parsed; connectivity problems surface
    /// on the first query.
    pub fn connect_lazy(config: &DbConfig) -> CatalogResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect_lazy_with(options);

        debug!(url = %config.url, "Database handle created");
        Ok(Self { pool })
    }

    /// Open a private in-memory database with the schema applied
    pub async fn in_memory() -> CatalogResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        // The single connection must never be recycled or the data is gone.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.apply_schema().await?;
        Ok(db)
    }

    /// Create the `classes` and `exams` tables if they do not exist
    ///
    /// Meant for tests and local setup; production databases are provisioned
    /// outside this tool.
    pub async fn apply_schema(&self) -> CatalogResult<()> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        info!("Catalog schema applied");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check that the database answers
    pub async fn health_check(&self) -> CatalogResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Release the connection
    pub async fn close(&self) {
        self.pool.close().await;
        debug!("Database handle closed");
    }
}
