//! EduSearch Catalog
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Keyword search over the two kinds of learning resources stored in the
//! catalog database: classes and exams.
//!
//! # Overview
//!
//! - **Models**: validated [`Class`] and [`Exam`] values, unified by [`Resource`]
//! - **Database**: an explicit [`Database`] handle passed to every repository
//! - **Repositories**: substring search, lookup by id, save and delete per table
//! - **Service**: [`SearchService`] queries classes then exams and formats the output
//!
//! # Example
//!
//! ```no_run
//! use edusearch_catalog::{Database, DbConfig, SearchService};
//!
//! # async fn demo() -> edusearch_catalog::CatalogResult<()> {
//! let db = Database::connect_lazy(&DbConfig::from_env())?;
//! let service = SearchService::from_database(&db);
//!
//! let results = service.search("trabajo").await?;
//! for line in service.format_results(&results) {
//!     println!("{}", line);
//! }
//!
//! db.close().await;
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod error;
pub mod models;
pub mod repositories;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use db::{Database, DbConfig};
pub use error::{CatalogError, CatalogResult};
pub use models::{Class, Exam, ExamType, Resource, Searchable};
pub use repositories::{ClassRepository, ExamRepository, KeywordSearch};
pub use service::SearchService;
pub use validation::ValidationError;
