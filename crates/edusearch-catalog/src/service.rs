//! Combined keyword search over classes and exams

use tracing::{debug, instrument};

use crate::db::Database;
use crate::error::CatalogResult;
use crate::models::{Class, Exam, Resource};
use crate::repositories::{ClassRepository, ExamRepository, KeywordSearch};
use crate::validation::validate_keyword;

/// Runs one keyword against both resource tables
///
/// Results are all matching classes followed by all matching exams, each
/// group in the order its repository returned them.
#[derive(Debug, Clone)]
pub struct SearchService<C, E> {
    classes: C,
    exams: E,
}

impl SearchService<ClassRepository, ExamRepository> {
    /// Service backed by the repositories of `db`
    pub fn from_database(db: &Database) -> Self {
        Self::new(ClassRepository::new(db.clone()), ExamRepository::new(db.clone()))
    }
}

impl<C, E> SearchService<C, E>
where
    C: KeywordSearch<Item = Class>,
    E: KeywordSearch<Item = Exam>,
{
    pub fn new(classes: C, exams: E) -> Self {
        Self { classes, exams }
    }

    /// Search both tables for `keyword`
    ///
    /// The keyword is validated before either repository is queried. A
    /// failure in either query fails the whole search.
    #[instrument(skip(self))]
    pub async fn search(&self, keyword: &str) -> CatalogResult<Vec<Resource>> {
        let keyword = validate_keyword(keyword)?;

        let classes = self.classes.search_by_keyword(&keyword).await?;
        let exams = self.exams.search_by_keyword(&keyword).await?;
        debug!(classes = classes.len(), exams = exams.len(), "Search finished");

        let mut results = Vec::with_capacity(classes.len() + exams.len());
        results.extend(classes.into_iter().map(Resource::from));
        results.extend(exams.into_iter().map(Resource::from));
        Ok(results)
    }

    /// One `"<Kind>: <display>"` line per result, order preserved
    pub fn format_results(&self, results: &[Resource]) -> Vec<String> {
        results.iter().map(ToString::to_string).collect()
    }
}
