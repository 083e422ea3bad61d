use async_trait::async_trait;
use sqlx::FromRow;
use tracing::{debug, instrument};

use super::{fold_case, name_contains, KeywordSearch};
use crate::db::Database;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Exam, Searchable};
use crate::validation::{validate_keyword, ValidationError};

/// Raw `exams` row before validation
#[derive(Debug, FromRow)]
struct ExamRow {
    id: i64,
    name: String,
    exam_type: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<ExamRow> for Exam {
    type Error = ValidationError;

    fn try_from(row: ExamRow) -> Result<Self, Self::Error> {
        Ok(Exam::new(row.id, row.name, &row.exam_type)?.with_timestamps(row.created_at, row.updated_at))
    }
}

/// Reads and writes the `exams` table
#[derive(Debug, Clone)]
pub struct ExamRepository {
    db: Database,
}

impl ExamRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Look up an exam by id; `Ok(None)` when no row has that id
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> CatalogResult<Option<Exam>> {
        let row = sqlx::query_as::<_, ExamRow>(
            r#"
            SELECT id, name, type AS exam_type, created_at, updated_at
            FROM exams
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(Exam::try_from).transpose()?)
    }

    /// Insert a new exam or update an existing one
    pub async fn save(&self, exam: Exam) -> CatalogResult<Exam> {
        if exam.is_new() {
            self.insert(&exam).await
        } else {
            self.update(exam).await
        }
    }

    #[instrument(skip(self, exam), fields(name = %exam.name()))]
    async fn insert(&self, exam: &Exam) -> CatalogResult<Exam> {
        let result = sqlx::query("INSERT INTO exams (name, type) VALUES (?, ?)")
            .bind(exam.name())
            .bind(exam.exam_type().as_str())
            .execute(self.db.pool())
            .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Exam inserted");

        self.find_by_id(id)
            .await?
            .ok_or(CatalogError::Database(sqlx::Error::RowNotFound))
    }

    #[instrument(skip(self, exam), fields(id = exam.id()))]
    async fn update(&self, exam: Exam) -> CatalogResult<Exam> {
        let result = sqlx::query(
            r#"
            UPDATE exams
            SET name = ?, type = ?, updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            "#,
        )
        .bind(exam.name())
        .bind(exam.exam_type().as_str())
        .bind(exam.id())
        .execute(self.db.pool())
        .await?;

        debug!(rows = result.rows_affected(), "Exam updated");
        Ok(exam)
    }

    /// Delete an exam by id, returning whether a row was removed
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> CatalogResult<bool> {
        let result = sqlx::query("DELETE FROM exams WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl KeywordSearch for ExamRepository {
    type Item = Exam;

    #[instrument(skip(self))]
    async fn search_by_keyword(&self, keyword: &str) -> CatalogResult<Vec<Exam>> {
        let keyword = validate_keyword(keyword)?;

        let rows = sqlx::query_as::<_, ExamRow>(
            r#"
            SELECT id, name, type AS exam_type, created_at, updated_at
            FROM exams
            ORDER BY name COLLATE NOCASE ASC, id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        // SQLite folds ASCII only, so matching happens on Unicode lowercase here
        let needle = fold_case(&keyword);
        let exams = rows
            .into_iter()
            .filter(|row| name_contains(&row.name, &needle))
            .map(Exam::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = exams.len(), "Exam search finished");
        Ok(exams)
    }
}
