use async_trait::async_trait;
use sqlx::FromRow;
use tracing::{debug, instrument};

use super::{fold_case, name_contains, KeywordSearch};
use crate::db::Database;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Class, Searchable};
use crate::validation::{validate_keyword, ValidationError};

/// Raw `classes` row before validation
#[derive(Debug, FromRow)]
struct ClassRow {
    id: i64,
    name: String,
    weight: i64,
    created_at: String,
    updated_at: String,
}

impl TryFrom<ClassRow> for Class {
    type Error = ValidationError;

    fn try_from(row: ClassRow) -> Result<Self, Self::Error> {
        Ok(Class::new(row.id, row.name, row.weight)?.with_timestamps(row.created_at, row.updated_at))
    }
}

/// Reads and writes the `classes` table
#[derive(Debug, Clone)]
pub struct ClassRepository {
    db: Database,
}

impl ClassRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Look up a class by id; `Ok(None)` when no row has that id
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> CatalogResult<Option<Class>> {
        let row = sqlx::query_as::<_, ClassRow>(
            r#"
            SELECT id, name, weight, created_at, updated_at
            FROM classes
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(Class::try_from).transpose()?)
    }

    /// Insert a new class or update an existing one
    ///
    /// New classes are re-read after the insert so the returned value carries
    /// the generated id and the stored timestamps.
    pub async fn save(&self, class: Class) -> CatalogResult<Class> {
        if class.is_new() {
            self.insert(&class).await
        } else {
            self.update(class).await
        }
    }

    #[instrument(skip(self, class), fields(name = %class.name()))]
    async fn insert(&self, class: &Class) -> CatalogResult<Class> {
        let result = sqlx::query("INSERT INTO classes (name, weight) VALUES (?, ?)")
            .bind(class.name())
            .bind(i64::from(class.weight()))
            .execute(self.db.pool())
            .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Class inserted");

        self.find_by_id(id)
            .await?
            .ok_or(CatalogError::Database(sqlx::Error::RowNotFound))
    }

    #[instrument(skip(self, class), fields(id = class.id()))]
    async fn update(&self, class: Class) -> CatalogResult<Class> {
        let result = sqlx::query(
            r#"
            UPDATE classes
            SET name = ?, weight = ?, updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            "#,
        )
        .bind(class.name())
        .bind(i64::from(class.weight()))
        .bind(class.id())
        .execute(self.db.pool())
        .await?;

        debug!(rows = result.rows_affected(), "Class updated");
        Ok(class)
    }

    /// Delete a class by id, returning whether a row was removed
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> CatalogResult<bool> {
        let result = sqlx::query("DELETE FROM classes WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl KeywordSearch for ClassRepository {
    type Item = Class;

    #[instrument(skip(self))]
    async fn search_by_keyword(&self, keyword: &str) -> CatalogResult<Vec<Class>> {
        let keyword = validate_keyword(keyword)?;

        let rows = sqlx::query_as::<_, ClassRow>(
            r#"
            SELECT id, name, weight, created_at, updated_at
            FROM classes
            ORDER BY name COLLATE NOCASE ASC, id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        // SQLite folds ASCII only, so matching happens on Unicode lowercase here
        let needle = fold_case(&keyword);
        let classes = rows
            .into_iter()
            .filter(|row| name_contains(&row.name, &needle))
            .map(Class::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = classes.len(), "Class search finished");
        Ok(classes)
    }
}
