//! Table access for classes and exams
//!
//! Each repository owns a [`Database`](crate::Database) clone and maps rows into
//! validated models. The keyword search is exposed through [`KeywordSearch`]
//! so the search service can be driven by test doubles.

mod class_repo;
mod exam_repo;

pub use class_repo::ClassRepository;
pub use exam_repo::ExamRepository;

use async_trait::async_trait;

use crate::error::CatalogResult;

/// Substring search over a resource table
#[async_trait]
pub trait KeywordSearch: Send + Sync {
    type Item: Send;

    /// Resources whose name contains `keyword`, ignoring case, ordered by name
    ///
    /// Fails with a validation error when the trimmed keyword is shorter than
    /// three characters.
    async fn search_by_keyword(&self, keyword: &str) -> CatalogResult<Vec<Self::Item>>;
}

/// Case-insensitive substring test over Unicode lowercase forms
///
/// `needle` must already be folded with [`fold_case`].
pub(crate) fn name_contains(name: &str, needle: &str) -> bool {
    fold_case(name).contains(needle)
}

pub(crate) fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_contains_ignores_case() {
        let needle = fold_case("TRABAJO");
        assert!(name_contains("Vocabulario sobre Trabajo", &needle));
        assert!(!name_contains("Historia del Arte", &needle));
    }

    #[test]
    fn test_name_contains_folds_accented_letters() {
        let needle = fold_case("QUÍMICA");
        assert_eq!(needle, "química");
        assert!(name_contains("Química Orgánica", &needle));
        assert!(name_contains("Introducción a la QUÍMICA", &fold_case("química")));
    }

    #[test]
    fn test_name_contains_is_literal() {
        assert!(name_contains("Descuento 100% real", &fold_case("100%")));
        assert!(!name_contains("Descuento 1000", &fold_case("100%")));
        assert!(!name_contains("a_b", &fold_case("a%b")));
    }
}
