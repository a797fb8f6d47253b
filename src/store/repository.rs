//! WikiRepository trait and the store error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{CanonicalTitle, Category, EdgeKind, OwnerBody, Page};

// ===========================================
// StoreError Type
// ===========================================

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested page or category does not exist.
    #[error("{kind} not found: {title}")]
    NotFound { kind: &'static str, title: String },

    /// A title was rejected by canonicalization.
    #[error("invalid title: {0}")]
    InvalidTitle(String),

    /// Stored or supplied data could not be used.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ===========================================
// WikiRepository Trait
// ===========================================

/// Reads and writes pages and categories, and reads the category graph.
///
/// Edge rows are not written here; they are replaced only through a
/// [`Transaction`](crate::store::Transaction) by the synchronizer.
pub trait WikiRepository {
    /// Creates the page or replaces its body, bumping `updated_at`.
    fn save_page(&mut self, title: &CanonicalTitle, body: &str) -> StoreResult<Page>;

    /// Retrieves a page by title.
    fn get_page(&self, title: &CanonicalTitle) -> StoreResult<Option<Page>>;

    /// Deletes a page and, by cascade, its category edges.
    fn delete_page(&mut self, title: &CanonicalTitle) -> StoreResult<()>;

    /// All pages, ordered by title.
    fn list_pages(&self) -> StoreResult<Vec<Page>>;

    /// Pages whose title contains `query`, case-insensitively, ordered by title.
    fn search_pages(&self, query: &str) -> StoreResult<Vec<Page>>;

    /// Creates an empty category. Fails if it already exists.
    fn add_category(&mut self, title: &CanonicalTitle) -> StoreResult<Category>;

    /// Creates the category or replaces its body.
    fn save_category(&mut self, title: &CanonicalTitle, body: &str) -> StoreResult<Category>;

    /// Retrieves a category by title.
    fn get_category(&self, title: &CanonicalTitle) -> StoreResult<Option<Category>>;

    /// Deletes a category and, by cascade, every edge touching it.
    fn delete_category(&mut self, title: &CanonicalTitle) -> StoreResult<()>;

    /// All categories, ordered by title.
    fn list_categories(&self) -> StoreResult<Vec<Category>>;

    /// Looks up a category id by exact title.
    fn category_id(&self, name: &str) -> StoreResult<Option<i64>>;

    /// Id and body of every entity that owns edges of `kind`.
    fn owner_bodies(&self, kind: EdgeKind) -> StoreResult<Vec<OwnerBody>>;

    /// All `(owner_id, category_id)` rows of `kind`, ordered.
    fn edges(&self, kind: EdgeKind) -> StoreResult<Vec<(i64, i64)>>;

    /// Titles of pages in a category, ordered.
    fn pages_in_category(&self, category_id: i64) -> StoreResult<Vec<String>>;

    /// Titles of the direct subcategories of a category, ordered.
    fn subcategories(&self, category_id: i64) -> StoreResult<Vec<String>>;

    /// Titles of the categories a category belongs to, ordered.
    fn parent_categories(&self, category_id: i64) -> StoreResult<Vec<String>>;

    /// Titles of the categories a page belongs to, ordered.
    fn page_categories(&self, page_id: i64) -> StoreResult<Vec<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let error = StoreError::NotFound {
            kind: "page",
            title: "Missing_Page".to_string(),
        };
        assert_eq!(error.to_string(), "page not found: Missing_Page");
    }

    #[test]
    fn invalid_title_display() {
        let error = StoreError::InvalidTitle("!!!".to_string());
        assert_eq!(error.to_string(), "invalid title: !!!");
    }

    #[test]
    fn database_error_converts() {
        let error: StoreError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(error, StoreError::Database(_)));
        assert!(error.to_string().starts_with("database error:"));
    }

    #[test]
    fn store_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<StoreError>();
    }
}
