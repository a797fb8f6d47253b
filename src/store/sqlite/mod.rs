//! SQLite-backed wiki store.

mod connection;
mod repo_impl;
mod transaction;


use rusqlite::{Connection, OptionalExtension};

use crate::render::CategoryResolver;
use crate::store::StoreResult;

pub use transaction::Transaction;

// ===========================================
// SqliteStore Struct
// ===========================================

/// SQLite-backed store for pages, categories, and category edges.
///
/// Owns one connection. The synchronizer thread opens its own.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}

/// Exact-title category lookup shared by the store and its transactions.
pub(crate) fn lookup_category_id(conn: &Connection, name: &str) -> StoreResult<Option<i64>> {
    let id = conn
        .query_row(
            "SELECT id FROM categories WHERE title = ?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}

impl CategoryResolver for SqliteStore {
    fn resolve_category_id(&self, name: &str) -> StoreResult<Option<i64>> {
        lookup_category_id(&self.conn, name)
    }
}

impl CategoryResolver for Transaction<'_> {
    fn resolve_category_id(&self, name: &str) -> StoreResult<Option<i64>> {
        lookup_category_id(self.conn(), name)
    }
}
