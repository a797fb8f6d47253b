//! SQLite storage for pages, categories, and their category edges.

mod repository;
mod schema;
mod sqlite;

pub use repository::{StoreError, StoreResult, WikiRepository};
pub use schema::create_schema;
pub use sqlite::{SqliteStore, Transaction};
