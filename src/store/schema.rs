//! SQLite schema for pages, categories, and category edges.

use rusqlite::Connection;

/// Creates every table and index. Safe to run against an existing database.
///
/// # Tables Created
/// - `pages` - Page titles and raw bodies
/// - `categories` - Category titles and raw bodies
/// - `category_pages` - Page membership in a category
/// - `subcategory_pages` - Category membership in a parent category
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    // ===========================================
    // Entities
    // ===========================================
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS pages (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL UNIQUE,
            body TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL UNIQUE,
            body TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );",
    )?;

    // ===========================================
    // Edges
    // ===========================================
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS category_pages (
            page_id INTEGER NOT NULL REFERENCES pages(id) ON DELETE CASCADE,
            category_id INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
            PRIMARY KEY (page_id, category_id)
        );
        CREATE INDEX IF NOT EXISTS idx_category_pages_category ON category_pages(category_id);",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS subcategory_pages (
            subcategory_id INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
            category_id INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
            PRIMARY KEY (subcategory_id, category_id)
        );
        CREATE INDEX IF NOT EXISTS idx_subcategory_pages_category ON subcategory_pages(category_id);",
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        let names = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<String>, _>>()
            .unwrap();
        names
    }

    #[test]
    fn creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();

        assert_eq!(
            table_names(&conn),
            vec!["categories", "category_pages", "pages", "subcategory_pages"]
        );
    }

    #[test]
    fn is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        create_schema(&conn).unwrap();

        assert_eq!(table_names(&conn).len(), 4);
    }

    #[test]
    fn duplicate_edge_violates_primary_key() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        conn.execute_batch(
            "INSERT INTO pages (id, title, created_at, updated_at) VALUES (1, 'P', 't', 't');
             INSERT INTO categories (id, title, created_at) VALUES (1, 'C', 't');
             INSERT INTO category_pages VALUES (1, 1);",
        )
        .unwrap();

        assert!(conn.execute("INSERT INTO category_pages VALUES (1, 1)", []).is_err());
    }

    #[test]
    fn deleting_category_cascades_to_edges() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        conn.execute_batch(
            "INSERT INTO pages (id, title, created_at, updated_at) VALUES (1, 'P', 't', 't');
             INSERT INTO categories (id, title, created_at) VALUES (1, 'C', 't');
             INSERT INTO categories (id, title, created_at) VALUES (2, 'D', 't');
             INSERT INTO category_pages VALUES (1, 1);
             INSERT INTO subcategory_pages VALUES (2, 1);
             DELETE FROM categories WHERE id = 1;",
        )
        .unwrap();

        let pages: i64 = conn
            .query_row("SELECT COUNT(*) FROM category_pages", [], |r| r.get(0))
            .unwrap();
        let subs: i64 = conn
            .query_row("SELECT COUNT(*) FROM subcategory_pages", [], |r| r.get(0))
            .unwrap();
        assert_eq!((pages, subs), (0, 0));
    }
}
