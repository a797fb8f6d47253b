//! WikiRepository implementation for SqliteStore.

use chrono::{DateTime, Utc};
use rusqlite::{Params, Row, params};

use super::{SqliteStore, lookup_category_id};
use crate::domain::{CanonicalTitle, Category, EdgeKind, OwnerBody, Page};
use crate::store::{StoreError, StoreResult, WikiRepository};

type PageRow = (i64, String, String, String, String);
type CategoryRow = (i64, String, String, String);

fn read_page_row(row: &Row<'_>) -> rusqlite::Result<PageRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
}

fn read_category_row(row: &Row<'_>) -> rusqlite::Result<CategoryRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn parse_timestamp(value: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::InvalidData(format!("invalid timestamp {:?}: {}", value, e)))
}

fn page_from_row((id, title, body, created, updated): PageRow) -> StoreResult<Page> {
    Ok(Page {
        id,
        title: CanonicalTitle::from_stored(title),
        body,
        created_at: parse_timestamp(&created)?,
        updated_at: parse_timestamp(&updated)?,
    })
}

fn category_from_row((id, title, body, created): CategoryRow) -> StoreResult<Category> {
    Ok(Category {
        id,
        title: CanonicalTitle::from_stored(title),
        body,
        created_at: parse_timestamp(&created)?,
    })
}

/// Escapes LIKE wildcards; `_` is common in titles and must match literally.
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

impl SqliteStore {
    fn query_pages(&self, sql: &str, params: impl Params) -> StoreResult<Vec<Page>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, read_page_row)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(page_from_row).collect()
    }

    fn query_categories(&self, sql: &str, params: impl Params) -> StoreResult<Vec<Category>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, read_category_row)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(category_from_row).collect()
    }

    fn query_titles(&self, sql: &str, id: i64) -> StoreResult<Vec<String>> {
        let mut stmt = self.conn.prepare(sql)?;
        let titles = stmt
            .query_map([id], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(titles)
    }
}

impl WikiRepository for SqliteStore {
    // ===========================================
    // Pages
    // ===========================================

    fn save_page(&mut self, title: &CanonicalTitle, body: &str) -> StoreResult<Page> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO pages (title, body, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)
             ON CONFLICT(title) DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at",
            params![title.as_str(), body, now],
        )?;

        self.get_page(title)?.ok_or_else(|| StoreError::NotFound {
            kind: "page",
            title: title.to_string(),
        })
    }

    fn get_page(&self, title: &CanonicalTitle) -> StoreResult<Option<Page>> {
        let pages = self.query_pages(
            "SELECT id, title, body, created_at, updated_at FROM pages WHERE title = ?1",
            [title.as_str()],
        )?;
        Ok(pages.into_iter().next())
    }

    fn delete_page(&mut self, title: &CanonicalTitle) -> StoreResult<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM pages WHERE title = ?1", [title.as_str()])?;
        if deleted == 0 {
            return Err(StoreError::NotFound {
                kind: "page",
                title: title.to_string(),
            });
        }
        Ok(())
    }

    fn list_pages(&self) -> StoreResult<Vec<Page>> {
        self.query_pages(
            "SELECT id, title, body, created_at, updated_at FROM pages ORDER BY title",
            [],
        )
    }

    fn search_pages(&self, query: &str) -> StoreResult<Vec<Page>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(StoreError::InvalidData("empty search query".to_string()));
        }
        // Stored titles use underscores where the reader typed spaces
        let pattern = like_pattern(&query.replace(' ', "_"));
        self.query_pages(
            "SELECT id, title, body, created_at, updated_at FROM pages
             WHERE title LIKE ?1 ESCAPE '\\' ORDER BY title",
            [pattern],
        )
    }

    // ===========================================
    // Categories
    // ===========================================

    fn add_category(&mut self, title: &CanonicalTitle) -> StoreResult<Category> {
        if self.get_category(title)?.is_some() {
            return Err(StoreError::InvalidData(format!(
                "category already exists: {}",
                title
            )));
        }
        self.save_category(title, "")
    }

    fn save_category(&mut self, title: &CanonicalTitle, body: &str) -> StoreResult<Category> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO categories (title, body, created_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(title) DO UPDATE SET body = excluded.body",
            params![title.as_str(), body, now],
        )?;

        self.get_category(title)?.ok_or_else(|| StoreError::NotFound {
            kind: "category",
            title: title.to_string(),
        })
    }

    fn get_category(&self, title: &CanonicalTitle) -> StoreResult<Option<Category>> {
        let categories = self.query_categories(
            "SELECT id, title, body, created_at FROM categories WHERE title = ?1",
            [title.as_str()],
        )?;
        Ok(categories.into_iter().next())
    }

    fn delete_category(&mut self, title: &CanonicalTitle) -> StoreResult<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM categories WHERE title = ?1", [title.as_str()])?;
        if deleted == 0 {
            return Err(StoreError::NotFound {
                kind: "category",
                title: title.to_string(),
            });
        }
        Ok(())
    }

    fn list_categories(&self) -> StoreResult<Vec<Category>> {
        self.query_categories(
            "SELECT id, title, body, created_at FROM categories ORDER BY title",
            [],
        )
    }

    fn category_id(&self, name: &str) -> StoreResult<Option<i64>> {
        lookup_category_id(&self.conn, name)
    }

    // ===========================================
    // Category graph
    // ===========================================

    fn owner_bodies(&self, kind: EdgeKind) -> StoreResult<Vec<OwnerBody>> {
        let sql = format!("SELECT id, body FROM {} ORDER BY id", kind.owner_table());
        let mut stmt = self.conn.prepare(&sql)?;
        let owners = stmt
            .query_map([], |row| Ok(OwnerBody::new(row.get(0)?, row.get::<_, String>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(owners)
    }

    fn edges(&self, kind: EdgeKind) -> StoreResult<Vec<(i64, i64)>> {
        let sql = format!(
            "SELECT {}, category_id FROM {} ORDER BY 1, 2",
            kind.owner_column(),
            kind.table()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let edges = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(edges)
    }

    fn pages_in_category(&self, category_id: i64) -> StoreResult<Vec<String>> {
        self.query_titles(
            "SELECT p.title FROM pages p
             JOIN category_pages cp ON cp.page_id = p.id
             WHERE cp.category_id = ?1 ORDER BY p.title",
            category_id,
        )
    }

    fn subcategories(&self, category_id: i64) -> StoreResult<Vec<String>> {
        self.query_titles(
            "SELECT c.title FROM categories c
             JOIN subcategory_pages sp ON sp.subcategory_id = c.id
             WHERE sp.category_id = ?1 ORDER BY c.title",
            category_id,
        )
    }

    fn parent_categories(&self, category_id: i64) -> StoreResult<Vec<String>> {
        self.query_titles(
            "SELECT c.title FROM categories c
             JOIN subcategory_pages sp ON sp.category_id = c.id
             WHERE sp.subcategory_id = ?1 ORDER BY c.title",
            category_id,
        )
    }

    fn page_categories(&self, page_id: i64) -> StoreResult<Vec<String>> {
        self.query_titles(
            "SELECT c.title FROM categories c
             JOIN category_pages cp ON cp.category_id = c.id
             WHERE cp.page_id = ?1 ORDER BY c.title",
            page_id,
        )
    }
}
