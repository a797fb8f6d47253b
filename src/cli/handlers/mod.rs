//! Command handlers for the CLI.

mod canon;
mod category;
mod completions;
mod page;
mod search;
mod sync;


use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use crate::domain::CanonicalTitle;
use crate::store::{SqliteStore, StoreError};

// Re-export public items
pub use canon::handle_canon;
pub use category::{category_view, handle_category};
pub use completions::handle_completions;
pub use page::{handle_page, page_view};
pub use search::handle_search;
pub use sync::handle_sync;

#[cfg(test)]
pub(crate) use sync::report_lines;

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the wiki database, creating it on first use.
pub(crate) fn open_store(db_path: &Path) -> Result<SqliteStore> {
    SqliteStore::open(db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))
}

/// Canonicalizes a title typed on the command line.
pub(crate) fn parse_title(raw: &str) -> Result<CanonicalTitle> {
    Ok(CanonicalTitle::new(raw).map_err(|_| StoreError::InvalidTitle(raw.to_string()))?)
}

/// Reads a body from `file`, or from stdin when no file is given.
pub(crate) fn read_body(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read body from {}", path.display())),
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("failed to read body from stdin")?;
            Ok(body)
        }
    }
}
