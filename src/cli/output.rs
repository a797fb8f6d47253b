//! Output format types for CLI commands.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

use crate::render::CategoryLink;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Canonical titles, one per line
    Titles,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A page in listing output.
#[derive(Debug, Serialize)]
pub struct PageListing {
    pub id: i64,
    pub title: String,
    pub updated_at: DateTime<Utc>,
}

/// A category in listing output.
#[derive(Debug, Serialize)]
pub struct CategoryListing {
    pub id: i64,
    pub title: String,
}

/// A rendered page.
#[derive(Debug, Serialize)]
pub struct PageView {
    pub title: String,
    pub display_title: String,
    pub html: String,
    pub categories: Vec<CategoryLink>,
    pub updated_at: DateTime<Utc>,
}

/// A rendered category and its place in the graph.
#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub title: String,
    pub html: String,
    /// Categories tagged in the body that exist.
    pub categories: Vec<CategoryLink>,
    /// Parent categories as of the last sync.
    pub parents: Vec<String>,
    pub subcategories: Vec<String>,
    pub pages: Vec<String>,
}
