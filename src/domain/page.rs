//! Stored wiki entities: pages and categories.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::CanonicalTitle;

/// A wiki page as held by the store.
///
/// The body is raw wiki markup; rendering never writes back to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub id: i64,
    pub title: CanonicalTitle,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A category. Its body may carry category tags of its own, which makes it a
/// subcategory of the categories it names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: i64,
    pub title: CanonicalTitle,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// An id/body pair for an entity that owns outgoing category edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerBody {
    pub id: i64,
    pub body: String,
}

impl OwnerBody {
    pub fn new(id: i64, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }
}
