//! The two kinds of category membership edges.

use serde::Serialize;
use std::fmt;

/// Which edge table a category reference feeds.
///
/// Pages tagged `[Category:X]` become members of `X`; categories tagged the
/// same way become subcategories of `X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// `category_pages(page_id, category_id)`
    PageCategory,
    /// `subcategory_pages(subcategory_id, category_id)`
    SubcategoryCategory,
}

impl EdgeKind {
    /// Both kinds, in the order a rebuild pass visits them.
    pub const ALL: [EdgeKind; 2] = [EdgeKind::PageCategory, EdgeKind::SubcategoryCategory];

    /// Name of the edge table.
    pub fn table(self) -> &'static str {
        match self {
            EdgeKind::PageCategory => "category_pages",
            EdgeKind::SubcategoryCategory => "subcategory_pages",
        }
    }

    /// Column holding the owning entity's id.
    pub fn owner_column(self) -> &'static str {
        match self {
            EdgeKind::PageCategory => "page_id",
            EdgeKind::SubcategoryCategory => "subcategory_id",
        }
    }

    /// Table the owning entities live in.
    pub fn owner_table(self) -> &'static str {
        match self {
            EdgeKind::PageCategory => "pages",
            EdgeKind::SubcategoryCategory => "categories",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::PageCategory => write!(f, "page-category"),
            EdgeKind::SubcategoryCategory => write!(f, "category-parent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_visits_pages_first() {
        assert_eq!(
            EdgeKind::ALL,
            [EdgeKind::PageCategory, EdgeKind::SubcategoryCategory]
        );
    }

    #[test]
    fn table_names() {
        assert_eq!(EdgeKind::PageCategory.table(), "category_pages");
        assert_eq!(EdgeKind::PageCategory.owner_column(), "page_id");
        assert_eq!(EdgeKind::SubcategoryCategory.table(), "subcategory_pages");
        assert_eq!(EdgeKind::SubcategoryCategory.owner_column(), "subcategory_id");
        assert_eq!(EdgeKind::SubcategoryCategory.owner_table(), "categories");
    }

    #[test]
    fn display_labels() {
        assert_eq!(EdgeKind::PageCategory.to_string(), "page-category");
        assert_eq!(EdgeKind::SubcategoryCategory.to_string(), "category-parent");
    }
}
