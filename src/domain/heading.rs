//! Headings found in rendered HTML.

/// One id-bearing heading, derived per render and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 1 through 6.
    pub level: u8,
    /// Anchor id, as written in the `id` attribute.
    pub id: String,
    /// Inner HTML of the heading, unchanged.
    pub text: String,
}

impl Heading {
    pub fn new(level: u8, id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level,
            id: id.into(),
            text: text.into(),
        }
    }
}
