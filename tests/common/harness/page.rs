//! Builder for test pages with category tags.

#![allow(dead_code)]

/// Builder for a page body with optional `[Category:X]` tags appended.
#[derive(Debug, Clone)]
pub struct TestPage {
    title: String,
    body: String,
    categories: Vec<String>,
}

impl TestPage {
    /// Creates a new test page with the given title and an empty body.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: String::new(),
            categories: Vec::new(),
        }
    }

    /// Sets the body text that precedes any category tags.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Adds a `[Category:name]` tag.
    pub fn category(mut self, name: impl Into<String>) -> Self {
        self.categories.push(name.into());
        self
    }

    /// Returns the raw title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Renders the full markup: body, then one tag per line.
    pub fn markup(&self) -> String {
        let mut markup = self.body.clone();
        for name in &self.categories {
            if !markup.is_empty() && !markup.ends_with('\n') {
                markup.push('\n');
            }
            markup.push_str(&format!("[Category:{}]\n", name));
        }
        markup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_appends_tags_on_their_own_lines() {
        let page = TestPage::new("Lion").body("Roars.").category("Cats").category("Africa");
        assert_eq!(page.markup(), "Roars.\n[Category:Cats]\n[Category:Africa]\n");
    }

    #[test]
    fn markup_without_tags_is_body() {
        assert_eq!(TestPage::new("x").body("plain").markup(), "plain");
    }
}
