//! Internal link rewriting.
//!
//! Turns bracketed wiki tokens (`[Some_Page]`) into anchors pointing at the
//! page's site-relative path.

use std::cell::Cell;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Default path prefix for internal page links.
pub const DEFAULT_LINK_BASE: &str = "/title/";

/// A single-line bracketed token.
static BRACKET_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]\n]+)\]").expect("valid link regex"));

/// Result of rewriting links in content.
#[derive(Debug)]
pub struct LinkRewrite {
    /// The content with anchors in place of bracketed tokens.
    pub content: String,
    /// Number of tokens rewritten.
    pub rewritten: usize,
}

/// Rewrites `[Text]` tokens into `<a href="{base}Text">Text</a>`.
///
/// The text is used verbatim as the path segment; titles are canonicalized
/// when saved, not here.
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    base: String,
}

impl Default for LinkRewriter {
    fn default() -> Self {
        Self::new(DEFAULT_LINK_BASE)
    }
}

impl LinkRewriter {
    /// Creates a rewriter with the given path prefix, e.g. `/title/`.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Returns the path prefix.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Rewrites every bracketed token in `content`.
    pub fn rewrite(&self, content: &str) -> LinkRewrite {
        let rewritten = Cell::new(0usize);

        let result = BRACKET_TOKEN.replace_all(content, |caps: &Captures| {
            let text = &caps[1];
            rewritten.set(rewritten.get() + 1);
            format!("<a href=\"{}{}\">{}</a>", self.base, text, text)
        });

        LinkRewrite {
            content: result.into_owned(),
            rewritten: rewritten.get(),
        }
    }

    /// Returns the href for a page title.
    pub fn href(&self, title: &str) -> String {
        format!("{}{}", self.base, title)
    }
}
