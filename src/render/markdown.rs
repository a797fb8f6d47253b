//! Markdown to HTML conversion.

use pulldown_cmark::{Options, Parser, html};

/// Converts a raw page body from Markdown to HTML.
///
/// The rendering pipeline only depends on this trait, so a different
/// Markdown engine can be swapped in without touching the stages.
pub trait MarkdownConverter: Send + Sync {
    fn to_html(&self, markdown: &str) -> String;
}

/// `pulldown-cmark` backed converter.
#[derive(Debug, Default, Clone, Copy)]
pub struct PulldownMarkdown;

impl MarkdownConverter for PulldownMarkdown {
    fn to_html(&self, markdown: &str) -> String {
        markdown_to_html(markdown)
    }
}

/// Converts markdown text to HTML.
///
/// Enables common markdown extensions:
/// - Tables
/// - Footnotes
/// - Strikethrough
///
/// Task lists stay off: `[ ]` and `[x]` are bracketed wiki tokens here.
///
/// # Example
///
/// ```
/// use arcwiki::render::markdown_to_html;
///
/// let html = markdown_to_html("# Hello\n\nWorld");
/// assert!(html.contains("<h1>Hello</h1>"));
/// assert!(html.contains("<p>World</p>"));
/// ```
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
