//! `[Category:Name]` tag extraction and removal.

use std::sync::LazyLock;

use regex::Regex;

/// `[Category:Name]`, where `Name` excludes `]` and `|`.
static CATEGORY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[Category:([^\]|]*)\]").expect("valid category regex"));

/// Returns the category names tagged in `text`, in document order.
///
/// Duplicates are kept. Run this before anything rewrites bracketed tokens,
/// otherwise the tags would already have turned into links.
///
/// # Example
///
/// ```
/// use arcwiki::render::extract_category_refs;
///
/// let refs = extract_category_refs("[Category:A] text [Category:B] [Category:A]");
/// assert_eq!(refs, vec!["A", "B", "A"]);
/// ```
pub fn extract_category_refs(text: &str) -> Vec<String> {
    CATEGORY_TAG
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Strips every category tag, leaving everything around it untouched.
///
/// # Example
///
/// ```
/// use arcwiki::render::remove_category_tags;
///
/// assert_eq!(remove_category_tags("a [Category:X] b"), "a  b");
/// ```
pub fn remove_category_tags(text: &str) -> String {
    CATEGORY_TAG.replace_all(text, "").into_owned()
}
