//! Heading anchors and heading decoration.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::Heading;

/// A bare heading tag as emitted by the Markdown converter.
static BARE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<h([1-6])>(.+?)</h[1-6]>").expect("valid bare heading regex")
});

/// A heading carrying an id attribute.
static ID_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<h([1-6]) id="([^"]+)">(.*?)</h[1-6]>"#).expect("valid id heading regex")
});

/// Levels that get a presentation class, in the order they are applied.
const DECORATED_LEVELS: [u8; 4] = [1, 2, 3, 4];

/// Line-anchored heading patterns, one per decorated level.
///
/// Attributes are matched as quoted pairs, since an id may hold inline markup
/// such as `<em>` verbatim.
static DECORATE_PATTERNS: LazyLock<Vec<(u8, Regex)>> = LazyLock::new(|| {
    DECORATED_LEVELS
        .iter()
        .map(|&level| {
            let pattern =
                format!(r#"(?m)^<h{level}((?:\s+[\w-]+="[^"]*")*)\s*>(.+?)</h{level}>"#);
            let re = Regex::new(&pattern).expect("valid decorate regex");
            (level, re)
        })
        .collect()
});

/// Gives every bare `<hN>` tag an `id` attribute derived from its text.
///
/// The id is the trimmed heading text, lowercased, with spaces turned into
/// hyphens. A repeated id gets `-1`, `-2`, ... appended so every anchor on
/// the page stays unique.
///
/// # Example
///
/// ```
/// use arcwiki::render::identify_headings;
///
/// let html = identify_headings("<h2>Getting Started</h2>\n");
/// assert_eq!(html, "<h2 id=\"getting-started\">Getting Started</h2>\n");
/// ```
pub fn identify_headings(html: &str) -> String {
    let mut seen: HashMap<String, usize> = HashMap::new();

    BARE_HEADING
        .replace_all(html, |caps: &Captures| {
            let level = &caps[1];
            let text = caps[2].trim();
            let base = heading_id(text);

            let count = seen.entry(base.clone()).or_insert(0);
            let id = if *count == 0 {
                base
            } else {
                format!("{}-{}", base, count)
            };
            *count += 1;

            format!("<h{level} id=\"{id}\">{text}</h{level}>")
        })
        .into_owned()
}

/// Derives the anchor id for a heading's text.
pub fn heading_id(text: &str) -> String {
    text.to_lowercase().replace(' ', "-")
}

/// Lists the id-bearing headings in document order.
pub fn parse_headings(html: &str) -> Vec<Heading> {
    ID_HEADING
        .captures_iter(html)
        .filter_map(|caps| {
            let level = caps[1].parse::<u8>().ok()?;
            Some(Heading::new(level, &caps[2], &caps[3]))
        })
        .collect()
}

/// Adds a `wikihN` class to `<h1>` through `<h4>` tags that start a line.
///
/// Existing attributes and the inner text are kept. Levels 5 and 6, and any
/// heading that does not begin at the start of a line, are left untouched.
///
/// # Example
///
/// ```
/// use arcwiki::render::decorate_headings;
///
/// let html = decorate_headings("<h2 id=\"a\">A</h2>");
/// assert_eq!(html, "<h2 id=\"a\" class=\"wikih2\">A</h2>");
/// ```
pub fn decorate_headings(html: &str) -> String {
    let mut decorated = html.to_string();
    for (level, re) in DECORATE_PATTERNS.iter() {
        decorated = re
            .replace_all(&decorated, |caps: &Captures| {
                let attrs = caps[1].trim();
                let text = &caps[2];
                if attrs.is_empty() {
                    format!("<h{level} class=\"wikih{level}\">{text}</h{level}>")
                } else {
                    format!("<h{level} {attrs} class=\"wikih{level}\">{text}</h{level}>")
                }
            })
            .into_owned();
    }
    decorated
}
