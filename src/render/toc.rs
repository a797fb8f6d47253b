//! Table of contents synthesis.

use crate::domain::Heading;
use crate::render::headings::parse_headings;

/// Fewer headings than this and no table of contents is emitted.
pub const MIN_TOC_HEADINGS: usize = 2;

const MAX_LEVEL: usize = 6;

/// One numbered line of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub number: String,
    pub id: String,
    pub text: String,
}

/// Level-tracking state for building a nested, numbered list.
///
/// Feed headings in document order with [`TocBuilder::push`], then call
/// [`TocBuilder::finish`] to close any lists still open.
#[derive(Debug, Default)]
pub struct TocBuilder {
    current_level: usize,
    /// Shallowest level pushed so far, 0 before the first.
    top_level: usize,
    /// Counter per level; index 0 is unused.
    counters: [usize; MAX_LEVEL + 1],
    open_lists: usize,
    markup: String,
    entries: Vec<TocEntry>,
}

impl TocBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Level of the most recent heading, 0 before the first.
    pub fn current_level(&self) -> usize {
        self.current_level
    }

    /// Number of `<ul>` elements currently open.
    pub fn open_lists(&self) -> usize {
        self.open_lists
    }

    /// Adds one heading and returns its hierarchical number.
    pub fn push(&mut self, heading: &Heading) -> String {
        let level = usize::from(heading.level).clamp(1, MAX_LEVEL);
        if self.top_level == 0 || level < self.top_level {
            self.top_level = level;
        }

        if level > self.current_level {
            for _ in self.current_level..level {
                self.open_list();
            }
            self.counters[level] = 1;
        } else if level < self.current_level {
            for _ in level..self.current_level {
                self.close_list();
            }
            // Sections below this level start over under the new parent
            for deeper in (level + 1)..=MAX_LEVEL {
                self.counters[deeper] = 0;
            }
            self.counters[level] += 1;
        } else {
            self.counters[level] += 1;
        }
        self.current_level = level;

        let number = self.number(level);
        self.markup.push_str(&format!(
            "<li><span>{}  </span><a href=\"#{}\">{}</a></li>",
            number, heading.id, heading.text
        ));
        self.entries.push(TocEntry {
            number: number.clone(),
            id: heading.id.clone(),
            text: heading.text.clone(),
        });
        number
    }

    /// Closes every open list and returns the list markup with its entries.
    pub fn finish(mut self) -> (String, Vec<TocEntry>) {
        while self.open_lists > 0 {
            self.close_list();
        }
        self.current_level = 0;
        self.top_level = 0;
        (self.markup, self.entries)
    }

    /// Counters from the shallowest level seen down to this one.
    ///
    /// Levels above the shallowest are left out, so a page of `<h2>`s numbers
    /// 1, 2, 3. A skipped level in between shows as `0`, e.g. `1.0.1`.
    fn number(&self, level: usize) -> String {
        let mut number = String::new();
        for ancestor in self.top_level..level {
            number.push_str(&format!("{}.", self.counters[ancestor]));
        }
        number.push_str(&self.counters[level].to_string());
        number
    }

    fn open_list(&mut self) {
        self.markup.push_str("<ul>");
        self.open_lists += 1;
    }

    fn close_list(&mut self) {
        if self.open_lists > 0 {
            self.markup.push_str("</ul>");
            self.open_lists -= 1;
        }
    }
}

/// Prepends a numbered "Contents" block when the HTML has at least two
/// id-bearing headings.
///
/// The input is returned byte-for-byte after the block, and returned as-is
/// when there are fewer than [`MIN_TOC_HEADINGS`] headings.
///
/// # Example
///
/// ```
/// use arcwiki::render::build_toc;
///
/// let html = "<h2 id=\"b\">B</h2>\n<h2 id=\"a\">A</h2>\n";
/// let with_toc = build_toc(html);
/// assert!(with_toc.starts_with("<div class=\"toc\">"));
/// assert!(with_toc.ends_with(html));
///
/// assert_eq!(build_toc("<h2 id=\"only\">Only</h2>"), "<h2 id=\"only\">Only</h2>");
/// ```
pub fn build_toc(html: &str) -> String {
    let headings = parse_headings(html);
    if headings.len() < MIN_TOC_HEADINGS {
        return html.to_string();
    }

    let mut builder = TocBuilder::new();
    for heading in &headings {
        builder.push(heading);
    }
    let (list, _) = builder.finish();

    format!(
        "<div class=\"toc\"><h6 class=\"text-center\">Contents</h6>{}</div>\n{}",
        list, html
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn headings(levels: &[u8]) -> Vec<Heading> {
        levels
            .iter()
            .enumerate()
            .map(|(i, &level)| Heading::new(level, format!("h{}", i), format!("H{}", i)))
            .collect()
    }

    fn numbers(levels: &[u8]) -> Vec<String> {
        let mut builder = TocBuilder::new();
        headings(levels).iter().map(|h| builder.push(h)).collect()
    }

    // ===========================================
    // Numbering
    // ===========================================

    #[test]
    fn numbers_nested_levels() {
        assert_eq!(
            numbers(&[1, 2, 2, 1, 2, 3]),
            vec!["1", "1.1", "1.2", "2", "2.1", "2.1.1"]
        );
    }

    #[test]
    fn numbers_flat_second_level() {
        assert_eq!(numbers(&[2, 2, 2]), vec!["1", "2", "3"]);
    }

    #[test]
    fn numbers_mark_skipped_levels_with_zero() {
        assert_eq!(numbers(&[1, 3, 3]), vec!["1", "1.0.1", "1.0.2"]);
    }

    #[test]
    fn numbers_stay_unique_after_skipped_level() {
        assert_eq!(
            numbers(&[1, 3, 2, 3]),
            vec!["1", "1.0.1", "1.1", "1.1.1"]
        );
    }

    #[test]
    fn numbers_leave_out_levels_above_the_first() {
        assert_eq!(numbers(&[3, 4, 3]), vec!["1", "1.1", "2"]);
    }

    #[test]
    fn numbers_restart_under_new_parent() {
        assert_eq!(
            numbers(&[1, 2, 2, 1, 3]),
            vec!["1", "1.1", "1.2", "2", "2.0.1"]
        );
    }

    #[test]
    fn numbers_deep_return() {
        assert_eq!(
            numbers(&[1, 2, 3, 3, 2, 3]),
            vec!["1", "1.1", "1.1.1", "1.1.2", "1.2", "1.2.1"]
        );
    }

    // ===========================================
    // Level transitions
    // ===========================================

    #[test]
    fn opens_one_list_per_level_step() {
        let mut builder = TocBuilder::new();
        builder.push(&Heading::new(3, "a", "A"));
        assert_eq!(builder.current_level(), 3);
        assert_eq!(builder.open_lists(), 3);
    }

    #[test]
    fn closes_one_list_per_level_step() {
        let mut builder = TocBuilder::new();
        builder.push(&Heading::new(1, "a", "A"));
        builder.push(&Heading::new(4, "b", "B"));
        assert_eq!(builder.open_lists(), 4);
        builder.push(&Heading::new(2, "c", "C"));
        assert_eq!(builder.open_lists(), 2);
        assert_eq!(builder.current_level(), 2);
    }

    #[test]
    fn finish_closes_everything() {
        let mut builder = TocBuilder::new();
        for h in headings(&[1, 2, 3]) {
            builder.push(&h);
        }
        let (markup, entries) = builder.finish();
        assert_eq!(markup.matches("<ul>").count(), 3);
        assert_eq!(markup.matches("</ul>").count(), 3);
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn entry_markup() {
        let mut builder = TocBuilder::new();
        builder.push(&Heading::new(1, "intro", "Intro"));
        builder.push(&Heading::new(2, "setup", "Setup"));
        let (markup, _) = builder.finish();
        assert_eq!(
            markup,
            "<ul><li><span>1  </span><a href=\"#intro\">Intro</a></li>\
             <ul><li><span>1.1  </span><a href=\"#setup\">Setup</a></li></ul></ul>"
        );
    }

    // ===========================================
    // build_toc
    // ===========================================

    #[test]
    fn no_toc_for_zero_headings() {
        let html = "<p>just text</p>\n";
        assert_eq!(build_toc(html), html);
    }

    #[test]
    fn no_toc_for_one_heading() {
        let html = "<h1 id=\"solo\">Solo</h1>\n<p>text</p>\n";
        assert_eq!(build_toc(html), html);
    }

    #[test]
    fn toc_prepended_and_body_unchanged() {
        let html = "<h2 id=\"b\">B</h2>\n<p>x</p>\n<h2 id=\"a\">A</h2>\n";
        assert_eq!(
            build_toc(html),
            "<div class=\"toc\"><h6 class=\"text-center\">Contents</h6>\
             <ul><ul><li><span>1  </span><a href=\"#b\">B</a></li>\
             <li><span>2  </span><a href=\"#a\">A</a></li></ul></ul></div>\n\
             <h2 id=\"b\">B</h2>\n<p>x</p>\n<h2 id=\"a\">A</h2>\n"
        );
    }

    #[test]
    fn bare_headings_do_not_count() {
        let html = "<h2>B</h2>\n<h2>A</h2>\n";
        assert_eq!(build_toc(html), html);
    }
}
