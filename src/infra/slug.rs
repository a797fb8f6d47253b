//! Title canonicalization for page and category keys.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Articles, short conjunctions and pronouns kept verbatim after `&`.
const MINOR_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "be", "by", "but", "for", "from", "he", "her", "his", "in",
    "it", "its", "my", "of", "on", "or", "our", "such", "that", "the", "their", "them", "there",
    "to", "was", "we", "were", "what", "where", "which", "who", "will", "with", "would", "you",
    "your",
];

/// Prepositions kept verbatim after `&`.
const PREPOSITIONS: &[&str] = &[
    "after", "against", "at", "before", "behind", "below", "beside", "between", "by", "despite",
    "during", "for", "from", "in", "into", "near", "of", "off", "on", "onto", "out", "over",
    "since", "through", "to", "under", "until", "upon", "with", "within", "without",
];

/// `&word` at the start of a whitespace-delimited token.
///
/// The word stops at `_`: title casing already treats `_` as a word break.
static AMPERSAND_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\s)&([^\W_]+)").expect("valid ampersand regex"));

/// Converts a free-form title into its canonical, storage-stable form.
///
/// - Capitalizes each word (words split on whitespace and underscores),
///   lowercasing the rest of the word
/// - Rewrites `&word` to `Andword` unless `word` is a minor word or preposition
/// - Strips apostrophes at either end
/// - Replaces whitespace runs with a single underscore
/// - Keeps only alphanumerics, underscores, hyphens, and apostrophes
///
/// Empty or all-punctuation input yields an empty string. The function is
/// idempotent: canonicalizing a canonical title returns it unchanged.
///
/// # Examples
///
/// ```
/// use arcwiki::infra::canonicalize;
///
/// assert_eq!(canonicalize("hello world"), "Hello_World");
/// assert_eq!(canonicalize("rock &roll"), "Rock_Androll");
/// assert_eq!(canonicalize("Hello_World"), "Hello_World");
/// assert_eq!(canonicalize(""), "");
/// ```
pub fn canonicalize(text: &str) -> String {
    let titled = title_case(text);
    let expanded = expand_ampersands(&titled);
    let trimmed = expanded.trim_matches('\'');
    let underscored = collapse_whitespace(trimmed);

    let filtered: String = underscored
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '\''))
        .collect();

    // Dropping punctuation can expose apostrophes at the edges again
    filtered.trim_matches('\'').to_string()
}

/// Renders a canonical title for display by turning underscores back into spaces.
///
/// # Examples
///
/// ```
/// use arcwiki::infra::display_title;
///
/// assert_eq!(display_title("Getting_Started"), "Getting Started");
/// ```
pub fn display_title(title: &str) -> String {
    title.replace('_', " ")
}

fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_whitespace() || c == '_' {
            result.push(c);
            at_word_start = true;
            continue;
        }

        if at_word_start && c.is_alphanumeric() {
            push_upper(&mut result, c);
            at_word_start = false;
        } else if at_word_start {
            // Leading punctuation such as `'` or `&` does not start the word
            result.push(c);
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

/// Pushes the uppercase form of `c`, keeping `c` when it has no single-char uppercase.
fn push_upper(out: &mut String, c: char) {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => out.push(u),
        _ => out.push(c),
    }
}

fn expand_ampersands(text: &str) -> String {
    AMPERSAND_TOKEN
        .replace_all(text, |caps: &Captures| {
            let lead = &caps[1];
            let word = &caps[2];
            let lower = word.to_lowercase();
            if is_minor_word(&lower) || is_preposition(&lower) {
                format!("{lead}&{word}")
            } else {
                format!("{lead}And{lower}")
            }
        })
        .into_owned()
}

fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                result.push('_');
            }
            in_whitespace = true;
        } else {
            result.push(c);
            in_whitespace = false;
        }
    }
    result
}

fn is_minor_word(word: &str) -> bool {
    MINOR_WORDS.contains(&word)
}

fn is_preposition(word: &str) -> bool {
    PREPOSITIONS.contains(&word)
}
