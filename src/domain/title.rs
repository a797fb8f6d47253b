//! Canonical title type for pages and categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::infra::{canonicalize, display_title};

/// A canonicalized page or category title.
///
/// Titles are the unique storage key and the URL path segment, so every
/// title entering the store goes through [`canonicalize`] first.
///
/// # Validation Rules
/// - At least one letter or digit after canonicalization
///
/// # Examples
///
/// ```
/// use arcwiki::domain::CanonicalTitle;
///
/// let title = CanonicalTitle::new("getting started").unwrap();
/// assert_eq!(title.as_str(), "Getting_Started");
/// assert_eq!(title.display(), "Getting Started");
///
/// assert!(CanonicalTitle::new("!!!").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalTitle(String);

/// Error returned when a title canonicalizes to nothing usable.
#[derive(Debug, Clone)]
pub struct ParseTitleError(String);

impl fmt::Display for ParseTitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTitleError {}

impl CanonicalTitle {
    /// Canonicalizes `raw` and wraps the result.
    ///
    /// # Errors
    ///
    /// Returns `ParseTitleError` if the canonical form has no letters or digits.
    pub fn new(raw: &str) -> Result<Self, ParseTitleError> {
        let canonical = canonicalize(raw);
        if !canonical.chars().any(char::is_alphanumeric) {
            return Err(ParseTitleError(format!(
                "invalid title '{}': no letters or digits left after canonicalization",
                raw
            )));
        }
        Ok(Self(canonical))
    }

    /// Wraps a title read back from storage without re-canonicalizing it.
    pub(crate) fn from_stored(stored: String) -> Self {
        Self(stored)
    }

    /// Returns the canonical title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the human-facing form with underscores shown as spaces.
    pub fn display(&self) -> String {
        display_title(&self.0)
    }
}

impl fmt::Display for CanonicalTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for CanonicalTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CanonicalTitle(\"{}\")", self.0)
    }
}

impl FromStr for CanonicalTitle {
    type Err = ParseTitleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CanonicalTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for CanonicalTitle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CanonicalTitle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}
