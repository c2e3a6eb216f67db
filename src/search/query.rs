//! Search query and the case rule used to test it

use crate::config::{Settings, keys};
use std::borrow::Cow;

/// What to look for and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    /// Test the file's basename
    pub search_filename: bool,
    /// Test the tag fields
    pub search_tags: bool,
    pub case_sensitive: bool,
}

impl SearchQuery {
    /// Query over filenames and tags, ignoring case
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            search_filename: true,
            search_tags: true,
            case_sensitive: false,
        }
    }

    /// Query using the persisted `search_in_*` and case preferences
    pub fn from_settings(text: impl Into<String>, settings: &Settings) -> Self {
        Self {
            text: text.into(),
            search_filename: settings.get_bool(keys::SEARCH_IN_FILENAME),
            search_tags: settings.get_bool(keys::SEARCH_IN_TAG),
            case_sensitive: settings.get_bool(keys::SEARCH_CASE_SENSITIVE),
        }
    }

    /// True when every file matches
    #[must_use]
    pub fn is_match_all(&self) -> bool {
        self.text.is_empty()
    }

    pub(crate) fn matcher(&self) -> Matcher {
        Matcher::new(&self.text, self.case_sensitive)
    }
}

/// Substring test with the query already folded
#[derive(Debug)]
pub(crate) struct Matcher {
    needle: String,
    case_sensitive: bool,
}

impl Matcher {
    pub(crate) fn new(text: &str, case_sensitive: bool) -> Self {
        Self {
            needle: fold(text, case_sensitive).into_owned(),
            case_sensitive,
        }
    }

    /// True if `haystack` contains the query under the case rule
    pub(crate) fn contains(&self, haystack: &str) -> bool {
        fold(haystack, self.case_sensitive).contains(self.needle.as_str())
    }

    /// Like [`Matcher::contains`], but an empty query never matches
    pub(crate) fn highlights(&self, haystack: &str) -> bool {
        !self.needle.is_empty() && self.contains(haystack)
    }
}

/// Unicode case folding, skipped for case sensitive searches
fn fold(text: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(caseless::default_case_fold_str(text))
    }
}
