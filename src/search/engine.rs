//! Linear search over loaded tracks
//!
//! Every record is tested in library order. The basename is tried first;
//! a filename match short-circuits, so the tag fields of that record are
//! neither tested nor highlighted. Otherwise the tag fields are tested and
//! any containing the query makes the record match.

use super::query::{Matcher, SearchQuery};
use crate::track::{TagField, TrackRecord};

const COLUMNS: usize = TagField::ALL.len();

/// One matched record with its display strings and highlight flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<'a> {
    /// Position of the record in the searched library
    pub index: usize,
    record: &'a TrackRecord,
    displays: [Option<String>; COLUMNS],
    matched: [bool; COLUMNS],
}

impl<'a> SearchResult<'a> {
    fn new(index: usize, record: &'a TrackRecord) -> Self {
        Self {
            index,
            record,
            displays: TagField::ALL.map(|field| record.field_display(field)),
            matched: [false; COLUMNS],
        }
    }

    /// The matched record
    #[must_use]
    pub const fn record(&self) -> &'a TrackRecord {
        self.record
    }

    /// Display string of a column, `None` when the tag is not set
    #[must_use]
    pub fn display(&self, field: TagField) -> Option<&str> {
        self.displays[field.index()].as_deref()
    }

    /// True when the column should be highlighted
    #[must_use]
    pub const fn is_match(&self, field: TagField) -> bool {
        self.matched[field.index()]
    }

    /// Columns that should be highlighted
    pub fn matched_fields(&self) -> impl Iterator<Item = TagField> + '_ {
        TagField::ALL.into_iter().filter(|field| self.is_match(*field))
    }

    fn highlight(&mut self, matcher: &Matcher, fields: &[TagField]) {
        for field in fields {
            let hit = self.displays[field.index()]
                .as_deref()
                .is_some_and(|text| matcher.highlights(text));
            self.matched[field.index()] = hit;
        }
    }
}

/// Tag values tested when searching tags
///
/// Disc and track numbers are tested in display form, and their totals on
/// their own as well.
fn tag_values(record: &TrackRecord) -> [Option<String>; 16] {
    [
        record.title.clone(),
        record.artist.clone(),
        record.album_artist.clone(),
        record.album.clone(),
        record.disc_display(),
        record.disc_total.clone(),
        record.year.clone(),
        record.track_display(),
        record.track_total.clone(),
        record.genre.clone(),
        record.comment.clone(),
        record.composer.clone(),
        record.orig_artist.clone(),
        record.copyright.clone(),
        record.url.clone(),
        record.encoded_by.clone(),
    ]
}

/// Search `library` for `query`
///
/// Results keep library order. An empty query matches every record and
/// highlights nothing.
#[must_use]
pub fn search<'a>(library: &'a [TrackRecord], query: &SearchQuery) -> Vec<SearchResult<'a>> {
    if query.is_match_all() {
        return library
            .iter()
            .enumerate()
            .map(|(index, record)| SearchResult::new(index, record))
            .collect();
    }

    let matcher = query.matcher();
    let mut results = Vec::new();

    for (index, record) in library.iter().enumerate() {
        if query.search_filename && matcher.contains(&record.basename()) {
            let mut result = SearchResult::new(index, record);
            result.highlight(&matcher, &[TagField::Filename]);
            results.push(result);
            continue;
        }

        if query.search_tags
            && tag_values(record)
                .iter()
                .flatten()
                .any(|value| matcher.contains(value))
        {
            let mut result = SearchResult::new(index, record);
            result.highlight(&matcher, &TagField::ALL);
            results.push(result);
        }
    }

    tracing::debug!("Search for '{}' matched {} files", query.text, results.len());
    results
}

/// Status line for a result count
#[must_use]
pub fn summary(count: usize) -> String {
    if count == 1 {
        "Found one file".to_string()
    } else {
        format!("Found {count} files")
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
