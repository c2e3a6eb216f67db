//! Search command - load a directory and print the matching files

use super::{Result, Session};
use crate::cli::SearchFlags;
use crate::history::HistoryKind;
use crate::library;
use crate::output::{self, OutputFormat, RenderOptions};
use crate::search::{SearchQuery, SearchResult, search};
use crate::track::{NumberFormat, TagField, compare_folded};
use std::io::Write;
use std::path::Path;

/// Build the query from the settings, then apply the command line flags
#[must_use]
pub fn build_query(text: &str, flags: &SearchFlags, session: &Session) -> SearchQuery {
    let mut query = SearchQuery::from_settings(text, &session.settings);
    if let Some(filename) = flags.filename() {
        query.search_filename = filename;
    }
    if let Some(tags) = flags.tags() {
        query.search_tags = tags;
    }
    if let Some(case_sensitive) = flags.case_sensitive() {
        query.case_sensitive = case_sensitive;
    }
    query
}

/// Order results by the display string of `field`, ignoring case
///
/// Results without a value come first; ties keep library order.
pub fn sort_results(results: &mut [SearchResult<'_>], field: TagField) {
    results.sort_by(|a, b| compare_folded(a.display(field), b.display(field)));
}

/// Execute the search command
///
/// # Errors
///
/// Returns an error if the directory cannot be read or the output cannot
/// be written.
pub fn execute<W: Write>(
    session: &mut Session,
    dir: &Path,
    text: Option<&str>,
    flags: &SearchFlags,
    format: Option<OutputFormat>,
    recursive: bool,
    out: &mut W,
) -> Result<()> {
    let text = text.unwrap_or_default();
    let number_format = NumberFormat::from_settings(&session.settings);
    let tracks = library::scan(dir, recursive, &number_format)?;

    let query = build_query(text, flags, session);
    let mut results = search(&tracks, &query);
    if let Some(field) = flags.sort {
        sort_results(&mut results, field);
    }

    let mut options = RenderOptions::from_settings(&session.settings);
    if let Some(format) = format {
        options.format = format;
    }
    output::render(&results, &options, out)?;

    session.history(HistoryKind::SearchFile).add(text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_library;

    #[test]
    fn test_sort_results_by_title_ignoring_case() {
        let library = sample_library();
        let mut results = search(&library, &SearchQuery::new(""));

        sort_results(&mut results, TagField::Title);
        let order: Vec<usize> = results.iter().map(|result| result.index).collect();
        assert_eq!(order, [3, 0, 2, 1]);
    }

    #[test]
    fn test_sort_keeps_library_order_for_ties() {
        let library = sample_library();
        let mut results = search(&library, &SearchQuery::new(""));

        sort_results(&mut results, TagField::Composer);
        let order: Vec<usize> = results.iter().map(|result| result.index).collect();
        assert_eq!(order, [0, 1, 2, 3]);
    }
}
