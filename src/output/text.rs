//! Human readable search results

use super::{Highlight, OutputError};
use crate::search::{SearchResult, summary};
use crate::track::TagField;
use colored::Colorize;
use std::io::Write;

const SEPARATOR: &str = " | ";

/// One result as a line of cells, matched cells highlighted
///
/// Unset tags are shown as empty cells so columns line up between rows.
#[must_use]
pub fn format_row(result: &SearchResult<'_>, columns: &[TagField], highlight: Highlight) -> String {
    columns
        .iter()
        .map(|field| {
            let value = result.display(*field).unwrap_or_default();
            if result.is_match(*field) {
                match highlight {
                    Highlight::Bold => value.bold().to_string(),
                    Highlight::Red => value.red().to_string(),
                }
            } else {
                value.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Header line, every row, then the summary line
///
/// # Errors
///
/// Returns `OutputError::Io` if writing fails.
pub fn write_text<W: Write>(
    results: &[SearchResult<'_>],
    columns: &[TagField],
    highlight: Highlight,
    out: &mut W,
) -> Result<(), OutputError> {
    if !results.is_empty() {
        let header = columns
            .iter()
            .map(|field| field.header())
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        writeln!(out, "{}", header.dimmed())?;
    }

    for result in results {
        writeln!(out, "{}", format_row(result, columns, highlight))?;
    }
    writeln!(out, "{}", summary(results.len()))?;
    Ok(())
}
