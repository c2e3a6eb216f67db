//! Rendering of search results
//!
//! Results can be printed as highlighted text for people, or as JSON or CSV
//! for other programs. The format and the text columns come from the
//! settings, and the command line may override the format.

mod structured;
mod text;

pub use structured::{write_csv, write_json};
pub use text::{format_row, write_text};

use crate::config::{Settings, SettingEnum, keys};
use crate::search::SearchResult;
use crate::track::TagField;
use std::io::Write;
use thiserror::Error;

/// Output errors
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// How search results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One highlighted line per file
    #[default]
    Text,
    /// Array of objects with every column
    Json,
    /// Header row plus one row per file
    Csv,
}

impl SettingEnum for OutputFormat {
    const NAME: &'static str = "output format";
    const NICKS: &'static [(&'static str, Self)] = &[
        ("text", Self::Text),
        ("json", Self::Json),
        ("csv", Self::Csv),
    ];
}

/// How matched cells stand out in text output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Bold,
    Red,
}

/// Everything the renderers need besides the results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Columns printed, in order
    pub columns: Vec<TagField>,
    pub highlight: Highlight,
}

impl RenderOptions {
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let highlight = if settings.get_bool(keys::CHANGED_FILES_DISPLAYED_TO_BOLD) {
            Highlight::Bold
        } else {
            Highlight::Red
        };

        Self {
            format: settings.search_output_format(),
            columns: settings.search_result_columns(),
            highlight,
        }
    }
}

/// Write `results` to `out` in the configured format
///
/// # Errors
///
/// Returns `OutputError` if serialization or writing fails.
pub fn render<W: Write>(
    results: &[SearchResult<'_>],
    options: &RenderOptions,
    out: &mut W,
) -> Result<(), OutputError> {
    match options.format {
        OutputFormat::Text => write_text(results, &options.columns, options.highlight, out),
        OutputFormat::Json => write_json(results, out),
        OutputFormat::Csv => write_csv(results, &options.columns, out),
    }
}
