//! Search engine over loaded audio files
//!
//! Given a [`SearchQuery`], [`search`] scans a slice of [`TrackRecord`]s and
//! returns the matching ones as [`SearchResult`]s, in library order, each
//! annotated with the columns to highlight.
//!
//! Case-insensitive searches use Unicode case folding on both the query and
//! the searched text.
//!
//! [`TrackRecord`]: crate::track::TrackRecord

mod engine;
mod query;

pub use engine::{SearchResult, search, summary};
pub use query::SearchQuery;
