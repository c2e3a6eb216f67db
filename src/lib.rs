//! EasyTAG core - search audio files by filename and tag
//!
//! This library provides the non-graphical core of the EasyTAG tag editor:
//! an in-memory search engine over loaded audio files, the `easytagrc`
//! settings store, and the most-recently-used history files.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod history;
pub mod library;
pub mod output;
pub mod program;
pub mod search;
pub mod track;

#[cfg(test)]
pub mod testing;

pub use config::Settings;
pub use history::{HistoryKind, HistoryList};
pub use search::{SearchQuery, SearchResult, search};
pub use track::{TagField, TrackRecord};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum EasyTagError {
    /// Settings could not be read, written or updated
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
    /// A history file could not be read or written
    #[error("History error: {0}")]
    HistoryError(#[from] history::HistoryError),
    /// Audio files could not be loaded
    #[error("Library error: {0}")]
    LibraryError(#[from] library::LibraryError),
    /// An external program could not be launched
    #[error("Program error: {0}")]
    ProgramError(#[from] program::ProgramError),
    /// Search results could not be rendered
    #[error("Output error: {0}")]
    OutputError(#[from] output::OutputError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
