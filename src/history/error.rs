//! History-specific error types

use std::path::PathBuf;
use thiserror::Error;

/// History file errors
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The history file could not be read or written
    #[error("Cannot access history file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No history list has this name
    #[error("Unknown history list: '{0}'")]
    UnknownKind(String),
}

impl HistoryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
