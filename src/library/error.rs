//! Library-specific error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading audio files
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The directory could not be read
    #[error("Cannot read directory '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path exists but is not a directory
    #[error("Not a directory: '{}'", .0.display())]
    NotADirectory(PathBuf),
}
