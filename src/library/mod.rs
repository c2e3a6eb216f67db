//! Loading audio files into [`TrackRecord`]s
//!
//! [`scan`] walks a directory, keeps the files with a known audio extension
//! and reads their tags. The resulting records are sorted by path; their
//! position in the returned vector is the identity used by search results.

mod error;
mod tags;

pub use error::LibraryError;
pub use tags::read_track;

use crate::track::{NumberFormat, TrackRecord};
use chrono::{Datelike, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// File extensions treated as audio files, lowercase
pub const AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "mp2", "ogg", "oga", "opus", "flac", "m4a", "mp4", "aac", "wv", "ape", "mpc", "spx",
];

/// True if `path` has one of [`AUDIO_EXTENSIONS`], ignoring case
#[must_use]
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            AUDIO_EXTENSIONS.contains(&ext.as_str())
        })
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// Paths of the audio files below `dir`, sorted
///
/// Hidden files and directories are skipped. Without `recursive` only the
/// files directly inside `dir` are returned.
///
/// # Errors
///
/// Returns `LibraryError::Io` if `dir` cannot be read, or
/// `LibraryError::NotADirectory` if it is a file.
pub fn audio_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, LibraryError> {
    let metadata = fs::metadata(dir).map_err(|source| LibraryError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(LibraryError::NotADirectory(dir.to_path_buf()));
    }

    let mut walker = WalkDir::new(dir);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_audio_file(entry.path()))
        .map(walkdir::DirEntry::into_path)
        .collect();

    files.sort();
    Ok(files)
}

/// Load every audio file below `dir`
///
/// # Errors
///
/// See [`audio_files`].
pub fn scan(dir: &Path, recursive: bool, format: &NumberFormat) -> Result<Vec<TrackRecord>, LibraryError> {
    let current_year = Local::now().year();
    let files = audio_files(dir, recursive)?;
    debug!("Loading {} audio files from {}", files.len(), dir.display());

    Ok(files
        .iter()
        .map(|path| read_track(path, format, current_year))
        .collect())
}
