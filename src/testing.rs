//! Testing utilities for easytag
//!
//! Fixtures shared by unit tests: a small in-memory library and a
//! throwaway configuration directory.
//!
//! Only available when compiled with `cfg(test)`.

use crate::config::ConfigDir;
use crate::track::TrackRecord;
use tempfile::TempDir;

/// A configuration directory inside a temporary directory
///
/// The directory itself is not created; it is removed with the wrapper.
pub struct TestConfigDir {
    _temp: TempDir,
    dir: ConfigDir,
}

impl TestConfigDir {
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temporary directory");
        let dir = ConfigDir::new(temp.path().join("easytag"));
        Self { _temp: temp, dir }
    }

    #[must_use]
    pub const fn dir(&self) -> &ConfigDir {
        &self.dir
    }
}

impl Default for TestConfigDir {
    fn default() -> Self {
        Self::new()
    }
}

/// A record with the common tags set
#[must_use]
pub fn track(filename: &str, title: &str, artist: &str, album: &str) -> TrackRecord {
    TrackRecord {
        title: Some(title.to_string()),
        artist: Some(artist.to_string()),
        album: Some(album.to_string()),
        ..TrackRecord::new(filename)
    }
}

/// Four records covering filename, tag, number and non-ASCII matches
#[must_use]
pub fn sample_library() -> Vec<TrackRecord> {
    vec![
        TrackRecord {
            track_number: Some("01".into()),
            track_total: Some("17".into()),
            year: Some("1969".into()),
            genre: Some("Rock".into()),
            ..track("/music/Beatles/01 - Come Together.mp3", "Come Together", "The Beatles", "Abbey Road")
        },
        TrackRecord {
            track_number: Some("03".into()),
            disc_number: Some("2".into()),
            disc_total: Some("2".into()),
            ..track("/music/Pink Floyd/03 - Time.flac", "Time", "Pink Floyd", "The Dark Side of the Moon")
        },
        TrackRecord {
            comment: Some("Été 1972".into()),
            ..track("/music/Misc/song.ogg", "Straße", "Kraftwerk", "Ralf und Florian")
        },
        TrackRecord::new("/music/Untagged/abcd.mp3"),
    ]
}
