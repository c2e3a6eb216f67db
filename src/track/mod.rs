//! In-memory representation of a loaded audio file
//!
//! A [`TrackRecord`] holds the display path of one audio file together with
//! the tag fields EasyTAG knows about. Every tag is optional: `None` means
//! the tag is not set, which is distinct from a tag set to the empty string.
//!
//! [`TagField`] names the columns shown for a search result, in display
//! order. Disc and track numbers are shown combined with their totals
//! (`"N"` or `"N/T"`), so the totals have no column of their own.

pub mod format;

pub use format::{NumberFormat, compare_folded, complete_year, format_duration};

use crate::config::SettingEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One audio file's path and parsed tag fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// Display path of the file
    pub filename: String,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album_artist: Option<String>,
    pub album: Option<String>,
    pub disc_number: Option<String>,
    pub disc_total: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub comment: Option<String>,
    pub composer: Option<String>,
    pub orig_artist: Option<String>,
    pub copyright: Option<String>,
    pub url: Option<String>,
    pub encoded_by: Option<String>,
    pub track_number: Option<String>,
    pub track_total: Option<String>,
    /// Playing time in whole seconds, when the audio properties could be read
    #[serde(default)]
    pub duration_secs: Option<u64>,
}

impl TrackRecord {
    /// Create a record for `filename` with no tags set
    #[must_use]
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    /// Last component of the display path
    ///
    /// Falls back to the whole display path when it has no final component
    /// (for example `/` or an empty string).
    #[must_use]
    pub fn basename(&self) -> String {
        Path::new(&self.filename)
            .file_name()
            .map_or_else(|| self.filename.clone(), |name| name.to_string_lossy().into_owned())
    }

    /// Disc number as displayed: `"N"`, or `"N/T"` when a total is set
    #[must_use]
    pub fn disc_display(&self) -> Option<String> {
        with_total(self.disc_number.as_deref(), self.disc_total.as_deref())
    }

    /// Track number as displayed: `"N"`, or `"N/T"` when a total is set
    #[must_use]
    pub fn track_display(&self) -> Option<String> {
        with_total(self.track_number.as_deref(), self.track_total.as_deref())
    }

    /// Display string of one result column, `None` when the tag is not set
    #[must_use]
    pub fn field_display(&self, field: TagField) -> Option<String> {
        match field {
            TagField::Filename => Some(self.basename()),
            TagField::Title => self.title.clone(),
            TagField::Artist => self.artist.clone(),
            TagField::AlbumArtist => self.album_artist.clone(),
            TagField::Album => self.album.clone(),
            TagField::DiscNumber => self.disc_display(),
            TagField::Year => self.year.clone(),
            TagField::Track => self.track_display(),
            TagField::Genre => self.genre.clone(),
            TagField::Comment => self.comment.clone(),
            TagField::Composer => self.composer.clone(),
            TagField::OrigArtist => self.orig_artist.clone(),
            TagField::Copyright => self.copyright.clone(),
            TagField::Url => self.url.clone(),
            TagField::EncodedBy => self.encoded_by.clone(),
        }
    }
}

fn with_total(number: Option<&str>, total: Option<&str>) -> Option<String> {
    let number = number?;
    Some(match total {
        Some(total) => format!("{number}/{total}"),
        None => number.to_string(),
    })
}

/// Result columns, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagField {
    Filename,
    Title,
    Artist,
    AlbumArtist,
    Album,
    DiscNumber,
    Year,
    Track,
    Genre,
    Comment,
    Composer,
    OrigArtist,
    Copyright,
    Url,
    EncodedBy,
}

impl TagField {
    /// Every column, in display order
    pub const ALL: [Self; 15] = [
        Self::Filename,
        Self::Title,
        Self::Artist,
        Self::AlbumArtist,
        Self::Album,
        Self::DiscNumber,
        Self::Year,
        Self::Track,
        Self::Genre,
        Self::Comment,
        Self::Composer,
        Self::OrigArtist,
        Self::Copyright,
        Self::Url,
        Self::EncodedBy,
    ];

    /// Position of the column in [`TagField::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column header shown to the user
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Filename => "File Name",
            Self::Title => "Title",
            Self::Artist => "Artist",
            Self::AlbumArtist => "Album Artist",
            Self::Album => "Album",
            Self::DiscNumber => "CD",
            Self::Year => "Year",
            Self::Track => "Track",
            Self::Genre => "Genre",
            Self::Comment => "Comment",
            Self::Composer => "Composer",
            Self::OrigArtist => "Original Artist",
            Self::Copyright => "Copyright",
            Self::Url => "URL",
            Self::EncodedBy => "Encoded By",
        }
    }
}

impl SettingEnum for TagField {
    const NAME: &'static str = "column";
    const NICKS: &'static [(&'static str, Self)] = &[
        ("filename", Self::Filename),
        ("title", Self::Title),
        ("artist", Self::Artist),
        ("album_artist", Self::AlbumArtist),
        ("album", Self::Album),
        ("disc_number", Self::DiscNumber),
        ("year", Self::Year),
        ("track", Self::Track),
        ("genre", Self::Genre),
        ("comment", Self::Comment),
        ("composer", Self::Composer),
        ("orig_artist", Self::OrigArtist),
        ("copyright", Self::Copyright),
        ("url", Self::Url),
        ("encoded_by", Self::EncodedBy),
    ];
}
