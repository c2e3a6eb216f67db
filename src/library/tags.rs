//! Mapping of `lofty` tag items onto [`TrackRecord`] fields

use crate::track::{NumberFormat, TrackRecord};
use lofty::prelude::{AudioFile, ItemKey, TaggedFileExt};
use std::path::Path;

/// Read the tags of `path` into a record
///
/// Files `lofty` cannot parse yield a record with only the filename.
pub fn read_track(path: &Path, format: &NumberFormat, current_year: i32) -> TrackRecord {
    let mut record = TrackRecord::new(path.to_string_lossy());

    let tagged = match lofty::read_from_path(path) {
        Ok(tagged) => tagged,
        Err(e) => {
            tracing::debug!("Cannot read tags of '{}': {e}", path.display());
            return record;
        }
    };

    let duration = tagged.properties().duration().as_secs();
    if duration > 0 {
        record.duration_secs = Some(duration);
    }

    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        fill_record(
            &mut record,
            |key| tag.get_string(&key).map(str::to_string),
            format,
            current_year,
        );
    }
    record
}

/// Copy tag values into `record`
///
/// Track and disc numbers stored as `"N/T"` are split into number and
/// total, and all numbers are re-padded per `format`.
pub(crate) fn fill_record<F>(record: &mut TrackRecord, get: F, format: &NumberFormat, current_year: i32)
where
    F: Fn(ItemKey) -> Option<String>,
{
    record.title = get(ItemKey::TrackTitle);
    record.artist = get(ItemKey::TrackArtist);
    record.album_artist = get(ItemKey::AlbumArtist);
    record.album = get(ItemKey::AlbumTitle);
    record.genre = get(ItemKey::Genre);
    record.comment = get(ItemKey::Comment);
    record.composer = get(ItemKey::Composer);
    record.orig_artist = get(ItemKey::OriginalArtist);
    record.copyright = get(ItemKey::CopyrightMessage);
    record.url = get(ItemKey::AudioFileUrl);
    record.encoded_by = get(ItemKey::EncodedBy);

    record.year = get(ItemKey::Year)
        .or_else(|| get(ItemKey::RecordingDate))
        .map(|raw| {
            let year = raw.split('-').next().unwrap_or(&raw).trim().to_string();
            format.year(&year, current_year)
        });

    let (track, track_total) = split_total(get(ItemKey::TrackNumber), get(ItemKey::TrackTotal));
    record.track_number = track.map(|n| format.normalize_track(&n));
    record.track_total = track_total.map(|n| format.normalize_track(&n));

    let (disc, disc_total) = split_total(get(ItemKey::DiscNumber), get(ItemKey::DiscTotal));
    record.disc_number = disc.map(|n| format.normalize_disc(&n));
    record.disc_total = disc_total.map(|n| format.normalize_disc(&n));
}

fn split_total(number: Option<String>, total: Option<String>) -> (Option<String>, Option<String>) {
    match number {
        Some(raw) => match raw.split_once('/') {
            Some((n, t)) => {
                let t = t.trim();
                let embedded = (!t.is_empty()).then(|| t.to_string());
                (Some(n.trim().to_string()), total.or(embedded))
            }
            None => (Some(raw), total),
        },
        None => (None, total),
    }
}
