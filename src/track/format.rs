//! Formatting helpers for tag values
//!
//! Track and disc numbers are optionally zero padded, durations are shown as
//! `M:SS` or `H:MM:SS`, and short years typed by the user can be completed to
//! four digits relative to the current year.

use crate::config::{Settings, keys};
use std::cmp::Ordering;

/// Widest zero padding applied to track and disc numbers
pub const MAX_PAD_DIGITS: usize = 6;

/// How numeric tag values are normalized when a file is loaded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberFormat {
    /// Minimum digits for track numbers, `None` to keep them unpadded
    pub track_digits: Option<usize>,
    /// Minimum digits for disc numbers, `None` to keep them unpadded
    pub disc_digits: Option<usize>,
    /// Complete 1 to 3 digit years to four digits
    pub complete_years: bool,
}

impl NumberFormat {
    /// Read the padding and year completion preferences from `settings`
    ///
    /// Digit counts are clamped to `1..=MAX_PAD_DIGITS`.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let digits = |enabled: &str, count: &str| {
            settings.get_bool(enabled).then(|| {
                usize::try_from(settings.get_int(count))
                    .unwrap_or(1)
                    .clamp(1, MAX_PAD_DIGITS)
            })
        };

        Self {
            track_digits: digits(keys::NUMBER_TRACK_FORMATED, keys::NUMBER_TRACK_FORMATED_SPIN_BUTTON),
            disc_digits: digits(keys::PAD_DISC_NUMBER, keys::PAD_DISC_NUMBER_DIGITS),
            complete_years: settings.get_bool(keys::DATE_AUTO_COMPLETION),
        }
    }

    /// Format a track number
    #[must_use]
    pub fn track(&self, number: u32) -> String {
        pad(number, self.track_digits)
    }

    /// Format a disc number
    #[must_use]
    pub fn disc(&self, number: u32) -> String {
        pad(number, self.disc_digits)
    }

    /// Re-pad a raw track or total value; non-numeric text is kept as is
    #[must_use]
    pub fn normalize_track(&self, raw: &str) -> String {
        raw.trim().parse::<u32>().map_or_else(|_| raw.to_string(), |n| self.track(n))
    }

    /// Re-pad a raw disc or total value; non-numeric text is kept as is
    #[must_use]
    pub fn normalize_disc(&self, raw: &str) -> String {
        raw.trim().parse::<u32>().map_or_else(|_| raw.to_string(), |n| self.disc(n))
    }

    /// Complete a short year when year completion is enabled
    #[must_use]
    pub fn year(&self, raw: &str, current_year: i32) -> String {
        if self.complete_years {
            complete_year(raw, current_year)
        } else {
            raw.to_string()
        }
    }
}

fn pad(number: u32, digits: Option<usize>) -> String {
    match digits {
        Some(width) => format!("{number:0width$}"),
        None => number.to_string(),
    }
}

/// Convert a number of seconds into a readable duration
///
/// ```
/// use easytag::track::format_duration;
///
/// assert_eq!(format_duration(0), "0:00");
/// assert_eq!(format_duration(245), "4:05");
/// assert_eq!(format_duration(3725), "1:02:05");
/// ```
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Complete a year of fewer than four digits
///
/// The result is the most recent year, not after `current_year`, whose last
/// digits are `input`. Empty, non-numeric and four-digit input is returned
/// unchanged.
///
/// ```
/// use easytag::track::complete_year;
///
/// assert_eq!(complete_year("5", 2026), "2025");
/// assert_eq!(complete_year("27", 2026), "1927");
/// assert_eq!(complete_year("1999", 2026), "1999");
/// ```
#[must_use]
pub fn complete_year(input: &str, current_year: i32) -> String {
    let digits = input.len();
    if digits == 0 || digits >= 4 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return input.to_string();
    }
    let Ok(typed) = input.parse::<i32>() else {
        return input.to_string();
    };

    // digits is 1..=3 here, so the power fits
    let modulus = 10_i32.pow(u32::try_from(digits).unwrap_or(3));
    let suffix = current_year.rem_euclid(modulus);
    let base = current_year - suffix;

    if typed <= suffix {
        (base + typed).to_string()
    } else {
        (base - modulus + typed).to_string()
    }
}

/// Caseless ordering for alphabetic sorting of string lists
///
/// Missing values sort first.
#[must_use]
pub fn compare_folded(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => caseless::default_case_fold_str(a)
            .cmp(&caseless::default_case_fold_str(b))
            .then_with(|| a.cmp(b)),
    }
}
