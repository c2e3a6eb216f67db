//! The fixed registry of known settings
//!
//! Every key `easytagrc` may contain is listed here once, with its type and
//! compiled-in default. The registry order is the order keys are written in.

use super::error::ConfigError;
use serde::Serialize;
use std::fmt;

/// Setting keys, so callers never spell them twice
pub mod keys {
    pub const AUDIO_FILE_PLAYER: &str = "audio_file_player";
    pub const DEFAULT_PATH: &str = "default_path";
    pub const SEARCH_IN_FILENAME: &str = "search_in_filename";
    pub const SEARCH_IN_TAG: &str = "search_in_tag";
    pub const SEARCH_CASE_SENSITIVE: &str = "search_case_sensitive";
    pub const CHANGED_FILES_DISPLAYED_TO_BOLD: &str = "changed_files_displayed_to_bold";
    pub const NUMBER_TRACK_FORMATED: &str = "number_track_formated";
    pub const NUMBER_TRACK_FORMATED_SPIN_BUTTON: &str = "number_track_formated_spin_button";
    pub const PAD_DISC_NUMBER: &str = "pad_disc_number";
    pub const PAD_DISC_NUMBER_DIGITS: &str = "pad_disc_number_digits";
    pub const DATE_AUTO_COMPLETION: &str = "date_auto_completion";
    pub const SEARCH_OUTPUT_FORMAT: &str = "search_output_format";
    pub const SEARCH_RESULT_COLUMNS: &str = "search_result_columns";
}

const DEFAULT_AUDIO_PLAYER: &str = if cfg!(target_os = "macos") {
    "open"
} else {
    "xdg-open"
};

/// Storage type of a setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    Int,
    Bool,
    Text,
}

/// What a string setting may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choices {
    /// Any text
    Free,
    /// One nick of an enum table
    Enum,
    /// Comma separated nicks of an enum table
    Flags,
}

/// One registry row
#[derive(Debug)]
pub struct ConfigEntry {
    pub key: &'static str,
    pub kind: ConfigKind,
    pub choices: Choices,
    /// Default in file syntax, parsed like a value read from disk
    pub default: &'static str,
    pub description: &'static str,
}

impl ConfigEntry {
    const fn int(key: &'static str, default: &'static str, description: &'static str) -> Self {
        Self { key, kind: ConfigKind::Int, choices: Choices::Free, default, description }
    }

    const fn bool(key: &'static str, default: &'static str, description: &'static str) -> Self {
        Self { key, kind: ConfigKind::Bool, choices: Choices::Free, default, description }
    }

    const fn text(
        key: &'static str,
        choices: Choices,
        default: &'static str,
        description: &'static str,
    ) -> Self {
        Self { key, kind: ConfigKind::Text, choices, default, description }
    }

    /// Compiled-in default value
    #[must_use]
    pub fn default_value(&self) -> ConfigValue {
        ConfigValue::from_file(self.kind, self.default)
    }
}

/// Every known setting, in save order
pub static REGISTRY: &[ConfigEntry] = &[
    ConfigEntry::text(
        keys::AUDIO_FILE_PLAYER,
        Choices::Free,
        DEFAULT_AUDIO_PLAYER,
        "Command used to play audio files",
    ),
    ConfigEntry::text(keys::DEFAULT_PATH, Choices::Free, "", "Directory browsed by default"),
    ConfigEntry::bool(keys::SEARCH_IN_FILENAME, "1", "Search in file names"),
    ConfigEntry::bool(keys::SEARCH_IN_TAG, "1", "Search in tags"),
    ConfigEntry::bool(keys::SEARCH_CASE_SENSITIVE, "0", "Case sensitive search"),
    ConfigEntry::bool(
        keys::CHANGED_FILES_DISPLAYED_TO_BOLD,
        "1",
        "Highlight matches in bold instead of red",
    ),
    ConfigEntry::bool(keys::NUMBER_TRACK_FORMATED, "1", "Zero pad track numbers"),
    ConfigEntry::int(keys::NUMBER_TRACK_FORMATED_SPIN_BUTTON, "2", "Digits of padded track numbers"),
    ConfigEntry::bool(keys::PAD_DISC_NUMBER, "1", "Zero pad disc numbers"),
    ConfigEntry::int(keys::PAD_DISC_NUMBER_DIGITS, "1", "Digits of padded disc numbers"),
    ConfigEntry::bool(keys::DATE_AUTO_COMPLETION, "1", "Complete years typed with fewer than four digits"),
    ConfigEntry::text(keys::SEARCH_OUTPUT_FORMAT, Choices::Enum, "text", "Search output: text, json or csv"),
    ConfigEntry::text(
        keys::SEARCH_RESULT_COLUMNS,
        Choices::Flags,
        "filename,title,artist,album_artist,album,disc_number,year,track,genre,comment,composer,orig_artist,copyright,url,encoded_by",
        "Columns shown by text search output",
    ),
];

/// Find a registry row and its position
#[must_use]
pub fn lookup(key: &str) -> Option<(usize, &'static ConfigEntry)> {
    REGISTRY.iter().enumerate().find(|(_, entry)| entry.key == key)
}

/// A typed setting value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Int(i64),
    Bool(bool),
    Text(String),
}

impl ConfigValue {
    /// Coerce text read from the settings file
    ///
    /// Numbers follow parse-or-zero semantics: leading digits are used and
    /// anything unparsable reads as 0. Booleans are non-zero integers.
    #[must_use]
    pub fn from_file(kind: ConfigKind, text: &str) -> Self {
        match kind {
            ConfigKind::Int => Self::Int(leading_int(text)),
            ConfigKind::Bool => Self::Bool(leading_int(text) != 0),
            ConfigKind::Text => Self::Text(text.to_string()),
        }
    }

    /// Parse a value typed by the user, rejecting anything ambiguous
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `text` is not a valid `kind`.
    pub fn parse(key: &str, kind: ConfigKind, text: &str) -> Result<Self, ConfigError> {
        match kind {
            ConfigKind::Int => text
                .trim()
                .parse::<i64>()
                .map(Self::Int)
                .map_err(|e| ConfigError::invalid(key, format!("expected an integer ({e})"))),
            ConfigKind::Bool => match text.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(Self::Bool(true)),
                "0" | "false" | "no" | "off" => Ok(Self::Bool(false)),
                other => Err(ConfigError::invalid(
                    key,
                    format!("expected 0 or 1, got '{other}'"),
                )),
            },
            ConfigKind::Text => Ok(Self::Text(text.to_string())),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ConfigKind {
        match self {
            Self::Int(_) => ConfigKind::Int,
            Self::Bool(_) => ConfigKind::Bool,
            Self::Text(_) => ConfigKind::Text,
        }
    }

    /// Value as written to the settings file, `None` when it is omitted
    #[must_use]
    pub fn to_file_value(&self) -> Option<String> {
        match self {
            Self::Int(n) => Some(n.to_string()),
            Self::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
            Self::Text(s) if s.is_empty() => None,
            Self::Text(s) => Some(s.clone()),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{}", if *b { 1 } else { 0 }),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Base-10 integer prefix of `text`, or 0
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit. Values out of range saturate.
fn leading_int(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }

    if negative { value.saturating_neg() } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_keys_are_unique() {
        for (i, entry) in REGISTRY.iter().enumerate() {
            assert_eq!(lookup(entry.key).map(|(pos, _)| pos), Some(i));
        }
    }

    #[test]
    fn test_defaults_match_kinds() {
        for entry in REGISTRY {
            assert_eq!(entry.default_value().kind(), entry.kind, "{}", entry.key);
        }
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("42"), 42);
        assert_eq!(leading_int("  -7"), -7);
        assert_eq!(leading_int("+3"), 3);
        assert_eq!(leading_int("12abc"), 12);
        assert_eq!(leading_int("abc"), 0);
        assert_eq!(leading_int(""), 0);
        assert_eq!(leading_int("-"), 0);
        assert_eq!(leading_int("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_from_file_bool() {
        assert_eq!(ConfigValue::from_file(ConfigKind::Bool, "1"), ConfigValue::Bool(true));
        assert_eq!(ConfigValue::from_file(ConfigKind::Bool, "0"), ConfigValue::Bool(false));
        assert_eq!(ConfigValue::from_file(ConfigKind::Bool, "2"), ConfigValue::Bool(true));
        assert_eq!(ConfigValue::from_file(ConfigKind::Bool, "yes"), ConfigValue::Bool(false));
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!(
            ConfigValue::parse("k", ConfigKind::Bool, "true").unwrap(),
            ConfigValue::Bool(true)
        );
        assert!(ConfigValue::parse("k", ConfigKind::Bool, "maybe").is_err());
        assert!(ConfigValue::parse("k", ConfigKind::Int, "12abc").is_err());
    }

    #[test]
    fn test_to_file_value() {
        assert_eq!(ConfigValue::Bool(true).to_file_value().as_deref(), Some("1"));
        assert_eq!(ConfigValue::Int(-3).to_file_value().as_deref(), Some("-3"));
        assert_eq!(ConfigValue::Text(String::new()).to_file_value(), None);
        assert_eq!(
            ConfigValue::Text("a=b".into()).to_file_value().as_deref(),
            Some("a=b")
        );
    }
}
