//! The settings object and the `easytagrc` file format
//!
//! The file holds one `key=value` entry per line. Only the first `=` splits a
//! line, so values may contain `=`, but never a line break. Empty lines and
//! lines starting with `#` are comments. Reading is forgiving: malformed
//! lines are logged and skipped, unknown keys are ignored, and known keys
//! missing from the file keep their compiled-in default.
//!
//! String settings that are empty are not written at all, so a value
//! explicitly set to the empty string reads back as its default.

use super::enums::{SettingEnum, flags_to_string, parse_enum, parse_flags};
use super::error::ConfigError;
use super::registry::{Choices, ConfigEntry, ConfigKind, ConfigValue, REGISTRY, keys, lookup};
use crate::output::OutputFormat;
use crate::track::TagField;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// What happened to one line of the settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// A known key was updated
    Applied,
    /// Empty line or `#` comment
    Comment,
    /// Well formed, but the key is not in the registry
    UnknownKey,
    /// No `=`, or nothing after it
    Malformed,
}

/// Application settings, one typed value per registry entry
///
/// Built once at startup, updated through the setters, and written back
/// with [`Settings::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    values: Vec<ConfigValue>,
    modified: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            values: REGISTRY.iter().map(ConfigEntry::default_value).collect(),
            modified: false,
        }
    }
}

impl Settings {
    /// Load settings from `path` on top of the defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read. Malformed lines
    /// are not errors.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut settings = Self::default();
        settings.read(path)?;
        Ok(settings)
    }

    /// Load settings from `path`, falling back to the defaults
    ///
    /// A missing or unreadable file is logged and yields the defaults.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        let mut settings = Self::default();
        if let Err(e) = settings.read(path) {
            warn!("Cannot open configuration file: {e}");
            info!("Loading default configuration");
        }
        settings
    }

    /// Apply every line of the file at `path`
    ///
    /// Returns the number of settings updated. On error nothing is changed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read.
    pub fn read(&mut self, path: &Path) -> Result<usize, ConfigError> {
        let bytes = fs::read(path).map_err(|e| ConfigError::io(path, e))?;
        let content = String::from_utf8_lossy(&bytes);
        let applied = self.apply_str(&content);
        // Loading is not a modification
        self.modified = false;
        Ok(applied)
    }

    /// Apply every line of `content`, returning the number of updates
    pub fn apply_str(&mut self, content: &str) -> usize {
        content
            .lines()
            .filter(|line| self.apply_line(line) == LineOutcome::Applied)
            .count()
    }

    /// Parse one `key=value` line into the matching setting
    pub fn apply_line(&mut self, line: &str) -> LineOutcome {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() || line.starts_with('#') {
            return LineOutcome::Comment;
        }

        let Some((key, value)) = line.split_once('=') else {
            warn!("Invalid configuration file line '{line}'");
            return LineOutcome::Malformed;
        };
        if key.is_empty() {
            warn!("Invalid configuration file line '{line}'");
            return LineOutcome::Malformed;
        }
        if value.is_empty() {
            warn!("No value for configuration key '{key}'");
            return LineOutcome::Malformed;
        }

        let Some((index, entry)) = lookup(key) else {
            debug!("Ignoring unknown configuration key '{key}'");
            return LineOutcome::UnknownKey;
        };

        self.values[index] = ConfigValue::from_file(entry.kind, value);
        self.modified = true;
        LineOutcome::Applied
    }

    /// Write every setting to `path`, creating the parent directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the directory or file cannot be written.
    pub fn save(&mut self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }

        fs::write(path, self.to_file_string()).map_err(|e| ConfigError::io(path, e))?;
        self.modified = false;
        debug!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Serialize in registry order, omitting empty strings
    #[must_use]
    pub fn to_file_string(&self) -> String {
        let mut out = String::new();
        for (entry, value) in self.iter() {
            if let Some(text) = value.to_file_value() {
                let _ = writeln!(out, "{}={text}", entry.key);
            }
        }
        out
    }

    /// True when a setter or file line changed anything since the last load or save
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    /// Every setting with its registry row, in registry order
    pub fn iter(&self) -> impl Iterator<Item = (&'static ConfigEntry, &ConfigValue)> {
        REGISTRY.iter().zip(self.values.iter())
    }

    /// Current value of `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        lookup(key).map(|(index, _)| &self.values[index])
    }

    /// Boolean value of `key`, false for unknown or non-boolean keys
    #[must_use]
    pub fn get_bool(&self, key: &str) -> bool {
        matches!(self.get(key), Some(ConfigValue::Bool(true)))
    }

    /// Integer value of `key`, 0 for unknown or non-integer keys
    #[must_use]
    pub fn get_int(&self, key: &str) -> i64 {
        match self.get(key) {
            Some(ConfigValue::Int(n)) => *n,
            _ => 0,
        }
    }

    /// String value of `key`, `None` when unknown, not a string, or empty
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(ConfigValue::Text(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Replace the value of `key`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` if `key` is not registered, or
    /// `ConfigError::InvalidValue` if the value has the wrong type or is not
    /// one of the allowed choices.
    pub fn set(&mut self, key: &str, value: ConfigValue) -> Result<(), ConfigError> {
        let (index, entry) = lookup(key).ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        if value.kind() != entry.kind {
            return Err(ConfigError::invalid(
                key,
                format!("expected {:?}, got {:?}", entry.kind, value.kind()),
            ));
        }
        if let ConfigValue::Text(text) = &value {
            if text.contains(['\n', '\r']) {
                return Err(ConfigError::invalid(key, "values cannot contain line breaks"));
            }
            validate_choices(entry, text)?;
        }

        if self.values[index] != value {
            self.values[index] = value;
            self.modified = true;
        }
        Ok(())
    }

    /// Parse `text` as the type of `key` and store it
    ///
    /// # Errors
    ///
    /// See [`Settings::set`].
    pub fn set_from_str(&mut self, key: &str, text: &str) -> Result<(), ConfigError> {
        let (_, entry) = lookup(key).ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        let value = ConfigValue::parse(key, entry.kind, text)?;
        self.set(key, value)
    }

    /// Restore the compiled-in default of `key`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` if `key` is not registered.
    pub fn reset(&mut self, key: &str) -> Result<(), ConfigError> {
        let (_, entry) = lookup(key).ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        self.set(key, entry.default_value())
    }

    pub fn set_bool(&mut self, key: &str, value: bool) -> Result<(), ConfigError> {
        self.set(key, ConfigValue::Bool(value))
    }

    pub fn set_text(&mut self, key: &str, value: impl Into<String>) -> Result<(), ConfigError> {
        self.set(key, ConfigValue::Text(value.into()))
    }

    /// Fill an unset `default_path` with the music directory, else home
    pub fn resolve_default_path(&mut self) {
        if self.get_text(keys::DEFAULT_PATH).is_some() {
            return;
        }
        let Some(dir) = dirs::audio_dir().or_else(dirs::home_dir) else {
            return;
        };
        if let Err(e) = self.set_text(keys::DEFAULT_PATH, dir.to_string_lossy()) {
            warn!("Cannot set default path: {e}");
        }
    }

    /// Command configured to play audio files
    #[must_use]
    pub fn audio_file_player(&self) -> Option<&str> {
        self.get_text(keys::AUDIO_FILE_PLAYER)
    }

    /// Output format for search results, the default when the stored nick is unknown
    #[must_use]
    pub fn search_output_format(&self) -> OutputFormat {
        let raw = self.get_text(keys::SEARCH_OUTPUT_FORMAT).unwrap_or_default();
        parse_enum(keys::SEARCH_OUTPUT_FORMAT, raw).unwrap_or_else(|e| {
            warn!("{e}");
            OutputFormat::default()
        })
    }

    /// Columns shown by text output; every column when unset or invalid
    #[must_use]
    pub fn search_result_columns(&self) -> Vec<TagField> {
        let raw = self.get_text(keys::SEARCH_RESULT_COLUMNS).unwrap_or_default();
        match parse_flags::<TagField>(keys::SEARCH_RESULT_COLUMNS, raw) {
            Ok(columns) if !columns.is_empty() => columns,
            Ok(_) => TagField::ALL.to_vec(),
            Err(e) => {
                warn!("{e}");
                TagField::ALL.to_vec()
            }
        }
    }

    /// Store the text output columns
    ///
    /// # Errors
    ///
    /// Never fails for valid columns; see [`Settings::set`].
    pub fn set_search_result_columns(&mut self, columns: &[TagField]) -> Result<(), ConfigError> {
        self.set_text(keys::SEARCH_RESULT_COLUMNS, flags_to_string(columns))
    }

    /// Store the search output format
    ///
    /// # Errors
    ///
    /// Never fails; see [`Settings::set`].
    pub fn set_search_output_format(&mut self, format: OutputFormat) -> Result<(), ConfigError> {
        self.set_text(keys::SEARCH_OUTPUT_FORMAT, format.nick())
    }
}

fn validate_choices(entry: &ConfigEntry, text: &str) -> Result<(), ConfigError> {
    match (entry.key, entry.choices) {
        (_, Choices::Free) => Ok(()),
        (keys::SEARCH_OUTPUT_FORMAT, Choices::Enum) => {
            parse_enum::<OutputFormat>(entry.key, text).map(|_| ())
        }
        (keys::SEARCH_RESULT_COLUMNS, Choices::Flags) => {
            parse_flags::<TagField>(entry.key, text).map(|_| ())
        }
        (key, choices) => Err(ConfigError::invalid(
            key,
            format!("no lookup table for {choices:?} setting"),
        )),
    }
}

impl ConfigKind {
    /// Name shown in listings
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Text => "string",
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
