//! Lookup tables for enum and flags valued settings
//!
//! Such settings are stored as plain strings in `easytagrc`. Each enum that
//! can appear in a setting lists its nicks once, at compile time, through
//! [`SettingEnum`]; flags are a comma separated list of nicks.

use super::error::ConfigError;

/// An enum whose variants have stable string nicks
pub trait SettingEnum: Copy + PartialEq + Sized + 'static {
    /// Name used in error messages
    const NAME: &'static str;
    /// Every variant with its nick, in canonical order
    const NICKS: &'static [(&'static str, Self)];

    /// Look up a variant by nick
    #[must_use]
    fn from_nick(nick: &str) -> Option<Self> {
        Self::NICKS
            .iter()
            .find(|(name, _)| *name == nick)
            .map(|(_, value)| *value)
    }

    /// Nick of this variant
    #[must_use]
    fn nick(self) -> &'static str {
        Self::NICKS
            .iter()
            .find(|(_, value)| *value == self)
            .map_or("", |(name, _)| name)
    }
}

/// Parse an enum setting value
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if `value` is not one of the nicks.
pub fn parse_enum<T: SettingEnum>(key: &str, value: &str) -> Result<T, ConfigError> {
    T::from_nick(value.trim()).ok_or_else(|| {
        ConfigError::invalid(
            key,
            format!("unknown {} '{}', expected one of: {}", T::NAME, value.trim(), nick_list::<T>()),
        )
    })
}

/// Parse a flags setting value
///
/// Pieces are trimmed, empty pieces ignored, duplicates collapsed, and the
/// result is returned in the table's canonical order.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if any piece is not one of the nicks.
pub fn parse_flags<T: SettingEnum>(key: &str, value: &str) -> Result<Vec<T>, ConfigError> {
    let mut selected = Vec::new();
    for piece in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        selected.push(parse_enum::<T>(key, piece)?);
    }

    Ok(T::NICKS
        .iter()
        .map(|(_, value)| *value)
        .filter(|value| selected.contains(value))
        .collect())
}

/// Serialize flags in canonical order
#[must_use]
pub fn flags_to_string<T: SettingEnum>(flags: &[T]) -> String {
    T::NICKS
        .iter()
        .filter(|(_, value)| flags.contains(value))
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(",")
}

fn nick_list<T: SettingEnum>() -> String {
    T::NICKS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}
