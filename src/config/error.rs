//! Configuration-specific error types
//!
//! Reading the settings file is tolerant: malformed lines and unknown keys
//! are logged and skipped, so only failures to touch the file itself and
//! invalid explicit updates surface as errors.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file or directory could not be read or written
    #[error("Cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No per-user configuration directory exists on this platform
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// The key is not part of the settings registry
    #[error("Unknown configuration key: '{0}'")]
    UnknownKey(String),

    /// The value does not fit the key's type or choices
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
