//! Reading and writing history files
//!
//! One entry per line, newest first. Invalid UTF-8 is decoded lossily and
//! blank lines are dropped on read; blank entries are skipped on write.

use super::error::HistoryError;
use super::{HistoryKind, HistoryList};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

const SCAN_TAG_MASKS: &[&str] = &[
    "%a - %b/%n - %t",
    "%a_-_%b/%n_-_%t",
    "%a - %b (%y)/%n - %a - %t",
    "%a - %b (%y) - %g/%n - %a - %t",
    "%a_-_%b_(%y)_-_%g/%n_-_%a_-_%t",
    "%a - %b/%n. %t",
    "%b/%n - %a - %t",
    "%n - %a - %t",
    "%n_-_%a_-_%t",
    "%n - %t",
    "%n. %t",
    "%a - %t",
];

const RENAME_FILE_MASKS: &[&str] = &[
    "%n - %a - %t",
    "%n_-_%a_-_%t",
    "%n. %a - %t",
    "%n - %t",
    "%n. %t",
    "%a - %b - %n - %t",
    "%a - %b (%y) - %n - %t",
    "%b/%n - %a - %t",
    "%a - %t",
];

/// Built-in entries of a list, used when its file yields nothing
///
/// Only the mask lists have defaults.
#[must_use]
pub fn default_entries(kind: HistoryKind) -> &'static [&'static str] {
    match kind {
        HistoryKind::ScanTagMask => SCAN_TAG_MASKS,
        HistoryKind::RenameFileMask => RENAME_FILE_MASKS,
        _ => &[],
    }
}

impl HistoryList {
    /// Parse the content of a history file
    #[must_use]
    pub fn parse(bytes: &[u8]) -> Self {
        let content = String::from_utf8_lossy(bytes);
        Self::from_entries(
            content
                .lines()
                .map(|line| line.strip_suffix('\r').unwrap_or(line))
                .filter(|line| !line.trim().is_empty()),
        )
    }

    /// Read a history file
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Io` if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        let bytes = fs::read(path).map_err(|e| HistoryError::io(path, e))?;
        Ok(Self::parse(&bytes))
    }

    /// Read the history file of `kind`, never failing
    ///
    /// An unreadable file is logged and yields an empty list. Mask lists that
    /// end up empty are filled with their built-in defaults.
    #[must_use]
    pub fn load_kind(kind: HistoryKind, path: &Path) -> Self {
        let list = Self::load(path).unwrap_or_else(|e| {
            warn!("{e}");
            Self::new()
        });

        if list.is_empty() && kind.is_mask() {
            info!("Loading default masks for '{}'", kind.file_name());
            return Self::from_entries(default_entries(kind).iter().copied());
        }
        list
    }

    /// File content: one entry per line, blank entries skipped
    #[must_use]
    pub fn to_file_string(&self) -> String {
        let mut out = String::new();
        for entry in self.iter().filter(|entry| !entry.trim().is_empty()) {
            let _ = writeln!(out, "{entry}");
        }
        out
    }

    /// Write the list to `path`
    ///
    /// An empty list leaves the file untouched.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Io` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        if self.is_empty() {
            debug!("Not saving empty history to {}", path.display());
            return Ok(());
        }

        fs::write(path, self.to_file_string()).map_err(|e| HistoryError::io(path, e))?;
        debug!("History saved to {}", path.display());
        Ok(())
    }
}
