//! Location of the settings and history files
//!
//! All files live in one per-user directory, `<config dir>/easytag`. Older
//! releases kept them in `~/.easytag`; the first time the new directory is
//! created, files found in the legacy directory are moved over.

use super::error::ConfigError;
use crate::history::HistoryKind;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Name of the settings file
pub const CONFIG_FILE: &str = "easytagrc";

const APP_DIR: &str = "easytag";
const LEGACY_DIR: &str = ".easytag";

/// The directory holding `easytagrc` and the history files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDir {
    root: PathBuf,
}

impl ConfigDir {
    /// Use `root` as the configuration directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The per-user configuration directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if the platform has none.
    pub fn user() -> Result<Self, ConfigError> {
        dirs::config_dir()
            .map(|dir| Self::new(dir.join(APP_DIR)))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Directory used by older releases, `~/.easytag`
    #[must_use]
    pub fn legacy() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(LEGACY_DIR))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Path of `easytagrc`
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Path of one history file
    #[must_use]
    pub fn history_file(&self, kind: HistoryKind) -> PathBuf {
        self.root.join(kind.file_name())
    }

    /// Create the directory if needed
    ///
    /// When the directory did not exist and `legacy` names an existing
    /// directory, the known files are migrated from it. Returns true if the
    /// directory was created by this call.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the directory cannot be created.
    pub fn ensure(&self, legacy: Option<&Path>) -> Result<bool, ConfigError> {
        if self.root.is_dir() {
            return Ok(false);
        }

        fs::create_dir_all(&self.root).map_err(|e| ConfigError::io(&self.root, e))?;

        if let Some(old) = legacy
            && old.is_dir()
        {
            migrate(old, &self.root);
        }
        Ok(true)
    }

    /// Create the directory and any missing history file
    ///
    /// Existing files are left untouched; a history file that cannot be
    /// created is logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the directory cannot be created.
    pub fn create_files(&self, legacy: Option<&Path>) -> Result<(), ConfigError> {
        self.ensure(legacy)?;

        for kind in HistoryKind::ALL {
            let path = self.history_file(kind);
            if let Err(e) = OpenOptions::new().append(true).create(true).open(&path) {
                warn!("Cannot create or open file '{}' ({e})", path.display());
            }
        }
        Ok(())
    }
}

/// Every file name that belongs in the configuration directory
fn known_files() -> impl Iterator<Item = &'static str> {
    std::iter::once(CONFIG_FILE).chain(HistoryKind::ALL.into_iter().map(HistoryKind::file_name))
}

/// Move the known files from `old` to `new`
///
/// Missing files are skipped and failures are logged per file. Returns the
/// number of files moved.
pub fn migrate(old: &Path, new: &Path) -> usize {
    info!(
        "Migrating configuration from directory '{}' to '{}'",
        old.display(),
        new.display()
    );

    let mut moved = 0;
    for name in known_files() {
        let from = old.join(name);
        if !from.exists() {
            continue;
        }
        match move_file(&from, &new.join(name)) {
            Ok(()) => moved += 1,
            Err(e) => warn!("Failed to migrate configuration file '{name}': {e}"),
        }
    }
    moved
}

fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }
    // Rename fails across filesystems
    fs::copy(from, to)?;
    fs::remove_file(from)
}
