//! Command implementations
//!
//! Each command is a module with an `execute` function that takes the parsed
//! CLI arguments, the [`Session`] and the writer results are printed to.

pub mod config;
pub mod history;
pub mod play;
pub mod search;

pub use config::execute as config;
pub use history::execute as history;
pub use play::execute as play;
pub use search::execute as search;

use crate::EasyTagError;
use crate::config::{ConfigDir, Settings};
use crate::history::{HistoryError, HistoryKind, HistoryList};
use std::collections::HashMap;
use std::fs;
use tracing::{error, info};

type Result<T> = std::result::Result<T, EasyTagError>;

/// Settings and history lists loaded for one run
///
/// History lists are read on first use. [`Session::save`] writes back the
/// settings and the history lists that changed.
#[derive(Debug)]
pub struct Session {
    dir: ConfigDir,
    pub settings: Settings,
    histories: HashMap<HistoryKind, LoadedHistory>,
}

#[derive(Debug)]
struct LoadedHistory {
    list: HistoryList,
    on_disk: HistoryList,
}

impl Session {
    /// Prepare `dir` and load the settings stored in it
    ///
    /// The directory and the history files are created when missing, and
    /// the files of `legacy` are migrated the first time. An unset
    /// `default_path` is filled in.
    ///
    /// # Errors
    ///
    /// Returns `EasyTagError::ConfigError` if the directory cannot be created.
    pub fn open(dir: ConfigDir, legacy: Option<&std::path::Path>) -> Result<Self> {
        dir.create_files(legacy)?;

        let config_file = dir.config_file();
        let mut settings = if config_file.exists() {
            Settings::load_or_default(&config_file)
        } else {
            info!("No configuration file yet, using defaults");
            Settings::default()
        };
        settings.resolve_default_path();

        Ok(Self {
            dir,
            settings,
            histories: HashMap::new(),
        })
    }

    #[must_use]
    pub const fn dir(&self) -> &ConfigDir {
        &self.dir
    }

    /// A history list, loaded on first use
    pub fn history(&mut self, kind: HistoryKind) -> &mut HistoryList {
        let path = self.dir.history_file(kind);
        let loaded = self.histories.entry(kind).or_insert_with(|| {
            let list = HistoryList::load_kind(kind, &path);
            LoadedHistory {
                on_disk: list.clone(),
                list,
            }
        });
        &mut loaded.list
    }

    /// Write modified settings and history lists
    ///
    /// A history list that was emptied truncates its file.
    ///
    /// # Errors
    ///
    /// Returns the first write failure.
    pub fn save(&mut self) -> Result<()> {
        if self.settings.is_modified() {
            self.settings.save(&self.dir.config_file())?;
        }

        for (kind, loaded) in &mut self.histories {
            if loaded.list == loaded.on_disk {
                continue;
            }
            let path = self.dir.history_file(*kind);
            if loaded.list.is_empty() {
                fs::write(&path, "").map_err(|e| HistoryError::Io { path, source: e })?;
            } else {
                loaded.list.save(&path)?;
            }
            loaded.on_disk = loaded.list.clone();
        }
        Ok(())
    }

    /// Save after a command ran, keeping the command's own error
    ///
    /// A save failure is returned only when the command succeeded; otherwise
    /// it is logged.
    ///
    /// # Errors
    ///
    /// Returns `outcome`'s error, else the save error.
    pub fn finish(&mut self, outcome: Result<()>) -> Result<()> {
        let saved = self.save();
        match (outcome, saved) {
            (Err(e), Err(save_error)) => {
                error!("Failed to save settings: {save_error}");
                Err(e)
            }
            (outcome, saved) => outcome.and(saved),
        }
    }
}
