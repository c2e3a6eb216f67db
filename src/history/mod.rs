//! Most-recently-used history lists
//!
//! EasyTAG remembers what the user typed into its combo boxes: searched
//! strings, players, browsed paths, file masks. Each list is persisted to its
//! own file, one entry per line, newest first.
//!
//! A [`HistoryList`] holds at most [`HISTORY_MAX_LENGTH`] entries when grown
//! through [`HistoryList::add`] and never holds the same string twice. Adding
//! a string that is already present leaves the list untouched.

mod error;
mod store;

pub use error::HistoryError;
pub use store::default_entries;

use crate::config::SettingEnum;
use std::collections::VecDeque;
use std::str::FromStr;

/// Maximum number of entries kept by [`HistoryList::add`]
pub const HISTORY_MAX_LENGTH: usize = 15;

/// The history files kept in the configuration directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryKind {
    /// Masks of the "Fill Tag" scanner
    ScanTagMask,
    /// Masks of the "Rename File" scanner
    RenameFileMask,
    BrowserPath,
    RunProgramWithDirectory,
    RunProgramWithFile,
    AudioFilePlayer,
    SearchFile,
    FileToLoad,
    CddbSearchString,
    CddbSearchStringInResult,
}

impl HistoryKind {
    /// Every history file, in creation order
    pub const ALL: [Self; 10] = [
        Self::ScanTagMask,
        Self::RenameFileMask,
        Self::BrowserPath,
        Self::RunProgramWithDirectory,
        Self::RunProgramWithFile,
        Self::AudioFilePlayer,
        Self::SearchFile,
        Self::FileToLoad,
        Self::CddbSearchString,
        Self::CddbSearchStringInResult,
    ];

    /// File name inside the configuration directory
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::ScanTagMask => "scan_tag.mask",
            Self::RenameFileMask => "rename_file.mask",
            Self::BrowserPath => "browser_path.history",
            Self::RunProgramWithDirectory => "run_program_with_directory.history",
            Self::RunProgramWithFile => "run_program_with_file.history",
            Self::AudioFilePlayer => "audio_file_player.history",
            Self::SearchFile => "search_file.history",
            Self::FileToLoad => "file_to_load.history",
            Self::CddbSearchString => "cddb_search_string.history",
            Self::CddbSearchStringInResult => "cddb_search_string_in_result.history",
        }
    }

    /// True for the two mask lists, which have built-in defaults
    #[must_use]
    pub const fn is_mask(self) -> bool {
        matches!(self, Self::ScanTagMask | Self::RenameFileMask)
    }
}

impl SettingEnum for HistoryKind {
    const NAME: &'static str = "history list";
    const NICKS: &'static [(&'static str, Self)] = &[
        ("scan_tag_mask", Self::ScanTagMask),
        ("rename_file_mask", Self::RenameFileMask),
        ("browser_path", Self::BrowserPath),
        ("run_program_with_directory", Self::RunProgramWithDirectory),
        ("run_program_with_file", Self::RunProgramWithFile),
        ("audio_file_player", Self::AudioFilePlayer),
        ("search_file", Self::SearchFile),
        ("file_to_load", Self::FileToLoad),
        ("cddb_search_string", Self::CddbSearchString),
        ("cddb_search_string_in_result", Self::CddbSearchStringInResult),
    ];
}

impl FromStr for HistoryKind {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_nick(s).ok_or_else(|| HistoryError::UnknownKind(s.to_string()))
    }
}

/// Ordered, duplicate-free list of previously entered strings, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryList {
    entries: VecDeque<String>,
}

impl HistoryList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from stored entries, newest first
    ///
    /// Entries are kept in order and in full, even beyond
    /// [`HISTORY_MAX_LENGTH`]; only exact duplicates of an earlier entry are
    /// dropped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for entry in entries {
            let entry = entry.into();
            if !list.contains(&entry) {
                list.entries.push_back(entry);
            }
        }
        list
    }

    /// Insert `value` at the front
    ///
    /// Blank values and values already present are rejected. After
    /// inserting, the oldest entries beyond [`HISTORY_MAX_LENGTH`] are
    /// dropped. Returns true if the list changed.
    pub fn add(&mut self, value: &str) -> bool {
        if value.trim().is_empty() || self.contains(value) {
            return false;
        }

        self.entries.push_front(value.to_string());
        self.entries.truncate(HISTORY_MAX_LENGTH);
        true
    }

    /// Remove `value`, returning true if it was present
    pub fn remove(&mut self, value: &str) -> bool {
        match self.entries.iter().position(|entry| entry == value) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|entry| entry == value)
    }

    /// Entries, newest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Most recent entry
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(list: &HistoryList) -> Vec<&str> {
        list.iter().collect()
    }

    #[test]
    fn test_add_to_empty_list() {
        let mut list = HistoryList::new();
        assert!(list.add("a"));
        assert_eq!(entries(&list), ["a"]);
    }

    #[test]
    fn test_add_duplicate_is_rejected() {
        let mut list = HistoryList::from_entries(["a"]);
        assert!(!list.add("a"));
        assert_eq!(entries(&list), ["a"]);
    }

    #[test]
    fn test_duplicate_keeps_its_position() {
        let mut list = HistoryList::from_entries(["c", "b", "a"]);
        assert!(!list.add("a"));
        assert_eq!(entries(&list), ["c", "b", "a"]);
    }

    #[test]
    fn test_duplicates_are_case_sensitive() {
        let mut list = HistoryList::from_entries(["Beatles"]);
        assert!(list.add("beatles"));
        assert_eq!(entries(&list), ["beatles", "Beatles"]);
    }

    #[test]
    fn test_blank_values_are_rejected() {
        let mut list = HistoryList::new();
        assert!(!list.add(""));
        assert!(!list.add("   "));
        assert!(list.is_empty());
    }

    #[test]
    fn test_bounded_to_fifteen_newest() {
        let mut list = HistoryList::new();
        for i in 0..16 {
            assert!(list.add(&format!("v{i}")));
        }

        assert_eq!(list.len(), HISTORY_MAX_LENGTH);
        assert_eq!(list.first(), Some("v15"));
        assert!(!list.contains("v0"));
        let expected: Vec<String> = (1..16).rev().map(|i| format!("v{i}")).collect();
        assert_eq!(entries(&list), expected);
    }

    #[test]
    fn test_from_entries_keeps_long_lists() {
        let list = HistoryList::from_entries((0..20).map(|i| i.to_string()));
        assert_eq!(list.len(), 20);
        assert_eq!(list.first(), Some("0"));
    }

    #[test]
    fn test_add_truncates_long_lists() {
        let mut list = HistoryList::from_entries((0..20).map(|i| i.to_string()));
        assert!(list.add("new"));
        assert_eq!(list.len(), HISTORY_MAX_LENGTH);
        assert_eq!(list.first(), Some("new"));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut list = HistoryList::from_entries(["a", "b", "c"]);
        assert!(list.remove("b"));
        assert!(!list.remove("b"));
        assert_eq!(entries(&list), ["a", "c"]);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            "search_file".parse::<HistoryKind>().unwrap(),
            HistoryKind::SearchFile
        );
        assert!(matches!(
            "bogus".parse::<HistoryKind>(),
            Err(HistoryError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_every_kind_has_a_distinct_file() {
        let mut names: Vec<&str> = HistoryKind::ALL.iter().map(|k| k.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), HistoryKind::ALL.len());
    }
}
