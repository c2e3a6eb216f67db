//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for easytag using the `clap` crate.
//!
//! # Commands
//!
//! - **search**: Search the audio files of a directory by filename and tag
//! - **play**: Run the audio player on files or directories
//! - **config**: Show and change `easytagrc` settings
//! - **history**: Show and edit the history lists
//!
//! Search flags left unset fall back to the persisted settings, so
//! `--no-tags` and friends only affect one invocation.

use crate::config::parse_enum;
use crate::history::HistoryKind;
use crate::output::OutputFormat;
use crate::track::TagField;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "easytag")]
#[command(about = "Search and play audio files by filename and tag", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log informational messages
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Use this directory instead of the per-user configuration directory
    #[arg(long = "config-dir", value_name = "DIR", global = true)]
    pub config_dir: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Search audio files by filename and tag
    #[command(visible_alias = "s")]
    Search {
        /// Directory holding the audio files
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Text to look for (lists every file when omitted)
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        #[command(flatten)]
        flags: SearchFlags,

        /// Output format (overrides config)
        #[arg(long = "format", value_enum)]
        format: Option<OutputFormat>,

        /// Only load the files directly inside DIR
        #[arg(long = "no-recursive")]
        no_recursive: bool,
    },

    /// Run the audio player on files or directories
    #[command(visible_alias = "p")]
    Play {
        /// Audio files, or directories whose audio files are played
        #[arg(value_name = "PATH", required = true, num_args = 1..)]
        paths: Vec<PathBuf>,

        /// Player command (overrides config)
        #[arg(long = "player", value_name = "COMMAND")]
        player: Option<String>,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Manage history lists
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
}

/// Where to search and how, each flag overriding its setting
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFlags {
    /// Search in file names
    #[arg(long = "filename", overrides_with = "no_filename")]
    pub filename: bool,

    /// Do not search in file names
    #[arg(long = "no-filename", overrides_with = "filename")]
    pub no_filename: bool,

    /// Search in tags
    #[arg(long = "tags", overrides_with = "no_tags")]
    pub tags: bool,

    /// Do not search in tags
    #[arg(long = "no-tags", overrides_with = "tags")]
    pub no_tags: bool,

    /// Match case exactly
    #[arg(short = 'c', long = "case-sensitive", overrides_with = "ignore_case")]
    pub case_sensitive: bool,

    /// Ignore case
    #[arg(short = 'i', long = "ignore-case", overrides_with = "case_sensitive")]
    pub ignore_case: bool,

    /// Sort results by a column, ignoring case (e.g. `artist`)
    #[arg(long = "sort", value_name = "COLUMN", value_parser = parse_column)]
    pub sort: Option<TagField>,
}

fn parse_column(value: &str) -> Result<TagField, String> {
    parse_enum("--sort", value).map_err(|e| e.to_string())
}

const fn tristate(yes: bool, no: bool) -> Option<bool> {
    if yes {
        Some(true)
    } else if no {
        Some(false)
    } else {
        None
    }
}

impl SearchFlags {
    #[must_use]
    pub const fn filename(&self) -> Option<bool> {
        tristate(self.filename, self.no_filename)
    }

    #[must_use]
    pub const fn tags(&self) -> Option<bool> {
        tristate(self.tags, self.no_tags)
    }

    #[must_use]
    pub const fn case_sensitive(&self) -> Option<bool> {
        tristate(self.case_sensitive, self.ignore_case)
    }
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// List every setting with its value
    #[command(visible_alias = "ls")]
    List,

    /// Print the value of a setting
    Get {
        /// Setting key (e.g. `audio_file_player`)
        key: String,
    },

    /// Change a setting
    Set {
        /// Assignment in `KEY=VALUE` form
        #[arg(value_name = "KEY=VALUE")]
        assignment: String,
    },

    /// Restore the default value of a setting
    Reset {
        /// Setting key
        key: String,
    },
}

/// History management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum HistoryCommands {
    /// Print a history list, newest first
    #[command(visible_alias = "ls")]
    List {
        /// History list (e.g. `search_file`, `audio_file_player`)
        kind: HistoryKind,
    },

    /// Add an entry at the front of a history list
    Add { kind: HistoryKind, value: String },

    /// Remove an entry from a history list
    #[command(visible_alias = "rm")]
    Remove { kind: HistoryKind, value: String },

    /// Remove every entry of a history list
    Clear { kind: HistoryKind },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_defaults() {
        let cli = Cli::parse_from(["easytag", "search", "/music"]);
        let Commands::Search { dir, query, flags, format, no_recursive } = cli.command else {
            panic!("Expected Search command");
        };
        assert_eq!(dir, PathBuf::from("/music"));
        assert_eq!(query, None);
        assert_eq!(flags, SearchFlags::default());
        assert_eq!(format, None);
        assert!(!no_recursive);
    }

    #[test]
    fn test_parse_search_overrides() {
        let cli = Cli::parse_from([
            "easytag", "search", "/music", "beatles", "--no-tags", "-c", "--format", "json",
        ]);
        let Commands::Search { query, flags, format, .. } = cli.command else {
            panic!("Expected Search command");
        };
        assert_eq!(query.as_deref(), Some("beatles"));
        assert_eq!(flags.tags(), Some(false));
        assert_eq!(flags.filename(), None);
        assert_eq!(flags.case_sensitive(), Some(true));
        assert_eq!(format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_parse_sort_column() {
        let cli = Cli::parse_from(["easytag", "search", "/music", "--sort", "album_artist"]);
        let Commands::Search { flags, .. } = cli.command else {
            panic!("Expected Search command");
        };
        assert_eq!(flags.sort, Some(TagField::AlbumArtist));

        assert!(Cli::try_parse_from(["easytag", "search", "/music", "--sort", "bitrate"]).is_err());
    }

    #[test]
    fn test_last_flag_wins() {
        let cli = Cli::parse_from(["easytag", "search", "/music", "--filename", "--no-filename"]);
        let Commands::Search { flags, .. } = cli.command else {
            panic!("Expected Search command");
        };
        assert_eq!(flags.filename(), Some(false));
    }

    #[test]
    fn test_parse_play() {
        let cli = Cli::parse_from(["easytag", "play", "a.mp3", "b.flac", "--player", "mpv --no-video"]);
        let Commands::Play { paths, player } = cli.command else {
            panic!("Expected Play command");
        };
        assert_eq!(paths.len(), 2);
        assert_eq!(player.as_deref(), Some("mpv --no-video"));
    }

    #[test]
    fn test_play_requires_a_path() {
        assert!(Cli::try_parse_from(["easytag", "play"]).is_err());
    }

    #[test]
    fn test_parse_history_kind() {
        let cli = Cli::parse_from(["easytag", "history", "add", "search_file", "beatles"]);
        let Commands::History { command: HistoryCommands::Add { kind, value } } = cli.command else {
            panic!("Expected history add");
        };
        assert_eq!(kind, HistoryKind::SearchFile);
        assert_eq!(value, "beatles");

        assert!(Cli::try_parse_from(["easytag", "history", "list", "bogus"]).is_err());
    }

    #[test]
    fn test_global_options() {
        let cli = Cli::parse_from(["easytag", "config", "list", "-v", "--config-dir", "/tmp/et"]);
        assert!(cli.verbose);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/et")));
    }
}
