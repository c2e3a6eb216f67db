//! Configuration module for easytag
//!
//! Manages the `easytagrc` settings file and the directory it lives in.
//!
//! # Overview
//!
//! - [`Settings`]: one typed value per registry key, loaded once at startup
//!   and passed by reference to whatever needs it
//! - [`registry`]: the fixed list of known keys, their types and defaults
//! - [`SettingEnum`]: compile-time nick tables for enum and flags settings
//! - [`ConfigDir`]: file locations, first-run creation and legacy migration
//!
//! # Examples
//!
//! ```no_run
//! use easytag::config::{ConfigDir, Settings, keys};
//!
//! let dir = ConfigDir::user()?;
//! let mut settings = Settings::load_or_default(&dir.config_file());
//! settings.set_bool(keys::SEARCH_CASE_SENSITIVE, true)?;
//! settings.save(&dir.config_file())?;
//! # Ok::<(), easytag::config::ConfigError>(())
//! ```

mod enums;
mod error;
mod paths;
pub mod registry;
mod store;

pub use enums::{SettingEnum, flags_to_string, parse_enum, parse_flags};
pub use error::ConfigError;
pub use paths::{CONFIG_FILE, ConfigDir, migrate};
pub use registry::{ConfigEntry, ConfigKind, ConfigValue, REGISTRY, keys};
pub use store::{LineOutcome, Settings};
