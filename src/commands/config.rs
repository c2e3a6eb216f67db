//! Config command - show and change settings

use super::{Result, Session};
use crate::EasyTagError;
use crate::cli::ConfigCommands;
use crate::config::{ConfigError, REGISTRY};
use colored::Colorize;
use std::io::Write;

/// Execute a config subcommand
///
/// # Errors
///
/// Returns `ConfigError::UnknownKey` or `ConfigError::InvalidValue` for bad
/// input, or an I/O error if printing fails.
pub fn execute<W: Write>(session: &mut Session, command: &ConfigCommands, out: &mut W) -> Result<()> {
    match command {
        ConfigCommands::List => list(session, out),
        ConfigCommands::Get { key } => {
            let value = session
                .settings
                .get(key)
                .ok_or_else(|| ConfigError::UnknownKey(key.clone()))?;
            writeln!(out, "{value}")?;
            Ok(())
        }
        ConfigCommands::Set { assignment } => {
            let (key, value) = parse_assignment(assignment)?;
            session.settings.set_from_str(key, value)?;
            writeln!(out, "{key}={value}")?;
            Ok(())
        }
        ConfigCommands::Reset { key } => {
            session.settings.reset(key)?;
            if let Some(value) = session.settings.get(key) {
                writeln!(out, "{key}={value}")?;
            }
            Ok(())
        }
    }
}

fn list<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    let width = REGISTRY.iter().map(|entry| entry.key.len()).max().unwrap_or(0);
    for (entry, value) in session.settings.iter() {
        writeln!(
            out,
            "{:<width$} = {}  {}",
            entry.key.bold(),
            value,
            format!("({}) {}", entry.kind.name(), entry.description).dimmed()
        )?;
    }
    Ok(())
}

/// Split `KEY=VALUE` on the first `=`
///
/// # Errors
///
/// Returns `EasyTagError::InvalidInput` when there is no `=` or no key.
pub fn parse_assignment(assignment: &str) -> Result<(&str, &str)> {
    match assignment.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(EasyTagError::InvalidInput(format!(
            "Expected KEY=VALUE, got '{assignment}'"
        ))),
    }
}
