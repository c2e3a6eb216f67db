//! History command - show and edit history lists

use super::{Result, Session};
use crate::cli::HistoryCommands;
use std::io::Write;

/// Execute a history subcommand
///
/// # Errors
///
/// Returns an I/O error if printing fails.
pub fn execute<W: Write>(session: &mut Session, command: &HistoryCommands, out: &mut W) -> Result<()> {
    match command {
        HistoryCommands::List { kind } => {
            for entry in session.history(*kind).iter() {
                writeln!(out, "{entry}")?;
            }
        }
        HistoryCommands::Add { kind, value } => {
            if !session.history(*kind).add(value) {
                writeln!(out, "'{value}' not added (blank or already present)")?;
            }
        }
        HistoryCommands::Remove { kind, value } => {
            if !session.history(*kind).remove(value) {
                writeln!(out, "'{value}' not found")?;
            }
        }
        HistoryCommands::Clear { kind } => session.history(*kind).clear(),
    }
    Ok(())
}
