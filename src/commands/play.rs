//! Play command - run the audio player on files

use super::{Result, Session};
use crate::history::HistoryKind;
use crate::library;
use crate::program::{self, ProgramError};
use std::io::Write;
use std::path::PathBuf;

/// Files to pass to the player
///
/// Directories are replaced by the audio files below them, files are kept
/// as given.
///
/// # Errors
///
/// Returns `LibraryError` if a directory cannot be read.
pub fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(library::audio_files(path, true)?);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

/// Execute the play command
///
/// The player is not waited for.
///
/// # Errors
///
/// Returns `ProgramError::EmptyProgramName` when no player is configured,
/// or a `ProgramError` if the player cannot be found or started.
pub fn execute<W: Write>(
    session: &mut Session,
    paths: &[PathBuf],
    player: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let player = player
        .or_else(|| session.settings.audio_file_player())
        .map(str::to_string)
        .ok_or(ProgramError::EmptyProgramName)?;

    let files = collect_files(paths)?;
    if files.is_empty() {
        writeln!(out, "No audio files to play")?;
        return Ok(());
    }

    program::run_program(&player, &files)?;
    writeln!(out, "Executed command: {player}")?;

    session.history(HistoryKind::AudioFilePlayer).add(&player);
    Ok(())
}
