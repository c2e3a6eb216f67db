//! Running external programs on audio files
//!
//! A configured command such as `"mpv --no-video"` is split on spaces: the
//! first token is the executable and the rest are arguments placed before
//! the file paths. Executables whose own path contains a space cannot be
//! expressed this way, and quoting is not interpreted.

use std::env::{self, consts::EXE_SUFFIX};
use std::path::{Path, PathBuf};
use std::process::{Child, Command};
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised when launching a program
#[derive(Debug, Error)]
pub enum ProgramError {
    /// The command is empty or blank
    #[error("You must type a program name")]
    EmptyProgramName,

    /// The executable is not an executable file and is not in `PATH`
    #[error("The program '{0}' cannot be found")]
    NotFound(String),

    /// The executable could not be spawned
    #[error("Failed to launch program '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Split a command into executable and leading arguments
///
/// Returns `None` for a blank command.
#[must_use]
pub fn split_command(command: &str) -> Option<(&str, Vec<&str>)> {
    let command = command.trim();
    if command.is_empty() {
        return None;
    }

    let (program, rest) = command.split_once(' ').unwrap_or((command, ""));
    let args = rest.split(' ').filter(|arg| !arg.is_empty()).collect();
    Some((program, args))
}

/// Full path of the executable a command would run
///
/// Arguments are ignored. A path with more than one component must name an
/// executable file; a bare name is looked up in `PATH`.
#[must_use]
pub fn find_executable(command: &str) -> Option<PathBuf> {
    let (program, _) = split_command(command)?;
    let path = Path::new(program);

    if path.is_absolute() || path.components().count() > 1 {
        return is_executable(path).then(|| path.to_path_buf());
    }

    let search_path = env::var_os("PATH")?;
    env::split_paths(&search_path)
        .flat_map(|dir| [dir.join(program), dir.join(format!("{program}{EXE_SUFFIX}"))])
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Build the process for `command` with `files` appended
///
/// # Errors
///
/// Returns `ProgramError::EmptyProgramName` for a blank command.
pub fn build_command<P: AsRef<Path>>(command: &str, files: &[P]) -> Result<Command, ProgramError> {
    let (program, args) = split_command(command).ok_or(ProgramError::EmptyProgramName)?;

    let mut cmd = Command::new(program);
    cmd.args(args);
    for file in files {
        cmd.arg(file.as_ref());
    }
    Ok(cmd)
}

/// Launch `command` on `files` without waiting for it
///
/// # Errors
///
/// Returns `ProgramError::EmptyProgramName` for a blank command,
/// `ProgramError::NotFound` if the executable cannot be found, or
/// `ProgramError::Spawn` if the process cannot be started.
pub fn run_program<P: AsRef<Path>>(command: &str, files: &[P]) -> Result<Child, ProgramError> {
    let mut cmd = build_command(command, files)?;

    if find_executable(command).is_none() {
        let program = split_command(command).map_or("", |(program, _)| program);
        warn!("The program '{program}' cannot be found");
        return Err(ProgramError::NotFound(program.to_string()));
    }

    match cmd.spawn() {
        Ok(child) => {
            info!("Executed command: {command}");
            Ok(child)
        }
        Err(source) => {
            warn!("Failed to launch program: {source}");
            Err(ProgramError::Spawn {
                program: command.trim().to_string(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("mpv"), Some(("mpv", vec![])));
        assert_eq!(
            split_command("mpv --no-video  --volume=50"),
            Some(("mpv", vec!["--no-video", "--volume=50"]))
        );
        assert_eq!(split_command("  vlc  "), Some(("vlc", vec![])));
        assert_eq!(split_command(""), None);
        assert_eq!(split_command("   "), None);
    }

    #[test]
    fn test_executable_path_with_space_is_split() {
        let (program, args) = split_command("/opt/My Player/bin/play").unwrap();
        assert_eq!(program, "/opt/My");
        assert_eq!(args, ["Player/bin/play"]);
    }

    #[test]
    fn test_build_command_appends_files() {
        let cmd = build_command("player -q", &["a.mp3", "b c.mp3"]).unwrap();
        assert_eq!(cmd.get_program(), OsStr::new("player"));
        let args: Vec<String> = cmd
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        assert_eq!(args, ["-q", "a.mp3", "b c.mp3"]);
    }

    #[test]
    fn test_empty_program_name() {
        let files: [&str; 1] = ["a.mp3"];
        assert!(matches!(
            run_program("  ", &files),
            Err(ProgramError::EmptyProgramName)
        ));
    }

    #[test]
    fn test_missing_program_is_not_launched() {
        let files: [&str; 0] = [];
        let err = run_program("easytag-no-such-program-xyz --flag", &files).unwrap_err();
        match err {
            ProgramError::NotFound(program) => assert_eq!(program, "easytag-no-such-program-xyz"),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_relative_path_is_not_looked_up_in_path() {
        assert_eq!(find_executable("bin/easytag-no-such-program-xyz"), None);
        assert_eq!(find_executable("./easytag-no-such-program-xyz"), None);
    }

    #[test]
    fn test_find_executable() {
        assert_eq!(find_executable(""), None);
        assert_eq!(find_executable("easytag-no-such-program-xyz --flag"), None);
        assert_eq!(find_executable("/definitely/not/here"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_find_executable_absolute_path() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let script = dir.path().join("player");
        std::fs::write(&script, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let command = format!("{} --flag", script.display());
        assert_eq!(find_executable(&command), Some(script.clone()));

        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o644)).unwrap();
        assert_eq!(find_executable(&command), None);
    }
}
