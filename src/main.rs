//! EasyTAG command line entry point
//!
//! Searches directories of audio files by filename and tag, runs the
//! configured audio player, and manages the `easytagrc` settings and history
//! lists shared with the graphical application.
//!
//! # Usage
//!
//! ```bash
//! # List every audio file below ~/Music
//! easytag search ~/Music
//!
//! # Case sensitive search in tags only, as JSON
//! easytag search ~/Music Beatles --no-filename -c --format json
//!
//! # Play an album with the configured player, or another one
//! easytag play ~/Music/Abbey\ Road
//! easytag play song.flac --player "mpv --no-video"
//!
//! # Settings and history lists
//! easytag config set audio_file_player=vlc
//! easytag history list search_file
//! ```
//!
//! # Logging
//!
//! Warnings are printed to stderr. `-v` enables informational messages and
//! `RUST_LOG` overrides both.

use easytag::EasyTagError;
use easytag::cli::{Cli, Commands};
use easytag::commands::{self, Session};
use easytag::config::ConfigDir;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, EasyTagError>;

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run<W: Write>(session: &mut Session, command: &Commands, out: &mut W) -> Result<()> {
    match command {
        Commands::Search { dir, query, flags, format, no_recursive } => commands::search(
            session,
            dir,
            query.as_deref(),
            flags,
            *format,
            !no_recursive,
            out,
        ),
        Commands::Play { paths, player } => commands::play(session, paths, player.as_deref(), out),
        Commands::Config { command } => commands::config(session, command, out),
        Commands::History { command } => commands::history(session, command, out),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let (dir, legacy) = match cli.config_dir {
        Some(path) => (ConfigDir::new(path), None),
        None => (ConfigDir::user()?, ConfigDir::legacy()),
    };
    let mut session = Session::open(dir, legacy.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = run(&mut session, &cli.command, &mut out);

    // Settings and history are saved even when the command failed
    session.finish(outcome)
}
