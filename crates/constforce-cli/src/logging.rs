use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt,
    prelude::*,
};

const CRATE_TARGETS: [&str; 2] = ["constforce", "constforce_cli"];

/// Maps the `-v` count and `-q` flag to the console level for this workspace's crates.
fn console_level(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Events from our own crates pass at `level`; everything else is held to warnings.
fn targets(level: LevelFilter) -> Targets {
    CRATE_TARGETS
        .iter()
        .fold(Targets::new().with_default(level.min(LevelFilter::WARN)), |t, name| {
            t.with_target(*name, level)
        })
}

/// Installs the global subscriber.
///
/// The console layer follows `-v`/`-q`. The optional file layer always records at least
/// DEBUG, so a log file is useful even for a quiet run.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let level = console_level(verbosity, quiet);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(targets(level));

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(&path)?;
            let file_level = level.max(LevelFilter::DEBUG);
            Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_filter(targets(file_level)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CliError::Other(e.into()))
}
