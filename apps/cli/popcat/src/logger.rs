//! Logging for the popcat CLI.
//!
//! Coloured records go to stderr so command output on stdout stays clean. An
//! optional plain-text log file receives the same records.

use crate::error::CliError;

use common::ErrorLocation;

use std::fs::File;
use std::io::stderr;
use std::panic::Location;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, debug, warn};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";
const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

/// Default log level for debug builds.
#[cfg(debug_assertions)]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// Default log level for release builds.
#[cfg(not(debug_assertions))]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Pick the level from `-v` count and `--quiet`.
///
/// `--quiet` wins and keeps only errors. One `-v` means debug, two or more
/// trace; otherwise the build default applies.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => DEFAULT_LOG_LEVEL,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}

/// Initialize the logger once.
///
/// Safe to call repeatedly; later calls log a warning and return Ok.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or the global logger
/// is already owned by someone else.
pub fn initialize(level: LevelFilter, log_file: Option<&Path>) -> Result<(), CliError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = initialize_internal(level, log_file);
        if result.is_ok() {
            debug!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{level:?}");
        }
    });

    result
}

#[track_caller]
fn initialize_internal(level: LevelFilter, log_file: Option<&Path>) -> Result<(), CliError> {
    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let stderr_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
            ))
        })
        .chain(stderr());

    let mut base_dispatch = Dispatch::new().level(level).chain(stderr_dispatch);

    // File dispatch (plain text, no colors)
    if let Some(log_file_path) = log_file {
        let file = open_log_file(log_file_path)?;

        let file_dispatch = Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0)
                ))
            })
            .chain(file);

        base_dispatch = base_dispatch.chain(file_dispatch);
    }

    base_dispatch.apply().map_err(|e| CliError::Cli {
        message: format!("Failed to initialize logger: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(())
}

/// Open (append) the log file.
#[track_caller]
pub fn open_log_file(path: &Path) -> Result<File, CliError> {
    fern::log_file(path).map_err(|e| CliError::Cli {
        message: format!("Failed to create log file {}: {e}", path.display()),
        location: ErrorLocation::from(Location::caller()),
    })
}
