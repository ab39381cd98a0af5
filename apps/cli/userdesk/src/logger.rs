//! Logging for the userdesk CLI.
//!
//! Dual output (stderr with colors + file) with thread-safe initialization.
//! Stdout stays clean for command output, so everything human-facing that
//! is not data goes to stderr.

use crate::error::UserdeskError;

use std::io::stderr;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// Runs the dispatch wiring at most once per process.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Flipped by the first call so repeats can warn instead of re-wiring.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

/// File created inside the data directory.
const LOG_FILE_NAME: &str = "userdesk.log";

/// First record written once the dispatch is live.
const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

/// Emitted when a second initialization is attempted.
const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

/// Base level in debug builds.
#[cfg(debug_assertions)]
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// Base level in release builds.
#[cfg(not(debug_assertions))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Set up logging: colored stderr plus a plain-text file in `log_dir`.
///
/// `verbose` raises the stderr chain to debug level. Safe to call more
/// than once; repeat calls warn and return Ok while the first
/// configuration stays in effect.
///
/// # Errors
///
/// Fails when the log file cannot be created in `log_dir`, or when
/// another logger already claimed the `log` facade.
pub fn initialize(log_dir: &Path, verbose: bool) -> Result<(), UserdeskError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = initialize_internal(log_dir, verbose);
    });

    result
}

/// Wires both output chains; runs inside the `Once` guard.
fn initialize_internal(log_dir: &Path, verbose: bool) -> Result<(), UserdeskError> {
    let log_file_path = log_dir.join(LOG_FILE_NAME);

    // A quiet terminal by default; the file gets the full story.
    let stderr_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    // The base filter must admit debug records for --verbose to mean
    // anything in release builds
    let base_level = if verbose { LevelFilter::Debug } else { LOG_LEVEL };

    // Color configuration for stderr
    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    // Root dispatch; its filter gates both chains
    let base_dispatch = Dispatch::new().level(base_level);

    // Stderr dispatch (colored)
    let stderr_dispatch = Dispatch::new()
        .level(stderr_level)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(stderr());

    // Plain formatting for the file; color escapes would garble it
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
        .chain(fern::log_file(&log_file_path).map_err(|e| {
            UserdeskError::userdesk(format!("Failed to create log file: {e}"))
        })?);

    base_dispatch
        .chain(stderr_dispatch)
        .chain(file_dispatch)
        .apply()
        .map_err(|e| UserdeskError::userdesk(format!("Failed to initialize logger: {e}")))?;

    info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{base_level:?}");

    Ok(())
}
