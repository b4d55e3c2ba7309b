// Unit tests for logger module initialization logic

use crate::error::CliError;
use crate::logger::{DEFAULT_LOG_LEVEL, initialize, level_for, open_log_file};

use std::path::PathBuf;

use log::LevelFilter;
use tempfile::TempDir;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed,
/// causing fern to fail when setting the global logger twice.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("popcat.log");

    let result1 = initialize(LevelFilter::Debug, Some(&log_file));
    let result2 = initialize(LevelFilter::Debug, None);

    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(
        result2.is_ok(),
        "Second initialization should succeed (idempotent)"
    );
}

/// **VALUE**: An unwritable log path is an error, not a panic.
#[test]
fn given_invalid_log_path_when_opened_then_returns_cli_error() {
    let invalid_path = PathBuf::from("/dev/null/invalid-path/popcat.log");

    let err = open_log_file(&invalid_path).unwrap_err();

    assert!(matches!(err, CliError::Cli { .. }));
    assert!(err.to_string().contains("invalid-path"));
}

#[test]
fn given_flags_when_level_chosen_then_quiet_wins_and_verbosity_escalates() {
    assert_eq!(level_for(0, false), DEFAULT_LOG_LEVEL);
    assert_eq!(level_for(1, false), LevelFilter::Debug);
    assert_eq!(level_for(3, false), LevelFilter::Trace);
    assert_eq!(level_for(0, true), LevelFilter::Error);
    assert_eq!(level_for(2, true), LevelFilter::Error);
}
