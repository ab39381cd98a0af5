// Logger initialization tests. These mutate global logger state, so they
// run under #[serial] and rely on nothing the other tests set up.

use crate::logger::initialize;

use std::path::PathBuf;

use serial_test::serial;

/// **VALUE**: Verifies an unusable log directory surfaces as an error.
///
/// **WHY THIS MATTERS**: If the data directory can't be created (permissions,
/// disk full, etc.), the CLI should print a clear error and exit instead of
/// panicking before the user sees anything.
///
/// **BUG THIS CATCHES**: Would catch if `fern::log_file()` were unwrapped
/// instead of mapped into a Result, panicking when the log file can't be
/// created.
#[test]
#[serial]
fn given_invalid_log_dir_when_initialize_called_then_returns_error() {
    // GIVEN: A path that cannot exist (a file cannot have children)
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN: Initializing against that path
    let result = initialize(&invalid_dir, false);

    // THEN: An error comes back, no panic
    assert!(result.is_err(), "unwritable log dir must be an error");

    let err = result.unwrap_err();
    let err_string = format!("{err:?}");
    assert!(
        err_string.contains("Userdesk"),
        "error should be the app-level variant"
    );
}

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic
/// or fail.
///
/// **WHY THIS MATTERS**: Initialization is reachable from `main` and from
/// tests in the same process. If a second call panicked or errored, reruns
/// inside one process would crash.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are
/// removed, causing fern to panic when trying to set a global logger twice.
#[test]
#[serial]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A directory the logger can actually write into
    let temp_dir = std::env::temp_dir().join("userdesk-test-logger-1");
    std::fs::create_dir_all(&temp_dir).unwrap();

    // WHEN: Initializing twice in a row
    let result1 = initialize(&temp_dir, false);
    let result2 = initialize(&temp_dir, false);

    // THEN: Both return Ok (a repeat call warns but does not error)
    assert!(result1.is_ok(), "first initialization should succeed");
    assert!(result2.is_ok(), "repeat initialization should be a no-op");

    std::fs::remove_dir_all(&temp_dir).ok();
}
