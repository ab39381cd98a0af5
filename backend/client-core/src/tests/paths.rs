// Unit tests for userdesk path detection

use crate::session::paths::{detect_userdesk_paths, PathSource};

use std::env;

use serial_test::serial;

/// **VALUE**: Verifies USERDESK_DATA_DIR relocates everything.
///
/// **WHY THIS MATTERS**: The override is how tests, containers, and
/// multi-profile setups isolate their session and config state. If it is
/// ignored, those environments silently share the real user directories.
#[test]
#[serial]
fn given_env_override_when_detect_then_uses_that_directory() {
    let dir = tempfile::tempdir().unwrap();
    // SAFETY: #[serial] keeps env mutation off concurrent test threads
    unsafe { env::set_var("USERDESK_DATA_DIR", dir.path()) };

    let paths = detect_userdesk_paths().unwrap();

    unsafe { env::remove_var("USERDESK_DATA_DIR") };

    assert_eq!(paths.source, PathSource::EnvVar);
    assert_eq!(paths.data_dir, dir.path());
    assert_eq!(paths.config_dir, dir.path());
    assert_eq!(paths.session_file, dir.path().join("session.json"));
}

#[test]
#[serial]
fn given_no_override_when_detect_then_platform_paths() {
    // SAFETY: #[serial] keeps env mutation off concurrent test threads
    unsafe { env::remove_var("USERDESK_DATA_DIR") };

    let paths = detect_userdesk_paths().unwrap();

    assert_ne!(paths.source, PathSource::EnvVar);
    assert!(paths.data_dir.ends_with("userdesk"));
    assert!(paths.session_file.ends_with("session.json"));
}

#[test]
fn given_path_sources_when_displayed_then_stable_labels() {
    assert_eq!(PathSource::EnvVar.to_string(), "USERDESK_DATA_DIR");
    assert_eq!(PathSource::PlatformDefault.to_string(), "platform default");
    assert_eq!(PathSource::LinuxFallback.to_string(), "Linux fallback");
}
