use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies `ErrorLocation::from()` records the capture site.
///
/// **WHY THIS MATTERS**: Every error in the workspace appends one of these.
/// If the captured data goes wrong, each error message points somewhere
/// misleading and loses its debugging value.
///
/// **BUG THIS CATCHES**: `Location::caller()` no longer reaching the
/// constructor, or the file/line/column fields getting crossed.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN/WHEN: Capturing the current call site
    let location = ErrorLocation::from(Location::caller());

    // THEN: This file, this line
    assert!(
        location.file.contains("error_location.rs"),
        "file path should name this test file"
    );
    assert_eq!(location.line, 15, "line should match the capture site");
    assert!(location.column > 0, "column should be recorded");
}

/// **VALUE**: Verifies that the `caller()` shorthand records the invoking line,
/// not a line inside the helper itself.
///
/// **WHY THIS MATTERS**: All error constructors use `ErrorLocation::caller()`. If the
/// `#[track_caller]` attribute were dropped from the helper, every recorded location
/// would point at `error_location.rs` in `src/error/` and become useless for debugging.
///
/// **BUG THIS CATCHES**: Would catch removal of `#[track_caller]` from `caller()`.
#[test]
fn given_caller_helper_when_invoked_then_records_invoking_site() {
    // GIVEN / WHEN: Capturing through the shorthand
    let location = ErrorLocation::caller();

    // THEN: Should point at this test file, not the helper's definition
    assert!(
        location.file.contains("tests/error_location.rs"),
        "Should record the invoking file, got {}",
        location.file
    );
}

/// **VALUE**: Verifies that ErrorLocation Display produces the `[file:line:column]` format.
///
/// **WHY THIS MATTERS**: Locations are appended to every error message. If the format
/// breaks, log lines lose the position information operators grep for.
///
/// **BUG THIS CATCHES**: Would catch if the Display implementation drops the brackets
/// or one of the three components.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: A captured location
    let location = ErrorLocation::caller();

    // WHEN: Rendering it for an error message
    let formatted = format!("{}", location);

    // THEN: Bracketed, with all three components present
    assert!(formatted.starts_with('['), "should open with '['");
    assert!(formatted.ends_with(']'), "should close with ']'");
    assert!(
        formatted.contains("error_location.rs"),
        "should include the filename"
    );
    assert!(
        formatted.contains(&location.line.to_string()),
        "should include the line number"
    );
}
