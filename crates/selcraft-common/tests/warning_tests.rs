//! Integration tests for the deduplicated warning system.

use std::sync::Mutex;

use selcraft_common::{clear_warnings, has_warned, set_quiet, warn_once};

/// The warning set is process-wide; tests touching it run one at a time.
static SERIAL: Mutex<()> = Mutex::new(());

#[test]
fn test_warn_once_records_message() {
    let _guard = SERIAL.lock().unwrap();
    set_quiet(true);

    assert!(!has_warned("Test", "first message"));
    warn_once("Test", "first message");
    assert!(has_warned("Test", "first message"));
}

#[test]
fn test_warnings_are_keyed_by_component() {
    let _guard = SERIAL.lock().unwrap();
    set_quiet(true);

    warn_once("Selector", "shared text");
    assert!(has_warned("Selector", "shared text"));
    assert!(!has_warned("CLI", "shared text"));
}

#[test]
fn test_repeated_warning_is_idempotent() {
    let _guard = SERIAL.lock().unwrap();
    set_quiet(true);

    warn_once("Test", "repeated");
    warn_once("Test", "repeated");
    assert!(has_warned("Test", "repeated"));
}

#[test]
fn test_clear_warnings() {
    let _guard = SERIAL.lock().unwrap();
    set_quiet(true);

    warn_once("Test", "to be cleared");
    assert!(has_warned("Test", "to be cleared"));

    clear_warnings();
    assert!(!has_warned("Test", "to be cleared"));
}
