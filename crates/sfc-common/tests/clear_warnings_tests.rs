//! Tests for resetting the warning set.
//!
//! Kept in its own test binary because clearing the global set would race
//! with the assertions in `warning_tests.rs`.

use sfc_common::warning::{clear_warnings, has_warned, warn_once};

#[test]
fn test_clear_warnings() {
    warn_once("Clear", "to be forgotten");
    assert!(has_warned("Clear", "to be forgotten"));

    clear_warnings();
    assert!(!has_warned("Clear", "to be forgotten"));

    // Once cleared, the same message is reported again.
    warn_once("Clear", "to be forgotten");
    assert!(has_warned("Clear", "to be forgotten"));
}
