//! Tests for the deduplicating warning printer.

use wren_common::warning::{clear_warnings, warn_once, warning_count};

// The warning set is process-wide, so everything lives in one test to keep
// the assertions independent of test scheduling.
#[test]
fn test_warn_once_deduplicates_and_clears() {
    clear_warnings();
    assert_eq!(warning_count(), 0);

    warn_once("Tokenizer", "1:1 unterminated comment");
    warn_once("Tokenizer", "1:1 unterminated comment");
    assert_eq!(warning_count(), 1);

    // Same message from another component is a distinct warning.
    warn_once("Entities", "1:1 unterminated comment");
    assert_eq!(warning_count(), 2);

    clear_warnings();
    assert_eq!(warning_count(), 0);

    warn_once("Tokenizer", "1:1 unterminated comment");
    assert_eq!(warning_count(), 1);
    clear_warnings();
}
