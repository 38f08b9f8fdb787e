//! Tokenizer diagnostics with colored terminal output.
//!
//! Provides deduplication so a document that repeats the same mistake does not
//! flood the terminal. Used by the console plugin in `wren-html` and by the CLI.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Print a diagnostic once per unique `(component, message)` pair.
///
/// # Example
/// ```ignore
/// warn_once("Tokenizer", "1:5 unterminated start tag <div>");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if remember(component, message) {
        let label = format!("[Wren {component}] ⚠");
        eprintln!("{} {}", label.yellow().bold(), message.yellow());
    }
}

/// Record a warning key; returns `true` the first time it is seen.
fn remember(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Number of distinct warnings printed since the last [`clear_warnings`].
#[must_use]
pub fn warning_count() -> usize {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map_or(0, HashSet::len)
}

/// Clear all recorded warnings (call before tokenizing a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
