//! Parser warnings with colored terminal output.
//!
//! Provides deduplication so a document full of the same oddity only
//! reports it once. Used by the tokenizer for recoverable conditions such
//! as an attribute being declared twice on one tag.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Lock the warning set. A poisoned lock still holds a usable set.
fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about a recoverable condition (prints once per unique message)
///
/// # Example
/// ```
/// use sfc_common::warning::warn_once;
///
/// warn_once("Tokenizer", "duplicate attribute 'lang' on <script>");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{YELLOW}[SFC {component}] ⚠ {message}{RESET}");
    }
}

/// Whether `warn_once` has already reported this message.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings (call between unrelated documents)
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
