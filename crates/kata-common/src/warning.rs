//! Diagnostics with coloured terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector and exercise crates to report input that is accepted
//! but probably not what the caller meant.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Lock the warning set. A poisoned lock still holds a usable set, so the
/// guard is recovered instead of propagating the panic.
fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about questionable input (prints once per unique message)
///
/// # Example
/// ```
/// use kata_common::warning::{has_warned, warn_once};
///
/// warn_once("Selector", "unrecognized combinator rendered verbatim");
/// assert!(has_warned("Selector", "unrecognized combinator rendered verbatim"));
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        let line = format!("[Kata {component}] ⚠ {message}");
        eprintln!("{}", line.yellow());
    }
}

/// Whether `warn_once` has been called with this component and message
/// since the last [`clear_warnings`].
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
