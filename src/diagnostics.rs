//! Stderr diagnostics.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress (or re-enable) warnings for the rest of the process.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a `WARN:` line to stderr unless quiet.
pub fn warn(msg: impl AsRef<str>) {
    if !is_quiet() {
        eprintln!("WARN: {}", msg.as_ref());
    }
}

/// Prefix a message with the path/line it refers to.
pub fn at_line(path: &str, lineno: usize, msg: impl AsRef<str>) -> String {
    format!("{}:{}: {}", path, lineno, msg.as_ref())
}
