// SPDX-License-Identifier: AGPL-3.0

//! Logging setup and console diagnostics
//!
//! Library crates emit `tracing` events; binaries call [`init_tracing`] once.
//! The `warn`/`error` helpers print straight to the console and can suppress
//! repeats of the same message.

use colored::*;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing_subscriber::EnvFilter;

use zwrap_exceptions::ValueError;

/// Default filter directive for a `-v` count
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `verbosity` when set. Returns `false` if a subscriber
/// was already installed.
pub fn init_tracing(verbosity: u8, json: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

/// Messages already printed by [`warn_unique`]
static UNIQUE_MESSAGES: Lazy<Mutex<HashSet<String>>> = Lazy::new(|| Mutex::new(HashSet::new()));

fn messages() -> MutexGuard<'static, HashSet<String>> {
    UNIQUE_MESSAGES.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Whether `message` has already been printed once
pub fn is_logged(message: &str) -> bool {
    messages().contains(message)
}

/// Record `message`; returns whether it should be printed
fn should_print(message: &str, allow_duplicate: bool) -> bool {
    allow_duplicate || messages().insert(message.to_string())
}

pub fn warn(text: &str, allow_duplicate: bool) {
    if should_print(text, allow_duplicate) {
        eprintln!("{}", text.yellow());
    }
}

pub fn error(text: &str, allow_duplicate: bool) {
    if should_print(text, allow_duplicate) {
        eprintln!("{}", text.red());
    }
}

/// Warn once per process; repeats of the same text are dropped
pub fn warn_unique(text: &str) {
    warn(text, false);
}

/// Console line for a value error, tagged with its kind
pub fn describe(err: &ValueError) -> String {
    format!("[{}] {}", err.kind().name(), err)
}

/// Print a value error in red
pub fn report_error(err: &ValueError) {
    error(&describe(err), true);
}

#[cfg(test)]
mod tests {
    use super::*;

    // the message set is global, so each test uses its own texts

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(9), "trace");
    }

    #[test]
    fn test_unique_logging() {
        let msg = "test unique message";
        assert!(!is_logged(msg));

        warn(msg, false);
        assert!(is_logged(msg));
        assert!(!should_print(msg, false));
        assert!(should_print(msg, true));
    }

    #[test]
    fn test_allow_duplicate_does_not_record() {
        let msg = "duplicate message";
        error(msg, true);
        assert!(!is_logged(msg));
        warn_unique(msg);
        assert!(is_logged(msg));
    }

    #[test]
    fn test_report_error_is_never_deduplicated() {
        let err = ValueError::overflow("300 does not fit in u8");
        report_error(&err);
        assert!(!is_logged(&describe(&err)));
    }

    #[test]
    fn test_describe() {
        let err = ValueError::division("Division by zero is not allowed");
        assert_eq!(
            describe(&err),
            "[division] Division by zero: Division by zero is not allowed"
        );

        let err = ValueError::SizeMismatch { left: 8, right: 32 };
        assert_eq!(describe(&err), "[argument] BitVec size mismatch: 8 != 32");
    }

    #[test]
    fn test_init_tracing_only_once() {
        let first = init_tracing(0, false);
        let second = init_tracing(2, true);
        assert!(!second || !first);
    }
}
