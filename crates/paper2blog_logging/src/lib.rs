#![deny(missing_docs)]
//! Shared logging utilities for the paper2blog workspace.
//!
//! This crate provides the `form_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every record is
//! tagged with the number of the submission currently being processed on this
//! thread, so the lines of one submit cycle can be grepped out of a log file.

use std::cell::Cell;

/// Log target shared by every `form_*` macro.
pub const TARGET: &str = "paper2blog";

thread_local! {
    /// Thread-local storage for the current submission number.
    static SUBMISSION: Cell<u64> = const { Cell::new(0) };
}

/// Sets the submission number for the current thread.
/// The controller calls this once each time a submit passes validation.
pub fn set_submission(seq: u64) {
    SUBMISSION.with(|v| v.set(seq));
}

/// Retrieves the submission number for the current thread.
/// Returns 0 before the first submission.
pub fn current_submission() -> u64 {
    SUBMISSION.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! form_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: $crate::TARGET, "[sub {}] {}", $crate::current_submission(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! form_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: $crate::TARGET, "[sub {}] {}", $crate::current_submission(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! form_info {
    ($($arg:tt)*) => {{
        log::info!(target: $crate::TARGET, "[sub {}] {}", $crate::current_submission(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! form_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: $crate::TARGET, "[sub {}] {}", $crate::current_submission(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! form_error {
    ($($arg:tt)*) => {{
        log::error!(target: $crate::TARGET, "[sub {}] {}", $crate::current_submission(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may already own the global logger.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Never,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_number_is_per_thread() {
        set_submission(7);
        assert_eq!(current_submission(), 7);

        let other = std::thread::spawn(current_submission).join().unwrap();
        assert_eq!(other, 0);
    }
}
