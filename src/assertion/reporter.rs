//! Sinks for rendered failure messages.
//!
//! Whether a reported failure aborts the test or only gets recorded is the
//! reporter's decision; chains and wrappers behave the same either way.

#![allow(missing_docs)]

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;

/// Accepts rendered failure messages.
///
/// May be called any number of times per test. Implementations must not
/// fail on their own; [`PanicReporter`] panicking is its deliberate policy.
pub trait Reporter: Send + Sync {
    fn report(&self, args: fmt::Arguments<'_>);
}

/// Record and abort: panics with the message, failing the running test.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicReporter;

impl Reporter for PanicReporter {
    fn report(&self, args: fmt::Arguments<'_>) {
        panic!("{args}");
    }
}

/// Record and continue: writes each message to stderr, where the test
/// harness captures it, and remembers that a failure happened.
#[derive(Debug, Default)]
pub struct LogReporter {
    reported: AtomicUsize,
}

impl LogReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any message was reported.
    pub fn reported(&self) -> bool {
        self.count() > 0
    }

    pub fn count(&self) -> usize {
        self.reported.load(Ordering::Relaxed)
    }
}

impl Reporter for LogReporter {
    fn report(&self, args: fmt::Arguments<'_>) {
        self.reported.fetch_add(1, Ordering::Relaxed);
        // eprintln! rather than io::stderr() so the test harness captures it.
        eprintln!("Fail: {args}");
    }
}

/// Reporter double: keeps every message for later inspection.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<String>>,
    echo: AtomicBool,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also relay each message to stderr.
    #[must_use]
    pub fn with_echo(self) -> Self {
        self.echo.store(true, Ordering::Relaxed);
        self
    }

    pub fn reported(&self) -> bool {
        !self.messages.lock().is_empty()
    }

    pub fn count(&self) -> usize {
        self.messages.lock().len()
    }

    /// Snapshot of all messages reported so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, args: fmt::Arguments<'_>) {
        let message = args.to_string();
        if self.echo.load(Ordering::Relaxed) {
            eprintln!("Fail: {message}");
        }
        self.messages.lock().push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_reporter_keeps_messages_in_order() {
        let reporter = RecordingReporter::new();
        assert!(!reporter.reported());

        reporter.report(format_args!("first {}", 1));
        reporter.report(format_args!("second"));

        assert!(reporter.reported());
        assert_eq!(reporter.count(), 2);
        assert_eq!(reporter.messages(), vec!["first 1", "second"]);

        reporter.clear();
        assert!(!reporter.reported());
    }

    #[test]
    fn echoing_recorder_still_records() {
        let reporter = RecordingReporter::new().with_echo();
        assert!(reporter.echo.load(Ordering::Relaxed));
        assert!(!RecordingReporter::new().echo.load(Ordering::Relaxed));

        reporter.report(format_args!("late by {}ms", 40));
        assert_eq!(reporter.messages(), vec!["late by 40ms"]);
    }

    #[test]
    fn log_reporter_counts_without_aborting() {
        let reporter = LogReporter::new();
        reporter.report(format_args!("one"));
        reporter.report(format_args!("two"));
        assert!(reporter.reported());
        assert_eq!(reporter.count(), 2);
    }

    #[test]
    #[should_panic(expected = "boom 7")]
    fn panic_reporter_aborts() {
        PanicReporter.report(format_args!("boom {}", 7));
    }
}
