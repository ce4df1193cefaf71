//! Turns an evaluated check into a diagnostic: format, optionally log, report.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use super::chain::Context;
use super::failure::Failure;
use super::formatter::{DefaultFormatter, Formatter};
use super::reporter::Reporter;
use crate::logger::jsonl::{JsonlWriter, LogEntry};

/// Receives every evaluated check of the chains bound to a [`Context`].
pub trait AssertionHandler: Send + Sync {
    /// A check was violated. Called once per violation, including repeated
    /// violations on an already-failed chain.
    fn failure(&self, ctx: &Context, failure: &Failure);

    /// A check held. `check` describes what was evaluated.
    fn success(&self, _ctx: &Context, _check: &Failure) {}
}

/// Formats with a [`Formatter`] and hands the text to a [`Reporter`].
///
/// With a check log attached, every evaluated check is also appended to it,
/// passes included.
pub struct DefaultAssertionHandler {
    formatter: Box<dyn Formatter>,
    reporter: Arc<dyn Reporter>,
    log: Option<Mutex<JsonlWriter>>,
}

impl DefaultAssertionHandler {
    /// Handler using [`DefaultFormatter`] and no check log.
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self {
            formatter: Box::new(DefaultFormatter::default()),
            reporter,
            log: None,
        }
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    #[must_use]
    pub fn with_log(mut self, writer: JsonlWriter) -> Self {
        self.log = Some(Mutex::new(writer));
        self
    }

    pub fn reporter(&self) -> &Arc<dyn Reporter> {
        &self.reporter
    }
}

impl fmt::Debug for DefaultAssertionHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultAssertionHandler")
            .field("log", &self.log.is_some())
            .finish_non_exhaustive()
    }
}

impl AssertionHandler for DefaultAssertionHandler {
    fn failure(&self, ctx: &Context, failure: &Failure) {
        let message = self.formatter.render(ctx, failure);
        // Log first: the reporter may abort the test.
        if let Some(log) = &self.log {
            log.lock()
                .write_entry(&LogEntry::failed(ctx.test_name(), failure, message.clone()));
        }
        self.reporter.report(format_args!("{message}"));
    }

    fn success(&self, ctx: &Context, check: &Failure) {
        if let Some(log) = &self.log {
            log.lock()
                .write_entry(&LogEntry::passed(ctx.test_name(), check));
        }
    }
}
