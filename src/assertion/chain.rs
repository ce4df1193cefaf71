//! Per-assertion-root failure state.
//!
//! A [`Context`] binds an [`AssertionHandler`] to one test and is shared by
//! every chain created in that test. A [`Chain`] belongs to exactly one value
//! wrapper and tracks whether any of its checks failed. The `failed` flag only
//! ever moves from `false` to `true`.

#![allow(missing_docs)]

use std::fmt;
use std::sync::Arc;
use std::thread;

use super::failure::Failure;
use super::handler::{AssertionHandler, DefaultAssertionHandler};
use super::reporter::Reporter;

/// Handler plus test identity, shared read-only by every chain of one test.
pub struct Context {
    handler: Arc<dyn AssertionHandler>,
    test_name: String,
}

impl Context {
    /// The test name defaults to the current thread name, which the Rust test
    /// harness sets to the test path.
    pub fn new(handler: Arc<dyn AssertionHandler>) -> Self {
        Self {
            handler,
            test_name: current_test_name(),
        }
    }

    /// Context with a [`DefaultAssertionHandler`] around `reporter`.
    pub fn from_reporter(reporter: Arc<dyn Reporter>) -> Self {
        Self::new(Arc::new(DefaultAssertionHandler::new(reporter)))
    }

    #[must_use]
    pub fn with_test_name(mut self, test_name: impl Into<String>) -> Self {
        self.test_name = test_name.into();
        self
    }

    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    pub fn handler(&self) -> &dyn AssertionHandler {
        self.handler.as_ref()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("test_name", &self.test_name)
            .finish_non_exhaustive()
    }
}

fn current_test_name() -> String {
    thread::current()
        .name()
        .filter(|name| *name != "main")
        .unwrap_or_default()
        .to_string()
}

/// Failure state of one assertion root. Not `Clone`: a chain is never shared.
#[derive(Debug)]
pub struct Chain {
    context: Arc<Context>,
    failed: bool,
}

impl Chain {
    pub fn new(context: Arc<Context>) -> Self {
        Self {
            context,
            failed: false,
        }
    }

    pub fn from_reporter(reporter: Arc<dyn Reporter>) -> Self {
        Self::new(Arc::new(Context::from_reporter(reporter)))
    }

    /// Mark the chain failed and hand `failure` to the handler.
    ///
    /// The flag is set before delegating, so a reporter that aborts the test
    /// still leaves the chain failed.
    pub fn fail(&mut self, failure: &Failure) {
        self.failed = true;
        self.context.handler.failure(&self.context, failure);
    }

    /// Tell the handler that `check` held. Never touches the flag.
    pub fn succeed(&self, check: &Failure) {
        self.context.handler.success(&self.context, check);
    }

    /// Route `check` to [`Chain::succeed`] or [`Chain::fail`]. Returns `holds`.
    pub fn check(&mut self, holds: bool, check: &Failure) -> bool {
        if holds {
            self.succeed(check);
        } else {
            self.fail(check);
        }
        holds
    }

    pub const fn failed(&self) -> bool {
        self.failed
    }

    pub const fn context(&self) -> &Arc<Context> {
        &self.context
    }
}
