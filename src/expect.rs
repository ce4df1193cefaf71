//! Entry point binding one [`Context`] and handing out value wrappers.

#![allow(missing_docs)]

use std::sync::Arc;
use std::time::Duration;

use crate::assertion::chain::Context;
use crate::assertion::reporter::Reporter;
use crate::core::config::Config;
use crate::values::duration::DurationExpect;

/// Factory for value wrappers that share one handler and test name.
///
/// Each wrapper it creates gets its own chain; a failure in one wrapper never
/// marks another as failed.
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use fluent_expect::prelude::*;
///
/// let reporter = Arc::new(RecordingReporter::new());
/// let e = Expect::new(reporter.clone());
/// e.duration(Duration::from_secs(120))
///     .in_range(Duration::from_secs(60), Duration::from_secs(3600));
/// e.duration(None).not_set();
/// assert!(!reporter.reported());
/// ```
#[derive(Debug, Clone)]
pub struct Expect {
    context: Arc<Context>,
}

impl Expect {
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self::with_context(Arc::new(Context::from_reporter(reporter)))
    }

    pub const fn with_context(context: Arc<Context>) -> Self {
        Self { context }
    }

    /// Build from configuration: reporter policy, formatter and check log.
    pub fn from_config(config: &Config, test_name: impl Into<String>) -> Self {
        let handler = config.build_handler(config.reporter());
        let context = Context::new(Arc::new(handler)).with_test_name(test_name);
        Self::with_context(Arc::new(context))
    }

    pub const fn context(&self) -> &Arc<Context> {
        &self.context
    }

    pub fn duration(&self, value: impl Into<Option<Duration>>) -> DurationExpect {
        DurationExpect::with_context(Arc::clone(&self.context), value)
    }
}
