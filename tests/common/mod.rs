#![allow(dead_code)]

use std::sync::Arc;

use fluent_expect::prelude::*;
use parking_lot::Mutex;

/// Handler double keeping every evaluated check in structured form.
#[derive(Default)]
pub struct CaptureHandler {
    pub failures: Mutex<Vec<Failure>>,
    pub passes: Mutex<Vec<Failure>>,
}

impl AssertionHandler for CaptureHandler {
    fn failure(&self, _ctx: &Context, failure: &Failure) {
        self.failures.lock().push(failure.clone());
    }

    fn success(&self, _ctx: &Context, check: &Failure) {
        self.passes.lock().push(check.clone());
    }
}

impl CaptureHandler {
    pub fn failure_kinds(&self) -> Vec<AssertType> {
        self.failures
            .lock()
            .iter()
            .map(Failure::assert_type)
            .collect()
    }
}

pub fn capturing_expect(test_name: &str) -> (Expect, Arc<CaptureHandler>) {
    let handler = Arc::new(CaptureHandler::default());
    let ctx = Context::new(handler.clone()).with_test_name(test_name);
    (Expect::with_context(Arc::new(ctx)), handler)
}

pub fn recording_expect() -> (Expect, Arc<RecordingReporter>) {
    let reporter = Arc::new(RecordingReporter::new());
    (Expect::new(reporter.clone()), reporter)
}
