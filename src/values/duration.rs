//! Checks over a captured [`std::time::Duration`].

#![allow(missing_docs)]

use std::sync::Arc;
use std::time::Duration;

use crate::assertion::chain::{Chain, Context};
use crate::assertion::failure::{AssertType, Failure};
use crate::assertion::reporter::Reporter;

const IS_SET: &str = "Duration.IsSet";

/// Fluent checks over an optional [`Duration`].
///
/// Every method returns the same wrapper, so checks can be chained whether or
/// not earlier ones held. Comparisons on an absent value report one `IsSet`
/// failure and skip the comparison itself.
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use fluent_expect::assertion::reporter::RecordingReporter;
/// use fluent_expect::values::duration::DurationExpect;
///
/// let reporter = Arc::new(RecordingReporter::new());
/// DurationExpect::new(reporter.clone(), Duration::from_secs(120))
///     .is_set()
///     .gt(Duration::from_secs(60))
///     .in_range(Duration::from_secs(60), Duration::from_secs(3600));
/// assert!(!reporter.reported());
/// ```
#[derive(Debug)]
pub struct DurationExpect {
    chain: Chain,
    value: Option<Duration>,
}

impl DurationExpect {
    /// Wrap `value` with a default handler around `reporter`.
    ///
    /// Pass `None` for an absent value.
    pub fn new(reporter: Arc<dyn Reporter>, value: impl Into<Option<Duration>>) -> Self {
        Self {
            chain: Chain::from_reporter(reporter),
            value: value.into(),
        }
    }

    /// Wrap `value` with a fresh chain bound to an existing context.
    pub fn with_context(context: Arc<Context>, value: impl Into<Option<Duration>>) -> Self {
        Self {
            chain: Chain::new(context),
            value: value.into(),
        }
    }

    /// The captured value, or [`Duration::ZERO`] when absent.
    pub fn raw(&self) -> Duration {
        self.value.unwrap_or_default()
    }

    pub const fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Succeeds if a value is present.
    pub fn is_set(&mut self) -> &mut Self {
        let check = Failure::new(IS_SET, AssertType::IsSet);
        self.chain.check(self.value.is_some(), &check);
        self
    }

    /// Succeeds if no value is present.
    pub fn not_set(&mut self) -> &mut Self {
        let mut check = Failure::new("Duration.NotSet", AssertType::NotSet);
        if let Some(actual) = self.value {
            check = check.actual(actual);
        }
        self.chain.check(self.value.is_none(), &check);
        self
    }

    /// Succeeds if the value equals `value`.
    ///
    /// ```
    /// # use std::sync::Arc;
    /// # use std::time::Duration;
    /// # use fluent_expect::assertion::reporter::RecordingReporter;
    /// # use fluent_expect::values::duration::DurationExpect;
    /// let reporter = Arc::new(RecordingReporter::new());
    /// let mut d = DurationExpect::new(reporter.clone(), Duration::from_secs(1));
    /// d.equal(Duration::from_secs(1));
    /// assert!(!d.chain().failed());
    /// ```
    pub fn equal(&mut self, value: Duration) -> &mut Self {
        self.compare("Duration.Equal", AssertType::Equal, value, |a, e| a == e)
    }

    pub fn not_equal(&mut self, value: Duration) -> &mut Self {
        self.compare("Duration.NotEqual", AssertType::NotEqual, value, |a, e| {
            a != e
        })
    }

    /// Strictly greater than `value`.
    pub fn gt(&mut self, value: Duration) -> &mut Self {
        self.compare("Duration.Gt", AssertType::Gt, value, |a, e| a > e)
    }

    pub fn ge(&mut self, value: Duration) -> &mut Self {
        self.compare("Duration.Ge", AssertType::Ge, value, |a, e| a >= e)
    }

    /// Strictly less than `value`.
    pub fn lt(&mut self, value: Duration) -> &mut Self {
        self.compare("Duration.Lt", AssertType::Lt, value, |a, e| a < e)
    }

    pub fn le(&mut self, value: Duration) -> &mut Self {
        self.compare("Duration.Le", AssertType::Le, value, |a, e| a <= e)
    }

    /// Succeeds if `min <= value <= max`.
    ///
    /// ```
    /// # use std::sync::Arc;
    /// # use std::time::Duration;
    /// # use fluent_expect::assertion::reporter::RecordingReporter;
    /// # use fluent_expect::values::duration::DurationExpect;
    /// let minute = Duration::from_secs(60);
    /// let reporter = Arc::new(RecordingReporter::new());
    /// DurationExpect::new(reporter.clone(), minute)
    ///     .in_range(Duration::from_secs(1), Duration::from_secs(3600))
    ///     .in_range(minute, minute);
    /// assert!(!reporter.reported());
    /// ```
    pub fn in_range(&mut self, min: Duration, max: Duration) -> &mut Self {
        const NAME: &str = "Duration.InRange";
        let Some(actual) = self.present() else {
            return self;
        };
        let check = Failure::new(NAME, AssertType::InRange)
            .expected_range(min, max)
            .actual(actual);
        self.chain.check(min <= actual && actual <= max, &check);
        self
    }

    // Presence guard shared by every comparison: the same failure `is_set`
    // reports, without the success notification.
    fn present(&mut self) -> Option<Duration> {
        if self.value.is_none() {
            self.chain.fail(&Failure::new(IS_SET, AssertType::IsSet));
        }
        self.value
    }

    fn compare(
        &mut self,
        assertion_name: &str,
        assert_type: AssertType,
        expected: Duration,
        holds: impl FnOnce(Duration, Duration) -> bool,
    ) -> &mut Self {
        let Some(actual) = self.present() else {
            return self;
        };
        let check = Failure::new(assertion_name, assert_type)
            .expected(expected)
            .actual(actual);
        self.chain.check(holds(actual, expected), &check);
        self
    }
}
