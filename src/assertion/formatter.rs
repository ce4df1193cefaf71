//! Renderers turning a [`Failure`] into the text handed to a reporter.

#![allow(missing_docs)]

use std::fmt::Write as _;

#[cfg(feature = "color")]
use colored::Colorize;

use super::chain::Context;
use super::failure::{AssertType, Failure, Payload};

/// Pure renderer from a failure to message text.
pub trait Formatter: Send + Sync {
    fn render(&self, ctx: &Context, failure: &Failure) -> String;
}

/// Multi-line human-readable diagnostic.
///
/// ```text
/// assertion failed: Duration.Gt
/// test name: my_test
/// expected: value greater than 1m0s
/// actual: 1m0s
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFormatter {
    /// Highlight the header with ANSI colors. Ignored without the `color` feature.
    pub colorize: bool,
}

impl DefaultFormatter {
    #[must_use]
    pub const fn colored() -> Self {
        Self { colorize: true }
    }

    fn header(&self, name: &str) -> String {
        let text = format!("assertion failed: {name}");
        #[cfg(feature = "color")]
        if self.colorize {
            return text.red().bold().to_string();
        }
        text
    }
}

impl Formatter for DefaultFormatter {
    fn render(&self, ctx: &Context, failure: &Failure) -> String {
        let mut out = self.header(failure.assertion_name());
        if !ctx.test_name().is_empty() {
            let _ = write!(out, "\ntest name: {}", ctx.test_name());
        }
        let _ = write!(out, "\nexpected: {}", describe_expectation(failure));
        match failure.assert_type() {
            AssertType::IsSet => out.push_str("\nactual: <unset>"),
            _ => {
                let _ = write!(out, "\nactual: {}", operand(failure.actual_value()));
            }
        }
        out
    }
}

fn describe_expectation(failure: &Failure) -> String {
    let expected = operand(failure.expected_value());
    match failure.assert_type() {
        AssertType::Equal => format!("value equal to {expected}"),
        AssertType::NotEqual => format!("value not equal to {expected}"),
        AssertType::Gt => format!("value greater than {expected}"),
        AssertType::Ge => format!("value greater than or equal to {expected}"),
        AssertType::Lt => format!("value less than {expected}"),
        AssertType::Le => format!("value less than or equal to {expected}"),
        AssertType::InRange => match failure.expected_range_values() {
            Some((min, max)) => format!("value in range [{min}; {max}]"),
            None => "value in range <none>".to_string(),
        },
        AssertType::IsSet => "value is set".to_string(),
        AssertType::NotSet => "value is not set".to_string(),
    }
}

fn operand(value: Option<&Payload>) -> String {
    value.map_or_else(|| "<none>".to_string(), ToString::to_string)
}

/// One JSON object per failure, for machine consumers.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn render(&self, ctx: &Context, failure: &Failure) -> String {
        let value = serde_json::json!({
            "test_name": ctx.test_name(),
            "failure": failure,
        });
        serde_json::to_string(&value).unwrap_or_else(|_| format!("{failure:?}"))
    }
}
