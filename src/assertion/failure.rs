//! Structured description of one evaluated check: which assertion, which kind
//! of relation, and the operands involved.

#![allow(missing_docs)]

use std::fmt::{self, Write as _};
use std::time::Duration;

use serde::Serialize;

/// Closed set of check kinds. Every reportable condition maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssertType {
    /// `actual == expected`.
    Equal,
    /// `actual != expected`.
    NotEqual,
    /// `actual > expected`.
    Gt,
    /// `actual >= expected`.
    Ge,
    /// `actual < expected`.
    Lt,
    /// `actual <= expected`.
    Le,
    /// `min <= actual <= max`, both bounds inclusive.
    InRange,
    /// A value must be present.
    IsSet,
    /// A value must be absent.
    NotSet,
}

impl AssertType {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Equal,
        Self::NotEqual,
        Self::Gt,
        Self::Ge,
        Self::Lt,
        Self::Le,
        Self::InRange,
        Self::IsSet,
        Self::NotSet,
    ];

    /// Stable snake_case name, identical to the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::NotEqual => "not_equal",
            Self::Gt => "gt",
            Self::Ge => "ge",
            Self::Lt => "lt",
            Self::Le => "le",
            Self::InRange => "in_range",
            Self::IsSet => "is_set",
            Self::NotSet => "not_set",
        }
    }
}

impl fmt::Display for AssertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Typed operand carried by a [`Failure`]. One variant per wrapped value type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Payload {
    Duration(Duration),
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duration(d) => f.write_str(&format_duration(*d)),
        }
    }
}

impl From<Duration> for Payload {
    fn from(value: Duration) -> Self {
        Self::Duration(value)
    }
}

/// One evaluated check.
///
/// Built with [`Failure::new`] and the builder methods, then handed to a
/// chain. Immutable once handed over.
///
/// Which operands are populated depends on the kind:
///
/// | kind            | expected | actual | expected_range |
/// |-----------------|----------|--------|----------------|
/// | `Equal`..`Le`   | yes      | yes    | no             |
/// | `InRange`       | no       | yes    | yes            |
/// | `IsSet`         | no       | no     | no             |
/// | `NotSet`        | no       | yes    | no             |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    assertion_name: String,
    assert_type: AssertType,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected: Option<Payload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual: Option<Payload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected_range: Option<(Payload, Payload)>,
}

impl Failure {
    /// Start describing a check named `<Type>.<Method>`.
    #[must_use]
    pub fn new(assertion_name: impl Into<String>, assert_type: AssertType) -> Self {
        Self {
            assertion_name: assertion_name.into(),
            assert_type,
            expected: None,
            actual: None,
            expected_range: None,
        }
    }

    #[must_use]
    pub fn expected(mut self, value: impl Into<Payload>) -> Self {
        self.expected = Some(value.into());
        self
    }

    #[must_use]
    pub fn actual(mut self, value: impl Into<Payload>) -> Self {
        self.actual = Some(value.into());
        self
    }

    #[must_use]
    pub fn expected_range(mut self, min: impl Into<Payload>, max: impl Into<Payload>) -> Self {
        self.expected_range = Some((min.into(), max.into()));
        self
    }

    pub fn assertion_name(&self) -> &str {
        &self.assertion_name
    }

    pub const fn assert_type(&self) -> AssertType {
        self.assert_type
    }

    pub const fn expected_value(&self) -> Option<&Payload> {
        self.expected.as_ref()
    }

    pub const fn actual_value(&self) -> Option<&Payload> {
        self.actual.as_ref()
    }

    pub fn expected_range_values(&self) -> Option<(&Payload, &Payload)> {
        self.expected_range.as_ref().map(|(min, max)| (min, max))
    }
}

/// Render a duration compactly: `0s`, `250ms`, `1.5s`, `2m0s`, `1h0m30s`.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < 1_000 {
        return format!("{nanos}ns");
    }
    if nanos < 1_000_000 {
        return format!("{}µs", decimal(nanos, 1_000));
    }
    if nanos < 1_000_000_000 {
        return format!("{}ms", decimal(nanos, 1_000_000));
    }

    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = u128::from(total_secs % 60) * 1_000_000_000
        + u128::from(duration.subsec_nanos());

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    let _ = write!(out, "{}s", decimal(seconds, 1_000_000_000));
    out
}

/// `value / unit` as a decimal with trailing zeros of the fraction removed.
fn decimal(value: u128, unit: u128) -> String {
    let whole = value / unit;
    let frac = value % unit;
    if frac == 0 {
        return whole.to_string();
    }
    let width = usize::try_from(unit.ilog10()).unwrap_or(9);
    let digits = format!("{frac:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique_and_match_serde() {
        let labels: std::collections::HashSet<&str> =
            AssertType::ALL.iter().map(|kind| kind.label()).collect();
        assert_eq!(labels.len(), AssertType::ALL.len());

        for kind in AssertType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.label()));
        }
    }

    #[test]
    fn builder_populates_comparison_operands() {
        let failure = Failure::new("Duration.Gt", AssertType::Gt)
            .expected(Duration::from_secs(60))
            .actual(Duration::from_secs(30));

        assert_eq!(failure.assertion_name(), "Duration.Gt");
        assert_eq!(failure.assert_type(), AssertType::Gt);
        assert_eq!(
            failure.expected_value(),
            Some(&Payload::Duration(Duration::from_secs(60)))
        );
        assert_eq!(
            failure.actual_value(),
            Some(&Payload::Duration(Duration::from_secs(30)))
        );
        assert!(failure.expected_range_values().is_none());
    }

    #[test]
    fn builder_populates_range() {
        let failure = Failure::new("Duration.InRange", AssertType::InRange)
            .expected_range(Duration::from_secs(1), Duration::from_secs(3600))
            .actual(Duration::from_secs(7200));

        let (min, max) = failure.expected_range_values().unwrap();
        assert_eq!(min, &Payload::Duration(Duration::from_secs(1)));
        assert_eq!(max, &Payload::Duration(Duration::from_secs(3600)));
        assert!(failure.expected_value().is_none());
    }

    #[test]
    fn presence_failure_carries_no_operands() {
        let failure = Failure::new("Duration.IsSet", AssertType::IsSet);
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["assert_type"], "is_set");
        assert!(json.get("expected").is_none());
        assert!(json.get("actual").is_none());
        assert!(json.get("expected_range").is_none());
    }

    #[test]
    fn format_duration_sub_second_units() {
        assert_eq!(format_duration(Duration::ZERO), "0s");
        assert_eq!(format_duration(Duration::from_nanos(15)), "15ns");
        assert_eq!(format_duration(Duration::from_nanos(1_500)), "1.5µs");
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_micros(1_250)), "1.25ms");
    }

    #[test]
    fn format_duration_composite_units() {
        assert_eq!(format_duration(Duration::from_secs(1)), "1s");
        assert_eq!(format_duration(Duration::from_millis(1_500)), "1.5s");
        assert_eq!(format_duration(Duration::from_secs(60)), "1m0s");
        assert_eq!(format_duration(Duration::from_secs(120)), "2m0s");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h0m0s");
        assert_eq!(format_duration(Duration::from_secs(3630)), "1h0m30s");
    }

    #[test]
    fn payload_display() {
        assert_eq!(Payload::from(Duration::from_secs(90)).to_string(), "1m30s");
        assert_eq!(Payload::from(Duration::ZERO).to_string(), "0s");
    }
}
