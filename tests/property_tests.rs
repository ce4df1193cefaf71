//! Property-based tests for duration checks.
//!
//! Verifies that each comparison reports exactly when its relation is
//! violated, that presence gating never compounds failures, and that the
//! failed flag is monotonic across arbitrary check sequences.

mod common;

use std::time::Duration;

use fluent_expect::prelude::*;
use proptest::prelude::*;

// ──────────────────── strategies ────────────────────

fn arb_duration() -> impl Strategy<Value = Duration> {
    prop_oneof![
        (0_u64..5).prop_map(Duration::from_secs),
        (0_u64..10_000_000_000).prop_map(Duration::from_nanos),
        Just(Duration::ZERO),
    ]
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Equal(Duration),
    NotEqual(Duration),
    Gt(Duration),
    Ge(Duration),
    Lt(Duration),
    Le(Duration),
    InRange(Duration, Duration),
    IsSet,
    NotSet,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arb_duration().prop_map(Op::Equal),
        arb_duration().prop_map(Op::NotEqual),
        arb_duration().prop_map(Op::Gt),
        arb_duration().prop_map(Op::Ge),
        arb_duration().prop_map(Op::Lt),
        arb_duration().prop_map(Op::Le),
        (arb_duration(), arb_duration()).prop_map(|(a, b)| Op::InRange(a, b)),
        Just(Op::IsSet),
        Just(Op::NotSet),
    ]
}

fn apply(d: &mut DurationExpect, op: Op) {
    match op {
        Op::Equal(v) => d.equal(v),
        Op::NotEqual(v) => d.not_equal(v),
        Op::Gt(v) => d.gt(v),
        Op::Ge(v) => d.ge(v),
        Op::Lt(v) => d.lt(v),
        Op::Le(v) => d.le(v),
        Op::InRange(min, max) => d.in_range(min, max),
        Op::IsSet => d.is_set(),
        Op::NotSet => d.not_set(),
    };
}

/// Whether `op` holds for `value`, computed independently of the wrapper.
fn holds(value: Option<Duration>, op: Op) -> bool {
    match (value, op) {
        (Some(_), Op::IsSet) | (None, Op::NotSet) => true,
        (None, _) | (Some(_), Op::NotSet) => false,
        (Some(v), Op::Equal(e)) => v == e,
        (Some(v), Op::NotEqual(e)) => v != e,
        (Some(v), Op::Gt(e)) => v > e,
        (Some(v), Op::Ge(e)) => v >= e,
        (Some(v), Op::Lt(e)) => v < e,
        (Some(v), Op::Le(e)) => v <= e,
        (Some(v), Op::InRange(min, max)) => min <= v && v <= max,
    }
}

// ──────────────────── properties ────────────────────

proptest! {
    #[test]
    fn single_check_reports_iff_violated(
        value in proptest::option::of(arb_duration()),
        op in arb_op(),
    ) {
        let (e, handler) = common::capturing_expect("prop");
        let mut d = e.duration(value);
        apply(&mut d, op);

        let expected_failures = usize::from(!holds(value, op));
        prop_assert_eq!(handler.failures.lock().len(), expected_failures);
        prop_assert_eq!(d.chain().failed(), expected_failures == 1);
    }

    #[test]
    fn absent_value_only_ever_reports_presence(ops in proptest::collection::vec(arb_op(), 1..20)) {
        let (e, handler) = common::capturing_expect("absent");
        let mut d = e.duration(None);
        for op in &ops {
            apply(&mut d, *op);
        }

        let kinds = handler.failure_kinds();
        let expected = ops.iter().filter(|op| !matches!(op, Op::NotSet)).count();
        prop_assert_eq!(kinds.len(), expected);
        prop_assert!(kinds.iter().all(|kind| *kind == AssertType::IsSet));
        prop_assert_eq!(d.raw(), Duration::ZERO);
    }

    #[test]
    fn failed_flag_is_monotonic(
        value in proptest::option::of(arb_duration()),
        ops in proptest::collection::vec(arb_op(), 1..30),
    ) {
        let (e, reporter) = common::recording_expect();
        let mut d = e.duration(value);
        let mut seen_failure = false;
        let mut violations = 0;

        for op in ops {
            if !holds(value, op) {
                seen_failure = true;
                violations += 1;
            }
            apply(&mut d, op);
            prop_assert_eq!(d.chain().failed(), seen_failure);
        }

        prop_assert_eq!(reporter.count(), violations);
        prop_assert_eq!(d.raw(), value.unwrap_or_default());
    }

    #[test]
    fn boundary_law(v in arb_duration()) {
        let (e, reporter) = common::recording_expect();
        e.duration(v).ge(v).le(v).in_range(v, v).equal(v);
        prop_assert_eq!(reporter.count(), 0);

        e.duration(v).gt(v).lt(v).not_equal(v);
        prop_assert_eq!(reporter.count(), 3);
    }
}
