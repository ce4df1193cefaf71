//! Typed value wrappers exposing fluent checks.
//!
//! Each wrapper owns one [`crate::assertion::chain::Chain`] and an optional
//! captured value, and follows the same method shape: `raw`, `is_set`,
//! `not_set`, then comparisons gated on presence.

pub mod duration;
