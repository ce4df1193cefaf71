//! Check bookkeeping shared by every value wrapper.
//!
//! A wrapper evaluates a predicate, describes it as a [`failure::Failure`] and
//! hands it to its [`chain::Chain`]. The chain forwards to the context's
//! [`handler::AssertionHandler`], which renders the failure with a
//! [`formatter::Formatter`] and delivers it to a [`reporter::Reporter`].
//! Nothing here panics or returns an error on a violated check.

pub mod chain;
pub mod failure;
pub mod formatter;
pub mod handler;
pub mod reporter;
