#![forbid(unsafe_code)]

//! fluent_expect — chainable checks over captured values for tests.
//!
//! A value wrapper owns a [`assertion::chain::Chain`] and exposes check
//! methods that return the wrapper itself. A violated check never panics or
//! returns an error from the wrapper; it is described as a
//! [`assertion::failure::Failure`], rendered by a
//! [`assertion::formatter::Formatter`] and delivered to a
//! [`assertion::reporter::Reporter`], which alone decides whether the test
//! aborts.
//!
//! # Library usage
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use fluent_expect::prelude::*;
//!
//! let reporter = Arc::new(RecordingReporter::new());
//! let mut d = DurationExpect::new(reporter.clone(), Duration::from_secs(60));
//! d.gt(Duration::from_secs(60)).ge(Duration::from_secs(60));
//!
//! assert!(d.chain().failed());
//! assert_eq!(reporter.count(), 1);
//! ```
//!
//! Configuration-driven setup (reporter policy, formatter, JSONL check log):
//!
//! ```rust,no_run
//! use fluent_expect::core::config::Config;
//! use fluent_expect::expect::Expect;
//!
//! let config = Config::load(None).expect("config");
//! let e = Expect::from_config(&config, "startup_is_fast");
//! e.duration(std::time::Duration::from_millis(5)).is_set();
//! ```

pub mod prelude;

pub mod assertion;
pub mod core;
pub mod expect;
pub mod logger;
pub mod values;
