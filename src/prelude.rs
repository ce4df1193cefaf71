//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use fluent_expect::prelude::*;
//! ```

// Core
pub use crate::core::config::Config;
pub use crate::core::errors::{ExpectError, Result};

// Assertion machinery
pub use crate::assertion::chain::{Chain, Context};
pub use crate::assertion::failure::{AssertType, Failure, Payload};
pub use crate::assertion::formatter::{DefaultFormatter, Formatter, JsonFormatter};
pub use crate::assertion::handler::{AssertionHandler, DefaultAssertionHandler};
pub use crate::assertion::reporter::{LogReporter, PanicReporter, RecordingReporter, Reporter};

// Values
pub use crate::expect::Expect;
pub use crate::values::duration::DurationExpect;
