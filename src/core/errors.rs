//! FXP-prefixed error types with structured error codes.
//!
//! These cover configuration and logging only. A violated check is never an
//! error value; it travels through [`crate::assertion::chain::Chain`].

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, ExpectError>;

/// Top-level error type for fluent_expect.
#[derive(Debug, Error)]
pub enum ExpectError {
    #[error("[FXP-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[FXP-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[FXP-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[FXP-2001] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[FXP-3001] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExpectError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "FXP-1001",
            Self::MissingConfig { .. } => "FXP-1002",
            Self::ConfigParse { .. } => "FXP-1003",
            Self::Serialization { .. } => "FXP-2001",
            Self::Io { .. } => "FXP-3001",
        }
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for ExpectError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for ExpectError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}
