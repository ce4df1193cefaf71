//! Configuration: TOML file + env var overrides + defaults.
//!
//! Selects the reporter policy, the formatter, and the optional check log
//! used when building an [`crate::expect::Expect`] from configuration.

#![allow(missing_docs)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::assertion::formatter::{DefaultFormatter, JsonFormatter};
use crate::assertion::handler::DefaultAssertionHandler;
use crate::assertion::reporter::{LogReporter, PanicReporter, Reporter};
use crate::core::errors::{ExpectError, Result};
use crate::logger::jsonl::{JsonlConfig, JsonlWriter};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "fluent_expect.toml";

/// Full configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub reporter: ReporterConfig,
    pub formatter: FormatterConfig,
    pub log: LogConfig,
}

/// What happens when a check fails.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReporterMode {
    /// Abort the running test.
    #[default]
    Panic,
    /// Print to stderr and keep going.
    Log,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ReporterConfig {
    pub mode: ReporterMode,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct FormatterConfig {
    pub style: FormatStyle,
    /// ANSI color in text output.
    pub color: bool,
}

/// JSONL check log settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    pub path: PathBuf,
    pub max_size_bytes: u64,
    pub max_rotated_files: u32,
}

impl Default for LogConfig {
    fn default() -> Self {
        let jsonl = JsonlConfig::default();
        Self {
            enabled: false,
            path: jsonl.path,
            max_size_bytes: jsonl.max_size_bytes,
            max_rotated_files: jsonl.max_rotated_files,
        }
    }
}

impl LogConfig {
    pub fn jsonl_config(&self) -> JsonlConfig {
        JsonlConfig {
            path: self.path.clone(),
            max_size_bytes: self.max_size_bytes,
            max_rotated_files: self.max_rotated_files,
        }
    }
}

impl Config {
    #[must_use]
    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }

    /// Load config from default or explicit path, then apply env overrides.
    ///
    /// Missing config file is not an error when loading from default path; defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path_buf = path.map_or_else(Self::default_path, Path::to_path_buf);

        let mut cfg: Self = if path_buf.exists() {
            let raw = fs::read_to_string(&path_buf).map_err(|source| ExpectError::Io {
                path: path_buf.clone(),
                source,
            })?;
            toml::from_str(&raw)?
        } else if path.is_some() {
            return Err(ExpectError::MissingConfig { path: path_buf });
        } else {
            Self::default()
        };

        cfg.apply_env_overrides_from(env_var)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reporter implementing the configured failure policy.
    pub fn reporter(&self) -> Arc<dyn Reporter> {
        match self.reporter.mode {
            ReporterMode::Panic => Arc::new(PanicReporter),
            ReporterMode::Log => Arc::new(LogReporter::new()),
        }
    }

    /// Assemble a handler around `reporter` with the configured formatter and log.
    pub fn build_handler(&self, reporter: Arc<dyn Reporter>) -> DefaultAssertionHandler {
        let handler = DefaultAssertionHandler::new(reporter);
        let handler = match self.formatter.style {
            FormatStyle::Text => handler.with_formatter(DefaultFormatter {
                colorize: self.formatter.color,
            }),
            FormatStyle::Json => handler.with_formatter(JsonFormatter),
        };
        if self.log.enabled {
            handler.with_log(JsonlWriter::open(self.log.jsonl_config()))
        } else {
            handler
        }
    }

    fn apply_env_overrides_from<F>(&mut self, mut lookup: F) -> Result<()>
    where
        F: FnMut(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("FLUENT_EXPECT_REPORTER") {
            self.reporter.mode = match raw.trim().to_ascii_lowercase().as_str() {
                "panic" => ReporterMode::Panic,
                "log" => ReporterMode::Log,
                _ => return Err(env_parse_error("FLUENT_EXPECT_REPORTER", &raw, "panic|log")),
            };
        }

        if let Some(raw) = lookup("FLUENT_EXPECT_FORMAT") {
            self.formatter.style = match raw.trim().to_ascii_lowercase().as_str() {
                "text" => FormatStyle::Text,
                "json" => FormatStyle::Json,
                _ => return Err(env_parse_error("FLUENT_EXPECT_FORMAT", &raw, "text|json")),
            };
        }

        if let Some(raw) = lookup("FLUENT_EXPECT_COLOR") {
            self.formatter.color = parse_env_bool("FLUENT_EXPECT_COLOR", &raw)?;
        }

        // Setting a path implies enabling the log.
        if let Some(raw) = lookup("FLUENT_EXPECT_LOG_PATH") {
            self.log.path = PathBuf::from(raw);
            self.log.enabled = true;
        }

        if let Some(raw) = lookup("FLUENT_EXPECT_LOG_MAX_BYTES") {
            self.log.max_size_bytes = parse_env_u64("FLUENT_EXPECT_LOG_MAX_BYTES", &raw)?;
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !self.log.enabled {
            return Ok(());
        }
        if self.log.path.as_os_str().is_empty() {
            return Err(ExpectError::InvalidConfig {
                details: "log.path must not be empty when log.enabled".to_string(),
            });
        }
        if self.log.max_size_bytes == 0 {
            return Err(ExpectError::InvalidConfig {
                details: "log.max_size_bytes must be > 0".to_string(),
            });
        }
        if self.log.max_rotated_files > 100 {
            return Err(ExpectError::InvalidConfig {
                details: format!(
                    "log.max_rotated_files must be <= 100, got {}",
                    self.log.max_rotated_files
                ),
            });
        }
        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|raw| !raw.trim().is_empty())
}

fn env_parse_error(name: &str, raw: &str, accepted: &str) -> ExpectError {
    ExpectError::ConfigParse {
        context: "env",
        details: format!("{name}={raw:?}: expected one of {accepted}"),
    }
}

fn parse_env_u64(name: &str, raw: &str) -> Result<u64> {
    raw.trim().parse::<u64>().map_err(|error| ExpectError::ConfigParse {
        context: "env",
        details: format!("{name}={raw:?}: {error}"),
    })
}

fn parse_env_bool(name: &str, raw: &str) -> Result<bool> {
    raw.trim().parse::<bool>().map_err(|error| ExpectError::ConfigParse {
        context: "env",
        details: format!("{name}={raw:?}: {error}"),
    })
}
