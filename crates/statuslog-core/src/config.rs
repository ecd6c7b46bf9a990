//! Logger configuration.
//!
//! Values are resolved in this priority order (highest first):
//! 1. Explicit overrides applied by the caller (e.g. command-line flags)
//! 2. Environment variables
//! 3. Values loaded from a YAML file
//! 4. Default values
//!
//! ## Example
//!
//! ```no_run
//! use statuslog_core::{config::LoggerConfig, Logger, Sink};
//!
//! let config = LoggerConfig::load("statuslog.yml")?.with_env_overrides()?;
//! let log = Logger::from_config(&config, Sink::Stderr);
//! # Ok::<(), statuslog_types::StatusLogError>(())
//! ```

use crate::prefix::{NoPrefix, Prefixer, Stamped, StaticPrefix, Timestamp};
use serde::{Deserialize, Serialize};
use statuslog_types::{ColorMode, Result, Severity, StatusLogError};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Environment variable holding the severity threshold.
pub const ENV_LEVEL: &str = "STATUSLOG_LEVEL";
/// Environment variable holding the color mode.
pub const ENV_COLOR: &str = "STATUSLOG_COLOR";
/// Environment variable that silences output when truthy.
pub const ENV_QUIET: &str = "STATUSLOG_QUIET";
/// Conventional opt-out from colored output; any non-empty value wins.
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Settings a [`Logger`](crate::Logger) is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Minimum severity that is emitted
    pub level: Severity,
    /// Marker styling
    pub color: ColorMode,
    /// Start with output discarded
    pub silenced: bool,
    /// Fixed text prepended to every line
    pub prefix: Option<String>,
    /// Prepend the local time to every line
    pub timestamp: bool,
}

impl LoggerConfig {
    /// Load configuration from a YAML file.
    ///
    /// A missing file yields the defaults; an empty file does too.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        if path.is_dir() {
            statuslog_types::bail_config!("{} is a directory", path.display());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Layer the process environment on top of this configuration.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Layer variables from `lookup` on top of this configuration.
    ///
    /// Split out from [`LoggerConfig::with_env_overrides`] so callers can
    /// supply their own variable source.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LEVEL).filter(|v| !v.trim().is_empty()) {
            self.level = level.parse()?;
        }
        if let Some(color) = lookup(ENV_COLOR).filter(|v| !v.trim().is_empty()) {
            self.color = color.parse()?;
        }
        if lookup(ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
            self.color = ColorMode::Never;
        }
        if let Some(quiet) = lookup(ENV_QUIET) {
            self.silenced = parse_flag(ENV_QUIET, &quiet)?;
        }
        Ok(self)
    }

    /// The prefixer this configuration describes.
    pub fn prefixer(&self) -> Arc<dyn Prefixer> {
        match (self.timestamp, self.prefix.as_deref()) {
            (true, Some(label)) if !label.is_empty() => {
                Arc::new(Stamped::new(Timestamp::default(), label))
            }
            (true, _) => Arc::new(Timestamp::default()),
            (false, Some(label)) if !label.is_empty() => Arc::new(StaticPrefix::new(label)),
            (false, _) => Arc::new(NoPrefix),
        }
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        other => Err(StatusLogError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}
