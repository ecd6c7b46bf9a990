//! Severity levels and color modes.

use crate::errors::{Result, StatusLogError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered severity of a status line.
///
/// Only used for threshold comparison: a call is emitted when its severity
/// is greater than or equal to the logger's threshold. `Error` sits above
/// every emitting level, so a threshold of `Error` leaves only the fatal
/// path audible.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    /// Diagnostic chatter
    #[default]
    Debug = 0,
    /// Progress of a unit of work
    Task = 1,
    /// Something looks wrong but work continues
    Warn = 2,
    /// Needs the operator's attention
    Alert = 3,
    /// Fatal; never filtered
    Error = 4,
}

impl Severity {
    /// Every severity, most verbose first.
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Task,
        Severity::Warn,
        Severity::Alert,
        Severity::Error,
    ];

    /// Raw discriminant, suitable for atomic storage.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Severity::as_u8`]. Out-of-range values clamp to `Error`.
    pub const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Severity::Debug,
            1 => Severity::Task,
            2 => Severity::Warn,
            3 => Severity::Alert,
            _ => Severity::Error,
        }
    }
}

impl FromStr for Severity {
    type Err = StatusLogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "TASK" => Ok(Severity::Task),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "ALERT" => Ok(Severity::Alert),
            "ERROR" | "FATAL" => Ok(Severity::Error),
            _ => Err(StatusLogError::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Debug => write!(f, "DEBUG"),
            Severity::Task => write!(f, "TASK"),
            Severity::Warn => write!(f, "WARN"),
            Severity::Alert => write!(f, "ALERT"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Whether severity markers are rendered with ANSI escapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when the sink is a terminal that supports it
    #[default]
    Auto,
    /// Always emit escapes
    Always,
    /// Never emit escapes
    Never,
}

impl FromStr for ColorMode {
    type Err = StatusLogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" | "on" | "yes" => Ok(ColorMode::Always),
            "never" | "off" | "no" => Ok(ColorMode::Never),
            _ => Err(StatusLogError::InvalidColorMode(s.to_string())),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}
