//! Pluggable line prefixes.

use chrono::Local;
use std::fmt::Write as _;

/// Supplies the text prepended to every status line.
///
/// Any `Fn() -> String` closure is a prefixer:
///
/// ```
/// use statuslog_core::{CaptureBuffer, Logger};
///
/// let buf = CaptureBuffer::new();
/// let log = Logger::builder().sink(buf.sink()).build();
/// log.set_prefixer(|| "[build]".to_string());
/// log.task(&[&"compiling"]);
/// assert_eq!(buf.contents(), "[build] >>> compiling\n");
/// ```
pub trait Prefixer: Send + Sync {
    /// Text for the next line. An empty string means no prefix.
    fn prefix(&self) -> String;
}

impl<F> Prefixer for F
where
    F: Fn() -> String + Send + Sync,
{
    fn prefix(&self) -> String {
        self()
    }
}

/// The default prefixer: no prefix at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrefix;

impl Prefixer for NoPrefix {
    fn prefix(&self) -> String {
        String::new()
    }
}

/// A fixed string.
#[derive(Debug, Clone, Default)]
pub struct StaticPrefix(pub String);

impl StaticPrefix {
    /// Create a prefixer that always yields `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl Prefixer for StaticPrefix {
    fn prefix(&self) -> String {
        self.0.clone()
    }
}

/// Local wall-clock time, formatted with a `chrono` strftime pattern.
#[derive(Debug, Clone)]
pub struct Timestamp {
    format: String,
}

impl Timestamp {
    /// Default pattern: `%H:%M:%S`.
    pub const DEFAULT_FORMAT: &'static str = "%H:%M:%S";

    /// Timestamp with a custom strftime pattern.
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::with_format(Self::DEFAULT_FORMAT)
    }
}

impl Prefixer for Timestamp {
    fn prefix(&self) -> String {
        let mut out = String::new();
        // Invalid patterns surface as a fmt error; fall back to the raw pattern.
        match write!(out, "{}", Local::now().format(&self.format)) {
            Ok(()) => out,
            Err(_) => self.format.clone(),
        }
    }
}

/// Timestamp followed by a fixed label, e.g. `12:00:01 [web]`.
#[derive(Debug, Clone)]
pub struct Stamped {
    clock: Timestamp,
    label: String,
}

impl Stamped {
    /// Combine a timestamp with a label.
    pub fn new(clock: Timestamp, label: impl Into<String>) -> Self {
        Self {
            clock,
            label: label.into(),
        }
    }
}

impl Prefixer for Stamped {
    fn prefix(&self) -> String {
        format!("{} {}", self.clock.prefix(), self.label)
    }
}
