//! Error types for statuslog configuration.

use thiserror::Error;

/// Errors raised while building or configuring a logger.
///
/// Emitting a status line never fails; these only surface when parsing
/// levels, color modes, or configuration files.
#[derive(Error, Debug)]
pub enum StatusLogError {
    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown severity name
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// Unknown color mode name
    #[error("Invalid color mode: {0} (expected auto, always or never)")]
    InvalidColorMode(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A specialized Result type for statuslog operations.
pub type Result<T> = std::result::Result<T, StatusLogError>;

/// Return early with a [`StatusLogError::Config`].
///
/// # Example
///
/// ```ignore
/// if path.is_dir() {
///     bail_config!("{} is a directory", path.display());
/// }
/// ```
#[macro_export]
macro_rules! bail_config {
    ($msg:expr) => {
        return Err($crate::StatusLogError::Config($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::StatusLogError::Config(format!($fmt, $($arg)*)))
    };
}
