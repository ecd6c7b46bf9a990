//! # statuslog types
//!
//! Shared enums and error types for the statuslog console logger.
//!
//! - [`Severity`]: the ordered threshold levels
//! - [`ColorMode`]: whether status markers carry ANSI styling
//! - [`StatusLogError`] and the [`Result`] alias used on the configuration path
//!
//! ## Example
//!
//! ```
//! use statuslog_types::Severity;
//!
//! let level: Severity = "warn".parse().unwrap();
//! assert!(Severity::Alert >= level);
//! assert!(Severity::Task < level);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod enums;
pub mod errors;

pub use enums::{ColorMode, Severity};
pub use errors::{Result, StatusLogError};
