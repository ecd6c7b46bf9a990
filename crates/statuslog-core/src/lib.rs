//! # statuslog core
//!
//! A leveled console logger that writes short, human-readable status lines
//! with a colored severity marker:
//!
//! ```text
//! >>> building release
//!  -  compiling 14 crates
//!  ✔  done
//! !!! cache directory missing, rebuilding
//! ```
//!
//! This crate provides:
//!
//! - **Logger**: threshold filtering, an optional line prefix, whole-line
//!   writes under a lock, and a log-and-exit fatal path
//! - **Sinks**: stderr, stdout, discard, or any writer
//! - **Prefixers**: fixed labels, timestamps, or closures
//! - **Configuration**: YAML file and environment layering
//! - **Global logger and macros** for binaries
//!
//! ## Example
//!
//! ```
//! use statuslog_core::{CaptureBuffer, Logger, Severity};
//!
//! let buf = CaptureBuffer::new();
//! let log = Logger::builder().sink(buf.sink()).level(Severity::Task).build();
//!
//! log.debug(&[&"not shown"]);
//! statuslog_core::warn!(logger: &log, "disk", "full");
//! assert_eq!(buf.contents(), "!!! disk full\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod global;
pub mod log;
pub mod prefix;
pub mod sink;
pub mod term;

// Re-export commonly used items
pub use config::LoggerConfig;
pub use global::{global, install, set_level, set_prefixer, silence};
pub use log::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use prefix::{NoPrefix, Prefixer, StaticPrefix, Timestamp};
pub use sink::{CaptureBuffer, Sink};
pub use statuslog_types::{ColorMode, Result, Severity, StatusLogError};
pub use term::Marker;
