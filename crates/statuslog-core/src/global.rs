//! The process-wide default logger and the status macros.
//!
//! Libraries should prefer an explicit [`Logger`]; the singleton exists for
//! binaries, which [`install`] a configured logger once at startup.

use crate::log::Logger;
use crate::prefix::Prefixer;
use once_cell::sync::OnceCell;
use statuslog_types::Severity;

static GLOBAL: OnceCell<Logger> = OnceCell::new();

/// The process-wide logger.
///
/// Created on first use with defaults (stderr, most verbose threshold,
/// no prefix) unless [`install`] ran first.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Install `logger` as the process-wide logger.
///
/// Fails, handing the logger back, if the singleton was already installed
/// or already used.
pub fn install(logger: Logger) -> Result<(), Logger> {
    GLOBAL.set(logger)
}

/// Set the threshold of the process-wide logger.
pub fn set_level(level: Severity) {
    global().set_level(level);
}

/// Silence or restore the process-wide logger, returning the prior state.
pub fn silence(enable: bool) -> bool {
    global().silence(enable)
}

/// Install a prefixer on the process-wide logger.
pub fn set_prefixer(prefixer: impl Prefixer + 'static) {
    global().set_prefixer(prefixer);
}

#[doc(hidden)]
#[macro_export]
macro_rules! __status_line {
    ($method:ident; logger: $logger:expr, $($arg:expr),* $(,)?) => {
        $logger.$method(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
    ($method:ident; logger: $logger:expr) => {
        $logger.$method(&[])
    };
    ($method:ident; $($arg:expr),* $(,)?) => {
        $crate::global().$method(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Emit a debug line: `debug!("cache", hits)` or `debug!(logger: &log, "cache", hits)`.
#[macro_export]
macro_rules! debug {
    ($($t:tt)*) => { $crate::__status_line!(debug; $($t)*) };
}

/// Emit a task line.
#[macro_export]
macro_rules! task {
    ($($t:tt)*) => { $crate::__status_line!(task; $($t)*) };
}

/// Emit a warning line.
#[macro_export]
macro_rules! warn {
    ($($t:tt)*) => { $crate::__status_line!(warn; $($t)*) };
}

/// Emit an alert line.
#[macro_export]
macro_rules! alert {
    ($($t:tt)*) => { $crate::__status_line!(alert; $($t)*) };
}

/// Emit a success line.
#[macro_export]
macro_rules! ok {
    ($($t:tt)*) => { $crate::__status_line!(ok; $($t)*) };
}

/// Emit a progress line.
#[macro_export]
macro_rules! progress {
    ($($t:tt)*) => { $crate::__status_line!(progress; $($t)*) };
}

/// Emit a fatal line and exit with status 1.
#[macro_export]
macro_rules! fatal {
    ($($t:tt)*) => { $crate::__status_line!(fatal; $($t)*) };
}

/// Unwrap a `Result` or die: `let cfg = check!(load(), "reading", path);`
#[macro_export]
macro_rules! check {
    (logger: $logger:expr, $result:expr, $($arg:expr),* $(,)?) => {
        $logger.check($result, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
    (logger: $logger:expr, $result:expr) => {
        $logger.check($result, &[])
    };
    ($result:expr, $($arg:expr),* $(,)?) => {
        $crate::global().check($result, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
    ($result:expr) => {
        $crate::global().check($result, &[])
    };
}
