//! Single-line emission commands.

use statuslog_core::{global, Logger, Severity};
use std::fmt::Display;

fn as_args(words: &[String]) -> Vec<&dyn Display> {
    words.iter().map(|w| w as &dyn Display).collect()
}

/// Build the argument list only when `severity` passes the threshold.
fn leveled<F>(log: &Logger, severity: Severity, words: &[String], write: F) -> bool
where
    F: FnOnce(&Logger, &[&dyn Display]),
{
    if !log.enabled(severity) {
        return false;
    }
    write(log, &as_args(words));
    true
}

pub fn debug(words: &[String]) {
    leveled(global(), Severity::Debug, words, |l, a| l.debug(a));
}

pub fn task(words: &[String]) {
    leveled(global(), Severity::Task, words, |l, a| l.task(a));
}

pub fn warn(words: &[String]) {
    leveled(global(), Severity::Warn, words, |l, a| l.warn(a));
}

pub fn alert(words: &[String]) {
    leveled(global(), Severity::Alert, words, |l, a| l.alert(a));
}

pub fn ok(words: &[String]) {
    leveled(global(), Severity::Task, words, |l, a| l.ok(a));
}

pub fn progress(words: &[String]) {
    leveled(global(), Severity::Task, words, |l, a| l.progress(a));
}

pub fn fatal(words: &[String]) -> ! {
    global().fatal(&as_args(words))
}

/// Die with `fail` if given; otherwise a no-op.
pub fn check(fail: Option<&str>, words: &[String]) {
    if let Some(description) = fail {
        global().check(Err::<(), _>(description), &as_args(words));
    }
}

pub fn error(description: &str) -> ! {
    global().error(&description)
}
