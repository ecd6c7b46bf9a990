//! Show every marker once.

use statuslog_core::{alert, debug, ok, progress, task, warn};

pub fn execute() {
    task!("building", "release");
    progress!("compiling", 14, "crates");
    debug!("cache", "hit", "ratio", 0.93);
    warn!("cache directory missing,", "rebuilding");
    alert!("disk", "usage", "at", "91%");
    ok!("done");
}
