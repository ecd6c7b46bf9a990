//! Concurrent emission through the process-wide logger.

use statuslog_core::task;
use std::thread;

pub fn execute(threads: usize, lines: usize) {
    tracing::debug!(threads, lines, "starting stress run");

    thread::scope(|s| {
        for t in 0..threads {
            s.spawn(move || {
                for i in 0..lines {
                    task!("thread", t, "line", i);
                }
            });
        }
    });
}
