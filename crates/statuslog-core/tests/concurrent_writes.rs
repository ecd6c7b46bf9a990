//! Lines written from many threads at once must come out whole.

use statuslog_core::{CaptureBuffer, ColorMode, Logger, Severity, StaticPrefix};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 16;
const LINES_PER_THREAD: usize = 500;

fn logger(buf: &CaptureBuffer, color: ColorMode) -> Arc<Logger> {
    Arc::new(
        Logger::builder()
            .sink(buf.sink())
            .color(color)
            .prefixer(StaticPrefix::new("[stress]"))
            .build(),
    )
}

fn hammer(log: &Arc<Logger>) {
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let log = Arc::clone(log);
            thread::spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    if i % 2 == 0 {
                        log.task(&[&"thread", &t, &"line", &i, &"payload-payload-payload"]);
                    } else {
                        log.warn(&[&"thread", &t, &"line", &i, &"payload-payload-payload"]);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn lines_never_interleave() {
    let buf = CaptureBuffer::new();
    let log = logger(&buf, ColorMode::Never);
    hammer(&log);

    let contents = buf.contents();
    assert!(contents.ends_with('\n'));

    let lines = buf.lines();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);

    let mut seen = HashSet::new();
    for line in &lines {
        let rest = line
            .strip_prefix("[stress] >>> thread ")
            .or_else(|| line.strip_prefix("[stress] !!! thread "))
            .unwrap_or_else(|| panic!("mangled line: {:?}", line));

        let fields: Vec<&str> = rest.split(' ').collect();
        assert_eq!(fields.len(), 4, "mangled line: {:?}", line);
        assert_eq!(fields[1], "line");
        assert_eq!(fields[3], "payload-payload-payload");

        let t: usize = fields[0].parse().unwrap();
        let i: usize = fields[2].parse().unwrap();
        let marker_is_task = line.contains(">>>");
        assert_eq!(marker_is_task, i % 2 == 0, "marker mismatch: {:?}", line);
        assert!(seen.insert((t, i)), "duplicate line: {:?}", line);
    }
    assert_eq!(seen.len(), THREADS * LINES_PER_THREAD);
}

#[test]
fn colored_lines_never_interleave() {
    let buf = CaptureBuffer::new();
    let log = logger(&buf, ColorMode::Always);
    hammer(&log);

    let lines = buf.lines();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);
    for line in &lines {
        assert!(line.starts_with("[stress] \x1b["), "mangled line: {:?}", line);
        assert!(line.ends_with("payload-payload-payload"), "mangled line: {:?}", line);
        assert_eq!(line.matches("\x1b[0m").count(), 1, "mangled line: {:?}", line);
    }
}

#[test]
fn reconfiguring_while_writing_is_safe() {
    let buf = CaptureBuffer::new();
    let log = logger(&buf, ColorMode::Never);

    let toggler = {
        let log = Arc::clone(&log);
        thread::spawn(move || {
            for i in 0..1_000 {
                log.set_level(if i % 2 == 0 { Severity::Alert } else { Severity::Debug });
                log.silence(i % 3 == 0);
                log.set_prefixer(StaticPrefix::new("[stress]"));
            }
            log.set_level(Severity::Debug);
            log.silence(false);
        })
    };
    hammer(&log);
    toggler.join().unwrap();

    for line in buf.lines() {
        assert!(line.starts_with("[stress] "), "mangled line: {:?}", line);
        assert!(line.ends_with("payload-payload-payload"), "mangled line: {:?}", line);
    }
}
