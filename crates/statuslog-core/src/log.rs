//! The leveled status logger.
//!
//! A [`Logger`] owns its threshold, prefixer, and sink, so independent
//! instances never interfere. The process-wide default lives in
//! [`crate::global`].
//!
//! Every emitted line has the shape `<prefix> <marker> <args>\n`; see
//! [`compose_line`](crate::term::compose_line).

use crate::config::LoggerConfig;
use crate::prefix::{NoPrefix, Prefixer};
use crate::sink::Sink;
use crate::term::{compose_line, Marker};
use parking_lot::{Mutex, RwLock};
use statuslog_types::{ColorMode, Severity};
use std::fmt::{self, Display};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Exit status used by [`Logger::fatal`] and everything that delegates to it.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Sink state guarded by the write lock.
struct Output {
    sink: Sink,
    silenced: bool,
    color: ColorMode,
}

impl Output {
    fn color_enabled(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => self.sink.supports_color(),
        }
    }
}

/// Leveled console logger.
///
/// Threshold updates are atomic and the prefixer sits behind a read/write
/// lock, so configuration may change from any thread. The sink is held by
/// a mutex for the duration of formatting and writing, which keeps lines
/// from concurrent callers whole.
pub struct Logger {
    threshold: AtomicU8,
    prefixer: RwLock<Arc<dyn Prefixer>>,
    output: Mutex<Output>,
    exit: fn(i32) -> !,
}

impl Logger {
    /// A logger writing to stderr at the most verbose threshold.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a logger.
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Build a logger from configuration, writing to `sink`.
    pub fn from_config(config: &LoggerConfig, sink: Sink) -> Self {
        Self::builder()
            .level(config.level)
            .color(config.color)
            .silenced(config.silenced)
            .prefixer_arc(config.prefixer())
            .sink(sink)
            .build()
    }

    /// Set the severity threshold. Affects only subsequent calls.
    pub fn set_level(&self, level: Severity) {
        let prev = Severity::from_u8(self.threshold.swap(level.as_u8(), Ordering::Relaxed));
        tracing::debug!(from = %prev, to = %level, "severity threshold changed");
    }

    /// Current severity threshold.
    pub fn level(&self) -> Severity {
        Severity::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    /// Whether a call at `severity` would currently be emitted.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.level()
    }

    /// Discard (`true`) or restore (`false`) output.
    ///
    /// Returns whether output was already discarded before the call, so
    /// callers can put back whatever state they found:
    ///
    /// ```
    /// # let log = statuslog_core::Logger::new();
    /// let was_silenced = log.silence(true);
    /// // ... noisy work ...
    /// log.silence(was_silenced);
    /// ```
    pub fn silence(&self, enable: bool) -> bool {
        let prev = {
            let mut out = self.output.lock();
            std::mem::replace(&mut out.silenced, enable)
        };
        if prev != enable {
            tracing::debug!(silenced = enable, "status output toggled");
        }
        prev
    }

    /// Whether output is currently discarded.
    pub fn is_silenced(&self) -> bool {
        self.output.lock().silenced
    }

    /// Install a prefixer for subsequent lines.
    pub fn set_prefixer(&self, prefixer: impl Prefixer + 'static) {
        self.set_prefixer_arc(Arc::new(prefixer));
    }

    /// Install an already shared prefixer.
    pub fn set_prefixer_arc(&self, prefixer: Arc<dyn Prefixer>) {
        *self.prefixer.write() = prefixer;
    }

    /// Replace the real destination, returning the previous one.
    ///
    /// The silenced state is left as is.
    pub fn set_sink(&self, sink: Sink) -> Sink {
        std::mem::replace(&mut self.output.lock().sink, sink)
    }

    /// Change how markers are styled.
    pub fn set_color_mode(&self, color: ColorMode) {
        self.output.lock().color = color;
    }

    /// Diagnostic line, dim blank marker.
    pub fn debug(&self, args: &[&dyn Display]) {
        self.emit(Marker::Debug, args);
    }

    /// Task line, `>>>`.
    pub fn task(&self, args: &[&dyn Display]) {
        self.emit(Marker::Task, args);
    }

    /// Warning line, `!!!`.
    pub fn warn(&self, args: &[&dyn Display]) {
        self.emit(Marker::Warn, args);
    }

    /// Alert line, ` ! `.
    pub fn alert(&self, args: &[&dyn Display]) {
        self.emit(Marker::Alert, args);
    }

    /// Success line, ` ✔ `. Filtered at the task threshold.
    pub fn ok(&self, args: &[&dyn Display]) {
        self.emit(Marker::Ok, args);
    }

    /// Progress line, ` - `. Filtered at the task threshold.
    pub fn progress(&self, args: &[&dyn Display]) {
        self.emit(Marker::Progress, args);
    }

    /// Write an `XXX` line regardless of threshold and terminate the
    /// process with [`FATAL_EXIT_CODE`].
    ///
    /// The line is written and flushed, and the write lock released,
    /// before the process exits.
    pub fn fatal(&self, args: &[&dyn Display]) -> ! {
        self.emit(Marker::Fatal, args);
        (self.exit)(FATAL_EXIT_CODE)
    }

    /// Unwrap `result`, or die with its error.
    ///
    /// On `Err`, a non-empty `msg` is first written as an `ERR` line, then
    /// the error's description goes through [`Logger::fatal`].
    pub fn check<T, E: Display>(&self, result: Result<T, E>, msg: &[&dyn Display]) -> T {
        match result {
            Ok(value) => value,
            Err(err) => {
                if !msg.is_empty() {
                    self.emit(Marker::Err, msg);
                }
                self.fatal(&[&err])
            }
        }
    }

    /// Die with `Fatal error: <err>`.
    pub fn error(&self, err: &dyn Display) -> ! {
        let args: [&dyn Display; 2] = [&"Fatal error:", err];
        self.fatal(&args)
    }

    fn emit(&self, marker: Marker, args: &[&dyn Display]) {
        if let Some(required) = marker.threshold() {
            if !self.enabled(required) {
                return;
            }
        }

        // Silenced calls must not reach the prefixer either.
        if self.is_silenced() {
            return;
        }

        // Resolved outside the write lock: a prefixer may log itself.
        let prefixer = Arc::clone(&self.prefixer.read());
        let prefix = prefixer.prefix();

        let mut out = self.output.lock();
        if out.silenced {
            return;
        }
        let line = compose_line(&prefix, &marker.render(out.color_enabled()), args);
        out.sink.write_line(&line);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let out = self.output.lock();
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("sink", &out.sink)
            .field("silenced", &out.silenced)
            .field("color", &out.color)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Logger`].
pub struct LoggerBuilder {
    level: Severity,
    color: ColorMode,
    silenced: bool,
    sink: Sink,
    prefixer: Arc<dyn Prefixer>,
    exit: fn(i32) -> !,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            level: Severity::Debug,
            color: ColorMode::Auto,
            silenced: false,
            sink: Sink::Stderr,
            prefixer: Arc::new(NoPrefix),
            exit: std::process::exit,
        }
    }
}

impl LoggerBuilder {
    /// Initial severity threshold.
    pub fn level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Marker styling.
    pub fn color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Start with output discarded.
    pub fn silenced(mut self, silenced: bool) -> Self {
        self.silenced = silenced;
        self
    }

    /// Real destination for lines.
    pub fn sink(mut self, sink: Sink) -> Self {
        self.sink = sink;
        self
    }

    /// Line prefixer.
    pub fn prefixer(self, prefixer: impl Prefixer + 'static) -> Self {
        self.prefixer_arc(Arc::new(prefixer))
    }

    /// Line prefixer, already shared.
    pub fn prefixer_arc(mut self, prefixer: Arc<dyn Prefixer>) -> Self {
        self.prefixer = prefixer;
        self
    }

    /// Replace the process-termination primitive used by the fatal path.
    ///
    /// Defaults to [`std::process::exit`]. Mostly useful in tests, where a
    /// panicking stand-in lets the fatal path be observed in-process.
    pub fn exit_with(mut self, exit: fn(i32) -> !) -> Self {
        self.exit = exit;
        self
    }

    /// Finish building.
    pub fn build(self) -> Logger {
        Logger {
            threshold: AtomicU8::new(self.level.as_u8()),
            prefixer: RwLock::new(self.prefixer),
            output: Mutex::new(Output {
                sink: self.sink,
                silenced: self.silenced,
                color: self.color,
            }),
            exit: self.exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::StaticPrefix;
    use crate::sink::CaptureBuffer;
    use proptest::prelude::*;
    use std::panic::{self, AssertUnwindSafe};

    fn exit_panics(code: i32) -> ! {
        panic!("exit {}", code)
    }

    fn capture() -> (Logger, CaptureBuffer) {
        let buf = CaptureBuffer::new();
        let log = Logger::builder()
            .sink(buf.sink())
            .color(ColorMode::Never)
            .exit_with(exit_panics)
            .build();
        (log, buf)
    }

    fn exit_message(err: Box<dyn std::any::Any + Send>) -> String {
        err.downcast_ref::<String>().cloned().unwrap_or_default()
    }

    fn emit_at(log: &Logger, severity: Severity) {
        match severity {
            Severity::Debug => log.debug(&[&"x"]),
            Severity::Task => log.task(&[&"x"]),
            Severity::Warn => log.warn(&[&"x"]),
            Severity::Alert => log.alert(&[&"x"]),
            Severity::Error => unreachable!("no emitting call at Error"),
        }
    }

    #[test]
    fn test_warn_example_line() {
        let (log, buf) = capture();
        log.set_level(Severity::Task);
        log.warn(&[&"disk", &"full"]);
        assert_eq!(buf.contents(), "!!! disk full\n");
    }

    #[test]
    fn test_every_marker_at_default_threshold() {
        let (log, buf) = capture();
        log.debug(&[&"d"]);
        log.task(&[&"t"]);
        log.warn(&[&"w"]);
        log.alert(&[&"a"]);
        log.ok(&[&"o"]);
        log.progress(&[&"p"]);
        assert_eq!(
            buf.lines(),
            vec!["    d", ">>> t", "!!! w", " !  a", " ✔  o", " -  p"]
        );
    }

    #[test]
    fn test_ok_and_progress_filter_at_task() {
        let (log, buf) = capture();
        log.set_level(Severity::Warn);
        log.ok(&[&"done"]);
        log.progress(&[&"step"]);
        assert!(buf.is_empty());

        log.set_level(Severity::Task);
        log.ok(&[&"done"]);
        log.progress(&[&"step"]);
        assert_eq!(buf.lines().len(), 2);
    }

    #[test]
    fn test_error_threshold_mutes_everything() {
        let (log, buf) = capture();
        log.set_level(Severity::Error);
        for level in &Severity::ALL[..4] {
            emit_at(&log, *level);
        }
        assert!(buf.is_empty());
    }

    #[test]
    fn test_level_change_is_not_retroactive() {
        let (log, buf) = capture();
        log.debug(&[&"before"]);
        log.set_level(Severity::Alert);
        log.debug(&[&"after"]);
        assert_eq!(buf.lines(), vec!["    before"]);
        assert_eq!(log.level(), Severity::Alert);
    }

    #[test]
    fn test_silence_returns_previous_state() {
        let (log, buf) = capture();
        assert!(!log.silence(true));
        assert!(log.silence(true));
        for severity in &Severity::ALL[..4] {
            emit_at(&log, *severity);
        }
        log.ok(&[&"hidden"]);
        log.progress(&[&"hidden"]);
        assert!(buf.is_empty());
        assert!(log.is_silenced());

        assert!(log.silence(false));
        assert!(!log.silence(false));
        log.alert(&[&"shown"]);
        assert_eq!(buf.lines(), vec![" !  shown"]);
    }

    #[test]
    fn test_prefixer_prepends_with_single_space() {
        let (log, buf) = capture();
        log.set_prefixer(StaticPrefix::new("[web]"));
        log.task(&[&"deploy", &3]);
        assert_eq!(buf.contents(), "[web] >>> deploy 3\n");
    }

    #[test]
    fn test_prefixer_consulted_per_line() {
        use std::sync::atomic::AtomicUsize;

        let (log, buf) = capture();
        let counter = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&counter);
        log.set_prefixer(move || format!("#{}", c.fetch_add(1, Ordering::SeqCst)));
        log.task(&[&"a"]);
        log.task(&[&"b"]);
        assert_eq!(buf.lines(), vec!["#0 >>> a", "#1 >>> b"]);

        // Filtered calls do not touch the prefixer.
        log.set_level(Severity::Alert);
        log.task(&[&"c"]);
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_silenced_calls_skip_prefixer() {
        use std::sync::atomic::AtomicUsize;

        let (log, buf) = capture();
        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        log.set_prefixer(move || {
            c.fetch_add(1, Ordering::SeqCst);
            String::new()
        });

        log.silence(true);
        log.task(&[&"hidden"]);
        log.alert(&[&"hidden"]);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(buf.is_empty());

        log.silence(false);
        log.task(&[&"shown"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_prefixer_may_reconfigure_logger() {
        let buf = CaptureBuffer::new();
        let log = Arc::new(
            Logger::builder()
                .sink(buf.sink())
                .color(ColorMode::Never)
                .build(),
        );
        let inner = Arc::clone(&log);
        log.set_prefixer(move || {
            inner.set_level(Severity::Debug);
            "p".to_string()
        });
        log.task(&[&"no deadlock"]);
        assert_eq!(buf.contents(), "p >>> no deadlock\n");
    }

    #[test]
    fn test_color_always_styles_marker_only() {
        let (log, buf) = capture();
        log.set_color_mode(ColorMode::Always);
        log.warn(&[&"hot"]);
        let line = buf.contents();
        assert!(line.starts_with("\x1b["));
        assert!(line.ends_with("\x1b[0m hot\n"));
    }

    #[test]
    fn test_set_sink_swaps_destination() {
        let (log, first) = capture();
        let second = CaptureBuffer::new();
        log.silence(true);
        let _old = log.set_sink(second.sink());
        assert!(log.is_silenced());

        log.silence(false);
        log.task(&[&"moved"]);
        assert!(first.is_empty());
        assert_eq!(second.lines(), vec![">>> moved"]);
    }

    #[test]
    fn test_check_ok_is_silent_passthrough() {
        let (log, buf) = capture();
        let value = log.check(Ok::<_, std::io::Error>(7), &[&"never shown"]);
        assert_eq!(value, 7);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_check_err_writes_context_then_dies() {
        let (log, buf) = capture();
        let result: Result<(), String> = Err("no such file".to_string());
        let err = panic::catch_unwind(AssertUnwindSafe(|| {
            log.check(result, &[&"reading", &"config"]);
        }))
        .unwrap_err();

        assert_eq!(exit_message(err), "exit 1");
        assert_eq!(buf.lines(), vec!["ERR reading config", "XXX no such file"]);
    }

    #[test]
    fn test_check_err_without_message() {
        let (log, buf) = capture();
        let result: Result<(), &str> = Err("boom");
        let _ = panic::catch_unwind(AssertUnwindSafe(|| log.check(result, &[])));
        assert_eq!(buf.lines(), vec!["XXX boom"]);
    }

    #[test]
    fn test_fatal_ignores_threshold_but_respects_silence() {
        let (log, buf) = capture();
        log.set_level(Severity::Error);
        let err = panic::catch_unwind(AssertUnwindSafe(|| log.fatal(&[&"gone"]))).unwrap_err();
        assert_eq!(exit_message(err), format!("exit {}", FATAL_EXIT_CODE));
        assert_eq!(buf.contents(), "XXX gone\n");

        buf.clear();
        log.silence(true);
        let _ = panic::catch_unwind(AssertUnwindSafe(|| log.fatal(&[&"quiet"])));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_error_prefixes_description() {
        let (log, buf) = capture();
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing manifest");
        let _ = panic::catch_unwind(AssertUnwindSafe(|| log.error(&io)));
        assert_eq!(buf.contents(), "XXX Fatal error: missing manifest\n");
    }

    #[test]
    fn test_lock_released_after_fatal_write() {
        let (log, buf) = capture();
        let _ = panic::catch_unwind(AssertUnwindSafe(|| log.fatal(&[&"first"])));
        log.alert(&[&"still usable"]);
        assert_eq!(buf.lines().len(), 2);
    }

    #[test]
    fn test_from_config() {
        let config = LoggerConfig {
            level: Severity::Warn,
            color: ColorMode::Never,
            silenced: false,
            prefix: Some("[cfg]".to_string()),
            timestamp: false,
        };
        let buf = CaptureBuffer::new();
        let log = Logger::from_config(&config, buf.sink());
        log.task(&[&"hidden"]);
        log.warn(&[&"shown"]);
        assert_eq!(buf.contents(), "[cfg] !!! shown\n");
    }

    fn severity() -> impl Strategy<Value = Severity> {
        (0u8..5).prop_map(Severity::from_u8)
    }

    proptest! {
        #[test]
        fn prop_emits_iff_at_or_above_threshold(s in (0u8..4).prop_map(Severity::from_u8), t in severity()) {
            let (log, buf) = capture();
            log.set_level(t);
            emit_at(&log, s);
            prop_assert_eq!(!buf.is_empty(), s >= t);
            prop_assert_eq!(log.enabled(s), s >= t);
        }
    }
}
