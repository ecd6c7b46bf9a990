//! Output destinations for status lines.

use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Where formatted status lines are written.
#[derive(Default)]
pub enum Sink {
    /// Standard error
    #[default]
    Stderr,
    /// Standard output
    Stdout,
    /// Accepts and drops everything
    Discard,
    /// Any caller-supplied writer
    Writer(Box<dyn Write + Send>),
}

impl Sink {
    /// Wrap an arbitrary writer.
    pub fn writer(w: impl Write + Send + 'static) -> Self {
        Sink::Writer(Box::new(w))
    }

    /// Whether this destination should receive ANSI styling in
    /// [`ColorMode::Auto`](statuslog_types::ColorMode::Auto).
    pub fn supports_color(&self) -> bool {
        match self {
            Sink::Stderr => console::colors_enabled_stderr(),
            Sink::Stdout => console::colors_enabled(),
            Sink::Discard | Sink::Writer(_) => false,
        }
    }

    /// Write one complete line with a single `write_all`, then flush.
    ///
    /// Failures are reported through `tracing` and otherwise ignored:
    /// emitting a status line never fails.
    pub fn write_line(&mut self, line: &str) {
        let result = match self {
            Sink::Stderr => write_flush(&mut io::stderr().lock(), line),
            Sink::Stdout => write_flush(&mut io::stdout().lock(), line),
            Sink::Discard => Ok(()),
            Sink::Writer(w) => write_flush(w, line),
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, sink = ?self, "dropped status line");
        }
    }
}

fn write_flush(w: &mut dyn Write, line: &str) -> io::Result<()> {
    w.write_all(line.as_bytes())?;
    w.flush()
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stderr => write!(f, "Stderr"),
            Sink::Stdout => write!(f, "Stdout"),
            Sink::Discard => write!(f, "Discard"),
            Sink::Writer(_) => write!(f, "Writer(..)"),
        }
    }
}

/// In-memory, cloneable writer.
///
/// Every clone shares the same buffer, so one clone can be handed to a
/// [`Logger`](crate::Logger) as its sink while another inspects what was
/// written.
#[derive(Clone, Default)]
pub struct CaptureBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// A [`Sink`] writing into this buffer.
    pub fn sink(&self) -> Sink {
        Sink::writer(self.clone())
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    /// Written content split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// True if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop everything written so far.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
