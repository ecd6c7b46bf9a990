//! Severity markers, their terminal styling, and line composition.

use console::{Style, StyledObject};
use statuslog_types::Severity;
use std::fmt::{self, Display, Write as _};

/// The fixed three-character glyph that opens every status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Dim blank gutter
    Debug,
    /// `>>>`
    Task,
    /// `!!!`
    Warn,
    /// ` ! `
    Alert,
    /// ` ✔ `
    Ok,
    /// ` - `
    Progress,
    /// `XXX`, inverse alert styling
    Fatal,
    /// `ERR`, context line written by `check` before dying
    Err,
}

impl Marker {
    /// The raw glyph without styling.
    pub const fn glyph(self) -> &'static str {
        match self {
            Marker::Debug => "   ",
            Marker::Task => ">>>",
            Marker::Warn => "!!!",
            Marker::Alert => " ! ",
            Marker::Ok => " ✔ ",
            Marker::Progress => " - ",
            Marker::Fatal => "XXX",
            Marker::Err => "ERR",
        }
    }

    /// Severity a call with this marker must meet, or `None` when the
    /// marker is written regardless of threshold.
    pub const fn threshold(self) -> Option<Severity> {
        match self {
            Marker::Debug => Some(Severity::Debug),
            Marker::Task | Marker::Ok | Marker::Progress => Some(Severity::Task),
            Marker::Warn => Some(Severity::Warn),
            Marker::Alert => Some(Severity::Alert),
            Marker::Fatal | Marker::Err => None,
        }
    }

    /// Terminal style for the glyph.
    pub fn style(self) -> Style {
        match self {
            Marker::Debug => palette::dark(),
            Marker::Task => palette::yellow(),
            Marker::Warn => palette::red(),
            Marker::Alert => palette::purple(),
            Marker::Ok => palette::green(),
            Marker::Fatal => palette::white_on_red(),
            Marker::Progress | Marker::Err => Style::new(),
        }
    }

    /// Render the glyph, with ANSI escapes only when `color` is set.
    ///
    /// Styling is forced either way so the result does not depend on
    /// whether the current process happens to own a tty.
    pub fn render(self, color: bool) -> String {
        self.style()
            .force_styling(color)
            .apply_to(self.glyph())
            .to_string()
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Named styles shared by the markers and the inline color helpers.
mod palette {
    use console::Style;

    pub fn yellow() -> Style {
        Style::new().yellow().bold()
    }

    pub fn red() -> Style {
        Style::new().red().bright().bold()
    }

    pub fn purple() -> Style {
        Style::new().magenta().bold()
    }

    pub fn green() -> Style {
        Style::new().green().bold()
    }

    pub fn white_on_red() -> Style {
        Style::new().white().on_red().bold()
    }

    pub fn dark() -> Style {
        Style::new().black().bright()
    }

    pub fn bold_white() -> Style {
        Style::new().white().bright().bold()
    }
}

/// Bold yellow text for highlighting words inside a message.
///
/// Like the other helpers below, styling follows the process color
/// detection; call `.force_styling(..)` on the result to override it.
///
/// ```
/// use statuslog_core::term;
///
/// let name = term::bold_white("api-gateway").force_styling(false);
/// assert_eq!(name.to_string(), "api-gateway");
/// ```
pub fn yellow<D>(val: D) -> StyledObject<D> {
    palette::yellow().apply_to(val)
}

/// Bold bright red text.
pub fn red<D>(val: D) -> StyledObject<D> {
    palette::red().apply_to(val)
}

/// Bold magenta text.
pub fn purple<D>(val: D) -> StyledObject<D> {
    palette::purple().apply_to(val)
}

/// Bold green text.
pub fn green<D>(val: D) -> StyledObject<D> {
    palette::green().apply_to(val)
}

/// Bold white on a red background.
pub fn white_on_red<D>(val: D) -> StyledObject<D> {
    palette::white_on_red().apply_to(val)
}

/// Dim bright-black text.
pub fn dark<D>(val: D) -> StyledObject<D> {
    palette::dark().apply_to(val)
}

/// Bold bright white text.
pub fn bold_white<D>(val: D) -> StyledObject<D> {
    palette::bold_white().apply_to(val)
}

/// Join the display form of each argument with single spaces.
pub fn join_args(args: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", arg);
    }
    out
}

/// Compose one full status line: `<prefix> <marker> <args>\n`.
///
/// An empty prefix contributes no leading separator. The line always ends
/// in exactly one newline appended here, even if the last argument already
/// ends with one.
pub fn compose_line(prefix: &str, marker: &str, args: &[&dyn Display]) -> String {
    let body = join_args(args);
    let mut line = String::with_capacity(prefix.len() + marker.len() + body.len() + 3);
    if !prefix.is_empty() {
        line.push_str(prefix);
        line.push(' ');
    }
    line.push_str(marker);
    line.push(' ');
    line.push_str(&body);
    line.push('\n');
    line
}
