//! Display sinks: where console output goes.
//!
//! The console never renders text itself. Everything it prints flows through
//! a [`DisplaySink`] owned by the host. Two sinks ship with the crate:
//! [`BufferSink`] keeps the transcript in memory, and [`TerminalSink`] writes
//! ANSI-styled lines to a terminal while keeping the same transcript.

use std::io::{self, Write};

/// How a printed line should be presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineStyle {
    /// Regular command output.
    #[default]
    Normal,
    /// The echoed input line of a dispatched command.
    Echo,
    /// Not-found and failure messages.
    Error,
}

/// Destination for console output, implemented by the host.
pub trait DisplaySink {
    /// Appends a line of text.
    fn print(&mut self, text: &str);

    /// Appends a line with a presentation hint.
    ///
    /// Sinks that cannot style text fall back to [`DisplaySink::print`].
    fn print_styled(&mut self, text: &str, style: LineStyle) {
        let _ = style;
        self.print(text);
    }

    /// Removes all displayed text.
    fn clear(&mut self);

    /// Returns everything currently displayed.
    fn current_content(&self) -> String;
}

/// An in-memory sink that records a plain-text transcript.
///
/// Each printed line is stored followed by a newline; styling is dropped.
#[derive(Clone, Debug, Default)]
pub struct BufferSink {
    content: String,
}

impl BufferSink {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the transcript as individual lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }

    /// Returns true when nothing has been printed since the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl DisplaySink for BufferSink {
    fn print(&mut self, text: &str) {
        self.content.push_str(text);
        self.content.push('\n');
    }

    fn clear(&mut self) {
        self.content.clear();
    }

    fn current_content(&self) -> String {
        self.content.clone()
    }
}

/// A sink that renders to a terminal with ANSI colors.
///
/// The transcript kept for [`DisplaySink::current_content`] is uncolored.
pub struct TerminalSink<W: Write = io::Stdout> {
    out: W,
    transcript: BufferSink,
}

impl TerminalSink<io::Stdout> {
    /// Creates a sink writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    /// Creates a sink writing to the given writer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            transcript: BufferSink::new(),
        }
    }

    /// Returns the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn write_line(&mut self, rendered: &str) {
        // A broken terminal is not something the console can report anywhere.
        let _ = writeln!(self.out, "{rendered}");
        let _ = self.out.flush();
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn print(&mut self, text: &str) {
        self.print_styled(text, LineStyle::Normal);
    }

    fn print_styled(&mut self, text: &str, style: LineStyle) {
        self.transcript.print(text);
        let rendered = match style {
            LineStyle::Normal => text.to_string(),
            LineStyle::Echo => format!("\x1b[38;5;246m{text}\x1b[0m"),
            LineStyle::Error => format!("\x1b[31m{text}\x1b[0m"),
        };
        self.write_line(&rendered);
    }

    fn clear(&mut self) {
        self.transcript.clear();
        let _ = write!(self.out, "\x1b[2J\x1b[H");
        let _ = self.out.flush();
    }

    fn current_content(&self) -> String {
        self.transcript.current_content()
    }
}
