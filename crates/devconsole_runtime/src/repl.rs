//! Terminal host for the console.
//!
//! Plays the role a game's UI layer plays: reads submitted lines, treats the
//! toggle line as the open/close key, and only forwards input while the
//! console is open.

use crate::config::ConsoleConfig;
use crate::console::{Console, ConsoleHooks, Dispatch};
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::registry::CommandRegistry;
use crate::sink::TerminalSink;
use devconsole_foundation::{Error, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Visibility hooks for the terminal host.
#[derive(Debug, Default)]
pub struct TerminalHooks;

impl ConsoleHooks for TerminalHooks {
    fn on_show(&mut self) {
        debug!("console shown");
    }

    fn on_hide(&mut self) {
        debug!("console hidden");
    }
}

/// The interactive terminal console.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = io::Stdout> {
    /// The line editor for input.
    editor: E,

    /// The console being driven.
    console: Console<TerminalSink<W>, TerminalHooks>,

    /// Prompts, toggle line and banner settings.
    config: ConsoleConfig,
}

impl Repl<RustylineEditor, io::Stdout> {
    /// Creates a REPL on stdout with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(registry: CommandRegistry, config: ConsoleConfig) -> Result<Self> {
        let editor = RustylineEditor::new(config.history_size)?;
        Ok(Self::with_parts(
            editor,
            TerminalSink::stdout(),
            registry,
            config,
        ))
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Creates a REPL from an editor, a sink and the commands to offer.
    pub fn with_parts(
        mut editor: E,
        sink: TerminalSink<W>,
        registry: CommandRegistry,
        config: ConsoleConfig,
    ) -> Self {
        editor.set_completions(registry.aliases().map(str::to_string).collect());
        let console =
            Console::with_hooks(registry, sink, TerminalHooks).with_open(config.start_open);

        Self {
            editor,
            console,
            config,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.config.show_banner = false;
        self
    }

    /// Returns the console.
    #[must_use]
    pub const fn console(&self) -> &Console<TerminalSink<W>, TerminalHooks> {
        &self.console
    }

    /// Returns the console mutably.
    pub fn console_mut(&mut self) -> &mut Console<TerminalSink<W>, TerminalHooks> {
        &mut self.console
    }

    /// Runs the REPL loop until EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            self.print_banner();
        }

        while self.read_submit()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Reads one line and submits it.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` on EOF.
    fn read_submit(&mut self) -> Result<bool> {
        let prompt = if self.console.is_open() {
            self.config.prompt.clone()
        } else {
            self.config.closed_prompt.clone()
        };

        match self.editor.read_line(&prompt)? {
            ReadResult::Line(line) => {
                self.submit(&line);
                Ok(true)
            }
            ReadResult::Interrupted => Ok(true),
            ReadResult::Eof => Ok(false),
        }
    }

    /// Handles one submitted line.
    ///
    /// The toggle line opens or closes the console. Anything else is
    /// dispatched only while the console is open; returns `None` when the
    /// line was not dispatched.
    pub fn submit(&mut self, line: &str) -> Option<Dispatch> {
        if line.trim() == self.config.toggle_line {
            self.console.toggle();
            return None;
        }

        if !self.console.is_open() {
            debug!("input ignored while console is closed");
            return None;
        }

        if !line.trim().is_empty() {
            self.editor.add_history(line);
        }

        Some(self.console.handle_input(line))
    }

    /// Runs every command line in `source`, regardless of open state.
    ///
    /// Blank lines and lines starting with `#` are skipped. Returns how many
    /// lines did not run successfully.
    pub fn run_script(&mut self, source: &str) -> usize {
        source
            .lines()
            .filter(|line| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with('#')
            })
            .map(|line| self.console.handle_input(line))
            .filter(|outcome| matches!(outcome, Dispatch::NotFound | Dispatch::Failed))
            .count()
    }

    /// Reads a script file and runs it with [`Repl::run_script`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn run_file(&mut self, path: &Path) -> Result<usize> {
        let source = fs::read_to_string(path).map_err(|e| Error::io(path, &e))?;
        Ok(self.run_script(&source))
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("\x1b[1;36mdevconsole v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!(
            "Type `help` to list commands, `{}` to open or close the console, Ctrl+D to exit.\n",
            self.config.toggle_line
        );

        // Flush to ensure banner appears
        let _ = io::stdout().flush();
    }
}
