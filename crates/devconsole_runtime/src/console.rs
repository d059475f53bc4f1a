//! The console: visibility state and input dispatch.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use devconsole_foundation::Error;
use devconsole_parser::InputParser;
use tracing::{debug, warn};

use crate::command::CommandContext;
use crate::registry::CommandRegistry;
use crate::sink::{BufferSink, DisplaySink, LineStyle};

/// Host callbacks fired on visibility changes.
///
/// Both methods default to doing nothing.
pub trait ConsoleHooks {
    /// Called after the console becomes open.
    fn on_show(&mut self) {}

    /// Called after the console becomes closed.
    fn on_hide(&mut self) {}
}

impl ConsoleHooks for () {}

/// Outcome of [`Console::handle_input`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The line was empty; a blank line was printed.
    Blank,
    /// No command matched the token.
    NotFound,
    /// The command ran to completion.
    Executed,
    /// The command returned an error or panicked.
    Failed,
}

/// A developer console.
///
/// Owns the command registry, the display sink and the open/closed state.
/// The host decides when to forward input; [`Console::handle_input`] does not
/// check [`Console::is_open`].
pub struct Console<S: DisplaySink = BufferSink, H: ConsoleHooks = ()> {
    registry: CommandRegistry,
    sink: S,
    hooks: H,
    open: bool,
}

impl<S: DisplaySink> Console<S, ()> {
    /// Creates a closed console without host hooks.
    pub fn new(registry: CommandRegistry, sink: S) -> Self {
        Self::with_hooks(registry, sink, ())
    }
}

impl<S: DisplaySink, H: ConsoleHooks> Console<S, H> {
    /// Creates a closed console that notifies `hooks` on show and hide.
    pub fn with_hooks(registry: CommandRegistry, sink: S, hooks: H) -> Self {
        Self {
            registry,
            sink,
            hooks,
            open: false,
        }
    }

    /// Sets the initial open state without firing hooks.
    #[must_use]
    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Returns whether the console is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the console and fires [`ConsoleHooks::on_show`].
    pub fn show(&mut self) {
        self.open = true;
        self.hooks.on_show();
    }

    /// Closes the console and fires [`ConsoleHooks::on_hide`].
    pub fn hide(&mut self) {
        self.open = false;
        self.hooks.on_hide();
    }

    /// Switches between open and closed.
    pub fn toggle(&mut self) {
        if self.open {
            self.hide();
        } else {
            self.show();
        }
    }

    /// Parses a line of input and runs the matching command.
    ///
    /// - An empty line prints a blank line.
    /// - A known command has the raw line echoed, then runs. Errors and panics
    ///   from the command are reported on the sink.
    /// - An unknown command prints `Command "X" does not exist.`
    pub fn handle_input(&mut self, raw_input: &str) -> Dispatch {
        let parsed = InputParser::parse(raw_input);

        if parsed.is_empty() {
            self.sink.print("");
            return Dispatch::Blank;
        }

        let Some(command) = self.registry.resolve(&parsed.command).cloned() else {
            debug!(command = %parsed.command, "unknown console command");
            let message = Error::command_not_found(&parsed.command).to_string();
            self.sink.print_styled(&message, LineStyle::Error);
            return Dispatch::NotFound;
        };

        self.sink.print_styled(raw_input, LineStyle::Echo);

        let mut ctx = CommandContext::new(&mut self.sink, &self.registry);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            command.execute(&mut ctx, &parsed.parameters)
        }));

        let reason = match outcome {
            Ok(Ok(())) => return Dispatch::Executed,
            Ok(Err(e)) => e.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };

        warn!(command = %parsed.command, %reason, "console command failed");
        let message = Error::execution_failed(&parsed.command, reason).to_string();
        self.sink.print_styled(&message, LineStyle::Error);
        Dispatch::Failed
    }

    /// Prints a line to the sink.
    pub fn print(&mut self, text: &str) {
        self.sink.print(text);
    }

    /// Clears the sink.
    pub fn clear(&mut self) {
        self.sink.clear();
    }

    /// Returns the command registry.
    #[must_use]
    pub const fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Returns the display sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the display sink mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Returns the host hooks.
    #[must_use]
    pub const fn hooks(&self) -> &H {
        &self.hooks
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "command panicked".to_string()
    }
}
