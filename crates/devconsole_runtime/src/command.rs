//! The command abstraction.
//!
//! A command is a capability unit: one or more aliases, a line of help, and an
//! action run with the parsed parameters.

use devconsole_foundation::Result;

use crate::registry::CommandRegistry;
use crate::sink::{DisplaySink, LineStyle};

/// A console command.
///
/// Implementations are immutable once constructed; the registry shares them
/// behind an `Arc`.
///
/// ```
/// use devconsole_foundation::Result;
/// use devconsole_runtime::{Command, CommandContext};
///
/// struct HelloWorld;
///
/// impl Command for HelloWorld {
///     fn names(&self) -> &[&str] {
///         &["HelloWorld", "hw"]
///     }
///
///     fn help(&self) -> &str {
///         "Prints out \"Hello World\" to the console."
///     }
///
///     fn execute(&self, ctx: &mut CommandContext<'_>, _parameters: &[String]) -> Result<()> {
///         ctx.print("Hello World");
///         Ok(())
///     }
/// }
/// ```
pub trait Command {
    /// Names this command answers to. Matching ignores case.
    fn names(&self) -> &[&str];

    /// One line describing what the command does.
    fn help(&self) -> &str;

    /// Runs the command.
    ///
    /// # Errors
    ///
    /// Returns an error when the command cannot do its work. The console
    /// reports it and keeps running.
    fn execute(&self, ctx: &mut CommandContext<'_>, parameters: &[String]) -> Result<()>;
}

/// What a running command can reach.
pub struct CommandContext<'a> {
    sink: &'a mut dyn DisplaySink,
    registry: &'a CommandRegistry,
}

impl<'a> CommandContext<'a> {
    /// Creates a context over a sink and the registry the command came from.
    pub fn new(sink: &'a mut dyn DisplaySink, registry: &'a CommandRegistry) -> Self {
        Self { sink, registry }
    }

    /// Prints a line of output.
    pub fn print(&mut self, text: &str) {
        self.sink.print(text);
    }

    /// Prints a styled line of output.
    pub fn print_styled(&mut self, text: &str, style: LineStyle) {
        self.sink.print_styled(text, style);
    }

    /// Clears the display.
    pub fn clear(&mut self) {
        self.sink.clear();
    }

    /// Returns everything currently displayed.
    #[must_use]
    pub fn current_content(&self) -> String {
        self.sink.current_content()
    }

    /// Read access to all registered commands.
    #[must_use]
    pub fn registry(&self) -> &CommandRegistry {
        self.registry
    }
}
