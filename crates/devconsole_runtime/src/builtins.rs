//! Built-in console commands: `echo`, `help`, `clear` and `dump`.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use devconsole_foundation::{Error, Result};
use tracing::{info, warn};

use crate::command::{Command, CommandContext};
use crate::config::ConsoleConfig;
use crate::registry::CommandRegistry;
use crate::sink::LineStyle;

/// Registers every built-in command.
pub fn register_builtins(registry: &mut CommandRegistry, config: &ConsoleConfig) {
    registry
        .register(Arc::new(EchoCommand))
        .register(Arc::new(HelpCommand))
        .register(Arc::new(ClearCommand))
        .register(Arc::new(DumpCommand::new(config.dump_directory.clone())));
}

/// Prints its parameters back, joined by single spaces.
pub struct EchoCommand;

impl Command for EchoCommand {
    fn names(&self) -> &[&str] {
        &["echo"]
    }

    fn help(&self) -> &str {
        "Takes input and \"echoes\" it back to the console."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, parameters: &[String]) -> Result<()> {
        ctx.print(&parameters.join(" "));
        Ok(())
    }
}

/// Lists commands, or shows the help of one.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn names(&self) -> &[&str] {
        &["h", "help"]
    }

    fn help(&self) -> &str {
        "Provides help, info, documentation, etc. about the given command."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, parameters: &[String]) -> Result<()> {
        let Some(name) = parameters.first() else {
            let lines: Vec<String> = ctx
                .registry()
                .commands()
                .map(|command| format!("{} --> {}", command.names().join(", "), command.help()))
                .collect();
            for line in &lines {
                ctx.print(line);
            }
            return Ok(());
        };

        let help = ctx.registry().resolve(name).map(|command| command.help().to_string());
        match help {
            Some(help) => ctx.print(&help),
            None => {
                let message = Error::command_not_found(name).to_string();
                ctx.print_styled(&message, LineStyle::Error);
            }
        }
        Ok(())
    }
}

/// Clears the display.
pub struct ClearCommand;

impl Command for ClearCommand {
    fn names(&self) -> &[&str] {
        &["c", "cls", "clr", "clear"]
    }

    fn help(&self) -> &str {
        "Clears the console of all text."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _parameters: &[String]) -> Result<()> {
        ctx.clear();
        Ok(())
    }
}

/// Writes the current console content to a text file.
pub struct DumpCommand {
    directory: PathBuf,
}

impl DumpCommand {
    /// Creates a dump command writing into `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl Command for DumpCommand {
    fn names(&self) -> &[&str] {
        &["dump"]
    }

    fn help(&self) -> &str {
        "Dumps the console content to a text file. Usage: dump [filename]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, parameters: &[String]) -> Result<()> {
        let file_name = match parameters.first() {
            Some(name) if !name.is_empty() => name.clone(),
            _ => default_dump_file_name(Local::now().naive_local()),
        };
        let path = self.directory.join(file_name);

        // Snapshot before reporting, so the report itself is not in the file.
        let content = ctx.current_content();

        match fs::write(&path, content) {
            Ok(()) => {
                info!(path = %path.display(), "dumped console content");
                ctx.print(&format!("Console content dumped to {}", path.display()));
            }
            Err(e) => {
                let err = Error::io(&path, &e);
                warn!(error = %err, "failed to dump console content");
                ctx.print_styled(
                    &format!("Failed to dump console content to {}: {e}", path.display()),
                    LineStyle::Error,
                );
            }
        }
        Ok(())
    }
}

/// Builds the default dump file name, `consoledump_<year-day-month--hour-minute-second>.txt`.
#[must_use]
pub fn default_dump_file_name(now: NaiveDateTime) -> String {
    format!("consoledump_{}.txt", now.format("%Y-%d-%m--%H-%M-%S"))
}
