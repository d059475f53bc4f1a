//! Command registry, dispatch and hosting for the developer console.
//!
//! This crate provides:
//! - [`Command`] - The trait every console command implements
//! - [`CommandRegistry`] - Case-insensitive, multi-alias command lookup
//! - [`Console`] - Open/closed state machine and input dispatch
//! - [`DisplaySink`] - Where console output goes ([`BufferSink`], [`TerminalSink`])
//! - Built-in `echo`, `help`, `clear` and `dump` commands
//! - [`Repl`] - A terminal host driving a console through rustyline
//!
//! # Example
//!
//! ```
//! use devconsole_runtime::{BufferSink, CommandRegistry, Console, ConsoleConfig, DisplaySink};
//!
//! let mut registry = CommandRegistry::new();
//! devconsole_runtime::register_builtins(&mut registry, &ConsoleConfig::default());
//!
//! let mut console = Console::new(registry, BufferSink::new());
//! console.handle_input("ECHO hi there");
//! assert_eq!(console.sink().current_content(), "ECHO hi there\nhi there\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builtins;
pub mod command;
pub mod config;
pub mod console;
pub mod editor;
pub mod registry;
pub mod repl;
pub mod sink;

pub use builtins::{
    ClearCommand, DumpCommand, EchoCommand, HelpCommand, default_dump_file_name, register_builtins,
};
pub use command::{Command, CommandContext};
pub use config::ConsoleConfig;
pub use console::{Console, ConsoleHooks, Dispatch};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use registry::CommandRegistry;
pub use repl::{Repl, TerminalHooks};
pub use sink::{BufferSink, DisplaySink, LineStyle, TerminalSink};
