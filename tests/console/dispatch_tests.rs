//! Dispatch tests.
//!
//! Tests for how `handle_input` routes parsed lines.

use std::sync::Arc;

use devconsole::foundation::{Error, Result};
use devconsole::runtime::{
    BufferSink, Command, CommandContext, CommandRegistry, Console, Dispatch, DisplaySink,
};

use crate::Recorder;

struct Divide;

impl Command for Divide {
    fn names(&self) -> &[&str] {
        &["div"]
    }

    fn help(&self) -> &str {
        "Divides two integers."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, parameters: &[String]) -> Result<()> {
        let [a, b] = parameters else {
            return Err(Error::invalid_argument("usage: div <a> <b>"));
        };
        let a: i64 = a
            .parse()
            .map_err(|_| Error::invalid_argument(format!("not a number: {a}")))?;
        let b: i64 = b
            .parse()
            .map_err(|_| Error::invalid_argument(format!("not a number: {b}")))?;
        ctx.print(&(a / b).to_string());
        Ok(())
    }
}

fn lines(console: &Console) -> Vec<String> {
    console
        .sink()
        .current_content()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn parameters_reach_the_command() {
    let mut registry = CommandRegistry::new();
    let (command, calls) = Recorder::new(vec!["rec"]);
    registry.register(command);
    let mut console = Console::new(registry, BufferSink::new());

    assert_eq!(console.handle_input("  REC one  two "), Dispatch::Executed);

    assert_eq!(
        *calls.borrow(),
        vec![vec!["one".to_string(), String::new(), "two".to_string()]]
    );
}

#[test]
fn raw_input_is_echoed_before_output() {
    let mut registry = CommandRegistry::new();
    registry.register(Arc::new(Divide));
    let mut console = Console::new(registry, BufferSink::new());

    console.handle_input("div 9 3");

    assert_eq!(lines(&console), vec!["div 9 3", "3"]);
}

#[test]
fn not_found_message_uses_typed_token() {
    let mut console = Console::new(CommandRegistry::new(), BufferSink::new());

    assert_eq!(console.handle_input("Teleport 1 2"), Dispatch::NotFound);
    assert_eq!(lines(&console), vec!["Command \"Teleport\" does not exist."]);
}

#[test]
fn empty_input_does_not_look_up_anything() {
    let mut registry = CommandRegistry::new();
    let (command, calls) = Recorder::new(vec!["rec"]);
    registry.register(command);
    let mut console = Console::new(registry, BufferSink::new());

    assert_eq!(console.handle_input(""), Dispatch::Blank);
    assert_eq!(console.sink().current_content(), "\n");
    assert!(calls.borrow().is_empty());
}

#[test]
fn command_error_is_reported_and_console_survives() {
    let mut registry = CommandRegistry::new();
    registry.register(Arc::new(Divide));
    let mut console = Console::new(registry, BufferSink::new());

    assert_eq!(console.handle_input("div x 2"), Dispatch::Failed);
    assert_eq!(
        lines(&console),
        vec![
            "div x 2",
            "Command \"div\" failed: invalid argument: not a number: x",
        ]
    );

    console.clear();
    assert_eq!(console.handle_input("div 8 2"), Dispatch::Executed);
    assert_eq!(lines(&console), vec!["div 8 2", "4"]);
}

#[test]
fn command_panic_is_reported() {
    let mut registry = CommandRegistry::new();
    registry.register(Arc::new(Divide));
    let mut console = Console::new(registry, BufferSink::new());

    assert_eq!(console.handle_input("div 1 0"), Dispatch::Failed);

    let lines = lines(&console);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("Command \"div\" failed:"));
}

#[test]
fn closed_console_still_dispatches() {
    // Gating on open state belongs to the host.
    let mut registry = CommandRegistry::new();
    let (command, calls) = Recorder::new(vec!["rec"]);
    registry.register(command);
    let mut console = Console::new(registry, BufferSink::new());

    assert!(!console.is_open());
    assert_eq!(console.handle_input("rec"), Dispatch::Executed);
    assert_eq!(calls.borrow().len(), 1);
}
