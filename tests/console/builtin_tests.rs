//! Built-in command tests, driven through the console.

use std::fs;

use devconsole::runtime::{
    BufferSink, CommandRegistry, Console, ConsoleConfig, Dispatch, DisplaySink, register_builtins,
};

fn console_with_dump_dir(dir: &std::path::Path) -> Console {
    let config = ConsoleConfig::default().with_dump_directory(dir);
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry, &config);
    Console::new(registry, BufferSink::new())
}

fn console() -> Console {
    console_with_dump_dir(std::path::Path::new("."))
}

#[test]
fn help_lists_each_command_once_in_order() {
    let mut console = console();
    console.handle_input("help");

    let content = console.sink().current_content();
    let lines: Vec<_> = content.lines().skip(1).collect();
    assert_eq!(lines.len(), console.registry().len());

    let heads: Vec<_> = lines
        .iter()
        .map(|line| line.split(" --> ").next().unwrap())
        .collect();
    assert_eq!(heads, vec!["echo", "h, help", "c, cls, clr, clear", "dump"]);
}

#[test]
fn help_with_argument_shows_that_command() {
    let mut console = console();
    console.handle_input("h ECHO");

    let content = console.sink().current_content();
    assert_eq!(
        content.lines().last(),
        Some("Takes input and \"echoes\" it back to the console.")
    );
}

#[test]
fn help_with_unknown_argument() {
    let mut console = console();
    assert_eq!(console.handle_input("help warp"), Dispatch::Executed);

    let content = console.sink().current_content();
    assert_eq!(content.lines().last(), Some("Command \"warp\" does not exist."));
}

#[test]
fn every_clear_alias_empties_the_sink() {
    for alias in ["c", "cls", "clr", "clear", "CLEAR"] {
        let mut console = console();
        console.print("something");
        console.handle_input(alias);
        assert_eq!(console.sink().current_content(), "", "alias {alias}");
    }
}

#[test]
fn dump_writes_transcript_to_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut console = console_with_dump_dir(dir.path());

    console.handle_input("echo hello");
    console.handle_input("bogus");
    let before = console.sink().current_content();

    console.handle_input("dump session.txt");

    let written = fs::read_to_string(dir.path().join("session.txt")).unwrap();
    // The file holds everything up to and including the echoed dump line.
    assert_eq!(written, format!("{before}dump session.txt\n"));
}

#[test]
fn dump_without_argument_picks_default_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut console = console_with_dump_dir(dir.path());

    console.print("line one");
    console.clear();
    console.print("line two");
    console.handle_input("dump");

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("consoledump_"));

    let written = fs::read_to_string(dir.path().join(&names[0])).unwrap();
    assert_eq!(written, "line two\ndump\n");
}

#[test]
fn dump_into_missing_directory_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    let mut console = console_with_dump_dir(&dir.path().join("nope"));

    assert_eq!(console.handle_input("dump out.txt"), Dispatch::Executed);

    let content = console.sink().current_content();
    assert!(
        content
            .lines()
            .last()
            .unwrap()
            .starts_with("Failed to dump console content to")
    );
}
