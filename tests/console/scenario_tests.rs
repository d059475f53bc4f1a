//! End-to-end console sessions.

use devconsole::runtime::{
    BufferSink, CommandRegistry, Console, ConsoleConfig, Dispatch, DisplaySink, register_builtins,
};

#[test]
fn echo_bogus_blank_clear_session() {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry, &ConsoleConfig::default());
    let mut console = Console::new(registry, BufferSink::new());
    console.show();

    assert_eq!(console.handle_input("ECHO hi there"), Dispatch::Executed);
    assert_eq!(
        console.sink().lines().collect::<Vec<_>>(),
        vec!["ECHO hi there", "hi there"]
    );

    assert_eq!(console.handle_input("bogus"), Dispatch::NotFound);
    assert_eq!(
        console.sink().lines().last(),
        Some("Command \"bogus\" does not exist.")
    );

    let before = console.sink().current_content();
    assert_eq!(console.handle_input(""), Dispatch::Blank);
    assert_eq!(console.sink().current_content(), format!("{before}\n"));

    assert_eq!(console.handle_input("clear"), Dispatch::Executed);
    assert_eq!(console.sink().current_content(), "");
}

#[test]
fn hosted_session_with_toggle() {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry, &ConsoleConfig::default());
    let mut console = Console::new(registry, BufferSink::new());

    // A host forwards input only while open.
    let submit = |console: &mut Console, line: &str| {
        if console.is_open() {
            Some(console.handle_input(line))
        } else {
            None
        }
    };

    assert_eq!(submit(&mut console, "echo ignored"), None);
    console.toggle();
    assert_eq!(submit(&mut console, "echo seen"), Some(Dispatch::Executed));
    console.toggle();
    assert_eq!(submit(&mut console, "echo ignored"), None);

    assert_eq!(console.sink().current_content(), "echo seen\nseen\n");
}
