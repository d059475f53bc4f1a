//! Integration tests for the devconsole_runtime crate.
//!
//! Tests for the console as a host would drive it:
//! - Command registration and resolution
//! - Visibility state machine
//! - Dispatch and failure reporting
//! - Built-in commands
//! - End-to-end sessions

mod builtin_tests;
mod dispatch_tests;
mod scenario_tests;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use devconsole::foundation::Result;
use devconsole::runtime::{Command, CommandContext};

/// A command that records the parameters it was called with.
pub struct Recorder {
    pub names: Vec<&'static str>,
    pub calls: Rc<RefCell<Vec<Vec<String>>>>,
}

impl Recorder {
    pub fn new(names: Vec<&'static str>) -> (Arc<dyn Command>, Rc<RefCell<Vec<Vec<String>>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let command = Arc::new(Self {
            names,
            calls: Rc::clone(&calls),
        });
        (command, calls)
    }
}

impl Command for Recorder {
    fn names(&self) -> &[&str] {
        &self.names
    }

    fn help(&self) -> &str {
        "Records its parameters."
    }

    fn execute(&self, _ctx: &mut CommandContext<'_>, parameters: &[String]) -> Result<()> {
        self.calls.borrow_mut().push(parameters.to_vec());
        Ok(())
    }
}
