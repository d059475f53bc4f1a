//! Command registry and name resolution.

use std::fmt;
use std::sync::Arc;

use devconsole_foundation::Result;
use tracing::{debug, warn};

use crate::command::Command;

/// All commands available to a console, in registration order.
///
/// Resolution is case-insensitive over every alias of every command. When two
/// commands share an alias the one registered first wins; later ones are
/// shadowed for that alias but stay reachable through their other aliases.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command.
    ///
    /// A command without aliases could never be resolved, so it is logged and
    /// skipped.
    pub fn register(&mut self, command: Arc<dyn Command>) -> &mut Self {
        let names = command.names();
        if names.is_empty() {
            warn!(help = command.help(), "skipping console command with no names");
            return self;
        }

        for name in names {
            if self.resolve(name).is_some() {
                debug!(alias = %name, "alias already taken; earlier command wins");
            }
        }

        debug!(names = ?names, "registered console command");
        self.commands.push(command);
        self
    }

    /// Registers the command built by `factory`.
    ///
    /// A failing constructor does not abort startup: the failure is logged and
    /// the command is left out. Returns whether the command was added.
    pub fn register_with<F>(&mut self, factory: F) -> bool
    where
        F: FnOnce() -> Result<Arc<dyn Command>>,
    {
        match factory() {
            Ok(command) => {
                let before = self.commands.len();
                self.register(command);
                self.commands.len() > before
            }
            Err(e) => {
                warn!(error = %e, "failed to add console command");
                false
            }
        }
    }

    /// Looks up a command by any of its aliases, ignoring case.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&Arc<dyn Command>> {
        let wanted = name.to_lowercase();
        self.commands.iter().find(|command| {
            command
                .names()
                .iter()
                .any(|alias| alias.to_lowercase() == wanted)
        })
    }

    /// Returns all registered commands in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.commands.iter()
    }

    /// Returns every alias of every command, in registration order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.commands
            .iter()
            .flat_map(|command| command.names().iter().copied())
    }

    /// Returns lowercased aliases claimed by more than one command.
    #[must_use]
    pub fn shadowed_aliases(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        let mut shadowed: Vec<String> = Vec::new();

        for command in &self.commands {
            let mut own: Vec<String> = command.names().iter().map(|n| n.to_lowercase()).collect();
            own.sort();
            own.dedup();

            for alias in own {
                if seen.contains(&alias) {
                    if !shadowed.contains(&alias) {
                        shadowed.push(alias);
                    }
                } else {
                    seen.push(alias);
                }
            }
        }

        shadowed
    }

    /// Returns the number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no commands are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.commands.iter().map(|command| command.names()))
            .finish()
    }
}
