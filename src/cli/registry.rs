use std::collections::BTreeMap;

use crate::cli::context::Context;
use crate::cli::error::ScmCtlError;

/// Command handler. Receives the execution context and the tokens that
/// followed the command name on the command line, verbatim and unparsed.
pub type Handler = fn(&Context, &[String]) -> Result<(), ScmCtlError>;

/// A registered command: its name, the usage hint shown after the name in
/// help output, a one-line description, and the handler to invoke.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub synopsis: &'static str,
    pub doc: &'static str,
    pub run: Handler,
}

/// Registry of commands, constructed once at startup and owned by the CLI
/// for the duration of the parsing/dispatch phase.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, CommandSpec>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. A later registration under the same name replaces
    /// the earlier one.
    pub fn register(&mut self, spec: CommandSpec) {
        self.commands.insert(spec.name, spec);
    }

    /// Look up a command by its exact name.
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    /// Registered commands in name order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
