pub mod commands;
pub mod context;
pub mod error;
pub mod registry;

use std::ffi::OsString;
use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};
use tracing::debug;

use self::context::Context;
use self::registry::CommandRegistry;

#[derive(Parser, Debug)]
#[command(name = "scmctl", version, about = "Source control companion commands")]
pub struct ScmCtl {
    /// Config file (defaults to scmctl.toml in the working directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Command to run, followed by its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub argv: Vec<String>,
}

impl ScmCtl {
    /// Parse the command line, with the registered commands appended to the
    /// help output. Help, version, and usage errors surface as `clap::Error`.
    pub fn parse_with_commands<I, T>(
        registry: &CommandRegistry,
        argv: I,
    ) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let command = Self::command().after_help(command_summary(registry));
        let matches = command.try_get_matches_from(argv)?;
        Self::from_arg_matches(&matches)
    }

    /// Dispatch to the registered handler. Tokens after the command name are
    /// handed over verbatim; the host does not interpret them.
    pub fn run(
        self,
        registry: &CommandRegistry,
        ctx: &Context,
    ) -> Result<(), crate::cli::error::ScmCtlError> {
        let Some((name, operands)) = self.argv.split_first() else {
            return Err(error::ScmCtlError::NoCommand);
        };

        let spec = registry
            .get(name)
            .ok_or_else(|| error::ScmCtlError::UnknownCommand(name.clone()))?;

        debug!(command = spec.name, operands = operands.len(), "dispatching");
        (spec.run)(ctx, operands)
    }
}

fn command_summary(registry: &CommandRegistry) -> String {
    let mut out = String::from("Commands:\n");
    for spec in registry.iter() {
        let _ = writeln!(out, "  {} {}", spec.name, spec.synopsis);
        let _ = writeln!(out, "      {}", spec.doc);
    }
    out
}
