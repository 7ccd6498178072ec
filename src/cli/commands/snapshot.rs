use crate::cli::context::Context;
use crate::cli::error::ScmCtlError;

/// create and share snapshots with uncommitted changes
///
/// The snapshot subsystem lives behind subcommands; the bare command does no
/// work of its own. Every invocation aborts asking for one, and nothing after
/// the command name is inspected on the way there.
pub fn run(_ctx: &Context, _operands: &[String]) -> Result<(), ScmCtlError> {
    Err(ScmCtlError::Abort(
        "you need to specify a subcommand (run with --help to see a list of subcommands)"
            .to_string(),
    ))
}
