pub mod snapshot;

use crate::cli::registry::{CommandRegistry, CommandSpec};

/// Build the registry of built-in commands.
pub fn builtin() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    registry.register(CommandSpec {
        name: "snapshot",
        synopsis: "SUBCOMMAND ...",
        doc: "create and share snapshots with uncommitted changes",
        run: snapshot::run,
    });

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_registered() {
        let registry = builtin();
        let spec = registry.get("snapshot").expect("snapshot not registered");

        assert_eq!(spec.name, "snapshot");
        assert_eq!(spec.synopsis, "SUBCOMMAND ...");
    }
}
