use std::process;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use scmctl::cli::context::Context;
use scmctl::cli::error::ScmCtlError;
use scmctl::cli::registry::CommandRegistry;
use scmctl::cli::{commands, ScmCtl};
use scmctl::config::AppConfig;

fn main() {
    let registry = commands::builtin();

    let cli = match ScmCtl::parse_with_commands(&registry, std::env::args_os()) {
        Ok(cli) => cli,
        // --help, --version, and usage errors render through clap
        Err(e) => e.exit(),
    };

    if let Err(e) = run(cli, &registry) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: ScmCtl, registry: &CommandRegistry) -> Result<(), ScmCtlError> {
    let config = AppConfig::load(cli.config.as_deref())?;

    // RUST_LOG wins over the config file; logs go to stderr so command
    // output streams stay clean
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(version = env!("CARGO_PKG_VERSION"), "scmctl starting");

    let ctx = Context::new(config);
    cli.run(registry, &ctx)
}
