use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScmCtlError {
    /// User-facing abort: the requested operation cannot proceed because the
    /// input was insufficient. Displays as the bare message.
    #[error("{0}")]
    Abort(String),

    #[error("unknown command '{0}' (run with --help to see a list of commands)")]
    UnknownCommand(String),

    #[error("no command specified (run with --help to see a list of commands)")]
    NoCommand,

    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
}
