use std::fs;
use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Tracing filter directives used when RUST_LOG is unset
    /// (e.g., "info" or "scmctl=debug").
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration. An explicit path must be readable; otherwise
    /// `scmctl.toml` in the working directory is tried, falling back to the
    /// compiled-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, crate::cli::error::ScmCtlError> {
        let raw = match path {
            Some(path) => fs::read_to_string(path).map_err(|source| {
                crate::cli::error::ScmCtlError::ConfigIo {
                    path: path.to_path_buf(),
                    source,
                }
            })?,
            None => fs::read_to_string("scmctl.toml")
                .unwrap_or_else(|_| include_str!("../default_config.toml").to_string()),
        };

        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::error::ScmCtlError;
    use std::io::Write;

    #[test]
    fn default_config_parses() {
        let config: AppConfig = toml::from_str(include_str!("../default_config.toml")).unwrap();
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn empty_file_gets_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("scmctl.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[log]\nfilter = \"debug\"").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.log.filter, "debug");
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("does_not_exist.toml");

        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ScmCtlError::ConfigIo { .. }));
    }
}
