use crate::config::AppConfig;

/// Execution context handed to every command handler. Handlers treat it as
/// opaque; today it only carries the loaded configuration.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: AppConfig,
}

impl Context {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}
