//! Configuration loading and validation.

mod error;
mod loader;
mod schema;
mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use schema::{BotSettings, HeraldConfig, LogFormat, LogOutput, LoggingConfig};
pub use validation::validate;

impl HeraldConfig {
    /// Loads configuration from the current directory, the user config
    /// directory, and `HERALD_*` environment variables.
    pub fn load() -> ConfigResult<Self> {
        ConfigLoader::new()
            .with_current_dir()
            .with_config_dir()
            .load()
    }
}
