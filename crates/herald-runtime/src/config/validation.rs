//! Configuration validation.

use super::error::{ConfigError, ConfigResult};
use super::schema::HeraldConfig;

/// Validates a loaded configuration.
///
/// Runs after every successful extract; a config that fails here must not
/// be handed to the runtime.
pub fn validate(config: &HeraldConfig) -> ConfigResult<()> {
    if config.bot.command_prefix.is_empty() {
        return Err(ConfigError::validation("bot.command_prefix must not be empty"));
    }
    if config.bot.command_prefix.contains(char::is_whitespace) {
        return Err(ConfigError::validation(
            "bot.command_prefix must not contain whitespace",
        ));
    }
    Ok(())
}
