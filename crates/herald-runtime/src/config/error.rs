//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested file does not exist.
    #[error("configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Figment failed to merge or deserialize the configuration.
    #[error("failed to load configuration: {0}")]
    Extract(#[from] figment::Error),

    /// A loaded value failed validation.
    #[error("invalid configuration: {message}")]
    Validation {
        /// What was wrong.
        message: String,
    },
}

impl ConfigError {
    /// Creates a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
