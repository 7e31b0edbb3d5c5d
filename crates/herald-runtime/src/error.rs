//! Runtime error types.

use thiserror::Error;

use crate::config::ConfigError;
use herald_core::RegistryError;

/// Errors that can occur while bringing the runtime up or down.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Configuration loading or validation failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Registry construction failed; the process must not start serving.
    #[error("registry build failed: {0}")]
    Registry(#[from] RegistryError),

    /// Waiting for the shutdown signal failed.
    #[error("failed to listen for shutdown signal: {0}")]
    Signal(#[from] std::io::Error),
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
