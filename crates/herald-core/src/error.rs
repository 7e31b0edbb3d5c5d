//! Unified error types for the Herald core framework.
//!
//! Runtime-level errors (configuration, logging) are defined in
//! `herald-runtime`.

use thiserror::Error;

// =============================================================================
// Send Errors
// =============================================================================

/// Errors that can occur when sending an outbound message.
///
/// These originate in the chat-client integration and are propagated
/// unchanged; Herald never retries a failed send.
#[derive(Debug, Clone, Error)]
pub enum SendError {
    /// The platform rejected or dropped the message.
    #[error("failed to send message to channel '{channel}': {reason}")]
    Failed {
        /// The channel the message was addressed to.
        channel: String,
        /// Reason for failure.
        reason: String,
    },

    /// The chat client is not connected.
    #[error("chat client is not connected")]
    NotConnected,
}

impl SendError {
    /// Creates a send failure for the given channel.
    pub fn failed(channel: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Failed {
            channel: channel.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Registry Errors
// =============================================================================

/// Errors detected while building the [`Registry`](crate::registry::Registry).
///
/// All of these are programming errors in the set of registered handlers,
/// and every one of them is fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two commands registered under the same lowercase name.
    #[error("duplicate command name '{name}'")]
    DuplicateCommand {
        /// The colliding command name.
        name: String,
    },

    /// A command name that is empty or contains whitespace.
    #[error("invalid command name '{name}': must be non-empty and free of whitespace")]
    InvalidName {
        /// The offending command name.
        name: String,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for outbound send operations.
pub type SendResult<T> = Result<T, SendError>;

/// Result type for registry construction.
pub type RegistryResult<T> = Result<T, RegistryError>;
