//! Outbound chat-client abstraction.
//!
//! The chat platform itself (connecting, receiving raw messages, presence)
//! lives outside Herald. The framework consumes exactly one capability from
//! it: sending a piece of text to a channel. [`ChatClient`] is that seam.

use async_trait::async_trait;

use crate::error::SendResult;

/// The outbound capability provided by the chat-platform integration.
///
/// Implementations are shared behind an `Arc` across the dispatcher, the
/// scheduler, and every handler invocation, so they must be safe to call
/// concurrently.
///
/// # Example
///
/// ```rust,ignore
/// use herald_core::{ChatClient, SendResult};
///
/// struct ConsoleClient;
///
/// #[async_trait::async_trait]
/// impl ChatClient for ConsoleClient {
///     async fn send_text(&self, channel_id: &str, text: &str) -> SendResult<()> {
///         println!("[{channel_id}] {text}");
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends `text` to the channel identified by `channel_id`.
    ///
    /// Failures are reported to the caller; Herald does not retry. Retry
    /// policy belongs to the platform integration.
    async fn send_text(&self, channel_id: &str, text: &str) -> SendResult<()>;
}
