//! Message context types passed into command handlers.
//!
//! [`MessageContext`] wraps one inbound message together with the outbound
//! send capability; [`CommandContext`] is the full view a command handler
//! receives, adding the read-only registry and the configured prefix.

use std::sync::Arc;

use crate::client::ChatClient;
use crate::error::SendResult;
use crate::registry::Registry;

/// Context describing one inbound chat message.
///
/// Owned by the chat-platform integration, passed by reference into the
/// dispatcher and handlers, and never mutated by the framework.
///
/// # Thread Safety
///
/// All fields are read-only after construction; the context can be cloned
/// cheaply and moved across tasks.
#[derive(Clone)]
pub struct MessageContext {
    /// Stable identifier of the message author.
    author_id: String,
    /// Display mention for addressing the author in replies.
    author_mention: String,
    /// Identifier of the channel the message arrived on.
    channel_id: String,
    /// Outbound send capability.
    client: Arc<dyn ChatClient>,
}

impl MessageContext {
    /// Creates a context for one inbound message.
    pub fn new(
        author_id: impl Into<String>,
        author_mention: impl Into<String>,
        channel_id: impl Into<String>,
        client: Arc<dyn ChatClient>,
    ) -> Self {
        Self {
            author_id: author_id.into(),
            author_mention: author_mention.into(),
            channel_id: channel_id.into(),
            client,
        }
    }

    /// Returns the author's stable identifier.
    pub fn author_id(&self) -> &str {
        &self.author_id
    }

    /// Returns the mention string for addressing the author.
    pub fn author_mention(&self) -> &str {
        &self.author_mention
    }

    /// Returns the source channel identifier.
    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// Returns a reference to the chat client.
    pub fn client(&self) -> &dyn ChatClient {
        self.client.as_ref()
    }

    /// Returns a clone of the chat client `Arc`.
    pub fn client_arc(&self) -> Arc<dyn ChatClient> {
        Arc::clone(&self.client)
    }

    /// Sends `text` back to the channel this message arrived on.
    pub async fn reply(&self, text: &str) -> SendResult<()> {
        self.client.send_text(&self.channel_id, text).await
    }
}

impl std::fmt::Debug for MessageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageContext")
            .field("author_id", &self.author_id)
            .field("channel_id", &self.channel_id)
            .finish()
    }
}

/// Everything a command handler gets to see during one invocation.
///
/// The registry reference gives introspective commands (such as the built-in
/// help listing) a read-only view of every registered command without any
/// ambient global state.
pub struct CommandContext<'a> {
    /// The inbound message being handled.
    pub message: &'a MessageContext,
    /// The immutable command/event registry built at startup.
    pub registry: &'a Registry,
    /// The configured command prefix.
    pub prefix: &'a str,
}
