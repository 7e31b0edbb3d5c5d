//! # Herald Core
//!
//! Core contracts of the Herald chat-bot framework.
//!
//! This crate defines the pieces everything else agrees on:
//!
//! - **Handler contracts**: [`Command`] and [`Event`] traits with their
//!   immutable descriptors ([`CommandSpec`], [`EventSpec`])
//! - **Registry**: link-time handler discovery and the once-built,
//!   read-only [`Registry`]
//! - **Message types**: [`MessageContext`] and [`CommandContext`]
//! - **Chat-client seam**: the [`ChatClient`] outbound capability
//!
//! ## Data Flow
//!
//! ```text
//! ┌──────────────┐     ┌────────────┐     ┌───────────────┐
//! │ Chat client  │────▶│ Dispatcher │────▶│ Command.handle│──▶ send_text
//! │ (integration)│     │ (framework)│     └───────────────┘
//! └──────────────┘     └────────────┘
//!        ▲             ┌────────────┐     ┌───────────────┐
//!        └─────────────│ Scheduler  │────▶│   Event.run   │──▶ send_text
//!                      │ (framework)│     └───────────────┘
//!                      └────────────┘
//! ```
//!
//! The two flows share nothing mutable: the [`Registry`] is built once at
//! startup and only ever read afterwards.
//!
//! ## Example
//!
//! ```rust,ignore
//! use herald_core::{register_command, Command, CommandContext, CommandSpec, SendResult};
//!
//! struct Ping {
//!     spec: CommandSpec,
//! }
//!
//! impl Default for Ping {
//!     fn default() -> Self {
//!         Self {
//!             spec: CommandSpec::new("ping", "Replies with pong", &[]),
//!         }
//!     }
//! }
//!
//! #[async_trait::async_trait]
//! impl Command for Ping {
//!     fn spec(&self) -> &CommandSpec {
//!         &self.spec
//!     }
//!
//!     async fn handle(&self, _args: &[String], ctx: &CommandContext<'_>) -> SendResult<()> {
//!         ctx.message.reply("pong").await
//!     }
//! }
//!
//! register_command!(Ping);
//! ```

pub mod client;
pub mod command;
pub mod error;
pub mod event;
pub mod message;
pub mod registry;

// Re-exported for the registration macros.
pub use linkme;

pub use client::ChatClient;
pub use command::{Command, CommandSpec};
pub use error::{RegistryError, RegistryResult, SendError, SendResult};
pub use event::{Event, EventSpec};
pub use message::{CommandContext, MessageContext};
pub use registry::{CommandCtor, EventCtor, Registry};

/// Prelude for common imports.
pub mod prelude {
    pub use super::{
        ChatClient, Command, CommandContext, CommandSpec, Event, EventSpec, MessageContext,
        Registry, SendError, SendResult,
    };
}
