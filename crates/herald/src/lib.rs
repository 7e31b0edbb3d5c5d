//! # Herald
//!
//! A plugin-style command/event framework for chat bots.
//!
//! Text messages prefixed with a configurable token become named commands
//! with positional parameters, routed to handler objects; periodic event
//! handlers run autonomously, each on its own independent timer.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌────────────┐     ┌─────────────────────────┐
//! │ Chat client  │────▶│ Dispatcher │────▶│ Command.handle (task)   │
//! │ (yours)      │     └────────────┘     └─────────────────────────┘
//! └──────▲───────┘     ┌────────────┐     ┌─────────────────────────┐
//!        └─────────────│ Scheduler  │────▶│ Event.run (timer loops) │
//!      send_text       └────────────┘     └─────────────────────────┘
//! ```
//!
//! - **herald-core**: handler contracts, descriptors, the once-built
//!   registry, and the `ChatClient` seam
//! - **herald-framework**: dispatch and scheduling, plus the built-in
//!   `commands` help listing
//! - **herald-runtime**: configuration, logging, and orchestration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use herald::prelude::*;
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
//! herald::register_command!(Ping);
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let runtime = HeraldRuntime::new()?;
//!     let scheduler = runtime.start_scheduler(my_client.clone());
//!     // feed inbound messages via runtime.spawn_dispatch(...)
//!     runtime.run_until_shutdown(scheduler).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `toml-config` *(default)*, `yaml-config`: config file formats
//! - `json-log`: JSON log output

pub use herald_core;
pub use herald_framework;
pub use herald_runtime;

pub use herald_core::{
    ChatClient, Command, CommandContext, CommandSpec, Event, EventSpec, MessageContext, Registry,
    RegistryError, SendError, SendResult, register_command, register_event,
};
pub use herald_framework::{Dispatcher, Scheduler, SchedulerHandle};
pub use herald_runtime::{HeraldRuntime, RuntimeError, RuntimeResult, config, logging};

/// Prelude for common imports.
pub mod prelude {
    pub use herald_core::prelude::*;
    pub use herald_framework::{Dispatcher, Scheduler, SchedulerHandle};
    pub use herald_runtime::config::{ConfigLoader, HeraldConfig};
    pub use herald_runtime::{HeraldRuntime, RuntimeError, RuntimeResult};
}
