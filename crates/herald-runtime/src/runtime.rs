//! Runtime orchestration.
//!
//! [`HeraldRuntime`] wires the pieces together at process start: initialize
//! logging, build the registry (fatal on a duplicate command name), hand
//! out the dispatcher, and start the event scheduler. The chat-platform
//! integration stays outside: it feeds inbound messages in through
//! [`HeraldRuntime::spawn_dispatch`] and provides the
//! [`ChatClient`] the scheduler and handlers send through.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use herald_runtime::HeraldRuntime;
//!
//! let runtime = HeraldRuntime::new()?;
//! let scheduler = runtime.start_scheduler(client.clone());
//!
//! // Feed inbound messages:
//! runtime.spawn_dispatch(raw_text, ctx);
//!
//! // Block until ctrl-c, then stop the event loops:
//! runtime.run_until_shutdown(scheduler).await?;
//! ```

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::info;

use crate::config::HeraldConfig;
use crate::error::RuntimeResult;
use crate::logging;
use herald_core::{ChatClient, MessageContext, Registry};
use herald_framework::{Dispatcher, Scheduler, SchedulerHandle};

/// The assembled Herald runtime: configuration, registry, and dispatcher.
pub struct HeraldRuntime {
    config: HeraldConfig,
    registry: Arc<Registry>,
    dispatcher: Dispatcher,
}

impl HeraldRuntime {
    /// Creates a runtime with automatic configuration loading.
    ///
    /// Searches the current directory, the user config directory, and the
    /// `HERALD_*` environment.
    pub fn new() -> RuntimeResult<Self> {
        let config = HeraldConfig::load()?;
        Self::from_config(&config)
    }

    /// Creates a runtime from a pre-loaded configuration.
    ///
    /// Initializes logging first, then builds the registry. A
    /// [`RegistryError`](herald_core::RegistryError) here means the set of
    /// compiled-in handlers is broken; do not start serving.
    pub fn from_config(config: &HeraldConfig) -> RuntimeResult<Self> {
        logging::init_from_config(&config.logging);

        let registry = Arc::new(Registry::build()?);
        info!(
            commands = registry.command_count(),
            events = registry.event_count(),
            prefix = %config.bot.command_prefix,
            "runtime initialized"
        );

        let dispatcher = Dispatcher::new(Arc::clone(&registry), config.bot.command_prefix.clone());

        Ok(Self {
            config: config.clone(),
            registry,
            dispatcher,
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &HeraldConfig {
        &self.config
    }

    /// Returns the registry built at startup.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Returns the command dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Returns the configured "now playing" status, if any.
    pub fn now_playing(&self) -> Option<&str> {
        self.config.bot.now_playing.as_deref()
    }

    /// Dispatches one inbound message on its own task.
    ///
    /// One task per message keeps a slow handler from blocking the inbound
    /// receive loop.
    pub fn spawn_dispatch(&self, raw_text: String, ctx: MessageContext) -> JoinHandle<()> {
        let dispatcher = self.dispatcher.clone();
        tokio::spawn(async move {
            dispatcher.dispatch(&raw_text, &ctx).await;
        })
    }

    /// Starts the event scheduler over every registered event.
    pub fn start_scheduler(&self, client: Arc<dyn ChatClient>) -> SchedulerHandle {
        Scheduler::start(self.registry.events().to_vec(), client)
    }

    /// Waits for ctrl-c, then stops the event loops.
    pub async fn run_until_shutdown(&self, scheduler: SchedulerHandle) -> RuntimeResult<()> {
        tokio::signal::ctrl_c().await?;
        info!("shutdown signal received, stopping event loops");
        scheduler.shutdown().await;
        Ok(())
    }
}

impl std::fmt::Debug for HeraldRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeraldRuntime")
            .field("prefix", &self.config.bot.command_prefix)
            .field("commands", &self.registry.command_count())
            .field("events", &self.registry.event_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_wires_the_dispatcher_prefix() {
        let mut config = HeraldConfig::default();
        config.bot.command_prefix = "?".to_string();
        let runtime = HeraldRuntime::from_config(&config).unwrap();
        assert_eq!(runtime.dispatcher().prefix(), "?");
    }

    #[test]
    fn registry_includes_builtin_commands() {
        // herald-framework ships the `commands` help listing by default.
        let runtime = HeraldRuntime::from_config(&HeraldConfig::default()).unwrap();
        assert!(runtime.registry().command("commands").is_some());
    }

    #[test]
    fn now_playing_passes_through() {
        let mut config = HeraldConfig::default();
        config.bot.now_playing = Some("!commands".to_string());
        let runtime = HeraldRuntime::from_config(&config).unwrap();
        assert_eq!(runtime.now_playing(), Some("!commands"));
    }
}
