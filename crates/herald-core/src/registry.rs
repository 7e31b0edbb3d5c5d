//! Closed-world handler registry.
//!
//! Commands and events announce themselves at link time through `linkme`
//! distributed slices: each concrete type contributes one constructor entry
//! via [`register_command!`](crate::register_command) or
//! [`register_event!`](crate::register_event). [`Registry::build`] collects
//! every entry, instantiates each type exactly once, and indexes commands by
//! their lowercase name.
//!
//! Adding a handler never touches dispatch logic — implement the trait,
//! derive or write `Default`, and add one registration line. There is no
//! runtime scanning: the set of handlers is fixed when the binary is linked.
//!
//! # Duplicate names
//!
//! Two command types mapping to the same lowercase name would make dispatch
//! ambiguous, so [`Registry::build`] refuses to construct and the process
//! must not start.

use std::collections::HashMap;
use std::sync::Arc;

use linkme::distributed_slice;
use tracing::debug;

use crate::command::Command;
use crate::error::{RegistryError, RegistryResult};
use crate::event::Event;

/// Constructor entry for one concrete command type.
pub type CommandCtor = fn() -> Arc<dyn Command>;

/// Constructor entry for one concrete event type.
pub type EventCtor = fn() -> Arc<dyn Event>;

/// Registry of command constructors. Each crate that defines a command
/// contributes one entry via [`register_command!`](crate::register_command).
#[distributed_slice]
pub static COMMANDS: [CommandCtor];

/// Registry of event constructors.
#[distributed_slice]
pub static EVENTS: [EventCtor];

/// Registers a [`Command`](crate::Command) implementation.
///
/// The type must implement `Default`; one instance is constructed at
/// [`Registry::build`] time and lives for the rest of the process.
///
/// ```rust,ignore
/// herald_core::register_command!(Random);
/// ```
#[macro_export]
macro_rules! register_command {
    ($ty:ty) => {
        const _: () = {
            fn construct() -> ::std::sync::Arc<dyn $crate::Command> {
                ::std::sync::Arc::new(<$ty as ::core::default::Default>::default())
            }

            #[$crate::linkme::distributed_slice($crate::registry::COMMANDS)]
            #[linkme(crate = $crate::linkme)]
            static REGISTER: $crate::registry::CommandCtor = construct;
        };
    };
}

/// Registers an [`Event`](crate::Event) implementation.
///
/// ```rust,ignore
/// herald_core::register_event!(Clock);
/// ```
#[macro_export]
macro_rules! register_event {
    ($ty:ty) => {
        const _: () = {
            fn construct() -> ::std::sync::Arc<dyn $crate::Event> {
                ::std::sync::Arc::new(<$ty as ::core::default::Default>::default())
            }

            #[$crate::linkme::distributed_slice($crate::registry::EVENTS)]
            #[linkme(crate = $crate::linkme)]
            static REGISTER: $crate::registry::EventCtor = construct;
        };
    };
}

/// The immutable name→command index plus the set of events.
///
/// Built exactly once at process start and read-only afterwards: no entry is
/// ever added or removed, so lookups need no locking.
pub struct Registry {
    commands: HashMap<String, Arc<dyn Command>>,
    events: Vec<Arc<dyn Event>>,
}

impl Registry {
    /// Builds the registry from every statically registered command and
    /// event.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] on a duplicate or malformed command name.
    /// Both are programming errors; callers should treat them as fatal.
    pub fn build() -> RegistryResult<Self> {
        Self::from_parts(
            COMMANDS.iter().map(|ctor| ctor()),
            EVENTS.iter().map(|ctor| ctor()),
        )
    }

    /// Builds a registry from explicit instances.
    ///
    /// This is the validation path [`build`](Self::build) goes through; it
    /// exists separately so tests and embedders can assemble registries
    /// without touching the link-time slices.
    pub fn from_parts(
        commands: impl IntoIterator<Item = Arc<dyn Command>>,
        events: impl IntoIterator<Item = Arc<dyn Event>>,
    ) -> RegistryResult<Self> {
        let mut index: HashMap<String, Arc<dyn Command>> = HashMap::new();

        for command in commands {
            let name = command.spec().name().to_string();
            if name.is_empty() || name.contains(char::is_whitespace) {
                return Err(RegistryError::InvalidName { name });
            }
            if index.insert(name.clone(), command).is_some() {
                return Err(RegistryError::DuplicateCommand { name });
            }
            debug!(command = %name, "registered command");
        }

        let events: Vec<Arc<dyn Event>> = events.into_iter().collect();
        for event in &events {
            debug!(
                event = event.name(),
                interval_minutes = event.spec().interval_minutes().get(),
                "registered event"
            );
        }

        Ok(Self {
            commands: index,
            events,
        })
    }

    /// Looks up a command by its lowercase name.
    pub fn command(&self, name: &str) -> Option<&Arc<dyn Command>> {
        self.commands.get(name)
    }

    /// Iterates over every registered command, in no particular order.
    pub fn commands(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.commands.values()
    }

    /// Returns every registered event.
    pub fn events(&self) -> &[Arc<dyn Event>] {
        &self.events
    }

    /// Returns the number of registered commands.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Returns the number of registered events.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("commands", &self.commands.keys().collect::<Vec<_>>())
            .field("events", &self.events.len())
            .finish()
    }
}
