//! # Herald Framework
//!
//! The dispatch and scheduling layer of the Herald chat-bot framework.
//!
//! - [`Dispatcher`]: parses inbound messages and routes them to registered
//!   commands
//! - [`Scheduler`]: runs every registered event on its own independent
//!   repeating timer
//! - [`builtin`]: built-in commands (the `commands` help listing), behind
//!   the `builtin-commands` feature
//!
//! Both components only read the [`Registry`](herald_core::Registry) built
//! once at startup; neither holds mutable shared state.

pub mod dispatcher;
pub mod scheduler;

#[cfg(feature = "builtin-commands")]
pub mod builtin;

pub use dispatcher::Dispatcher;
pub use scheduler::{Scheduler, SchedulerHandle};
