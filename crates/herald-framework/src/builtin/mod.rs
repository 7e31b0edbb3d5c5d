//! Built-in commands shipped with the framework.
//!
//! Enabled by the `builtin-commands` feature (on by default). Each built-in
//! registers itself through the same [`register_command!`] mechanism user
//! commands use.
//!
//! [`register_command!`]: herald_core::register_command

mod commands;

pub use commands::Commands;
