//! # Herald Runtime
//!
//! Orchestration layer for the Herald chat-bot framework: configuration
//! loading (figment), logging setup (tracing-subscriber), and the
//! [`HeraldRuntime`] that assembles registry, dispatcher, and scheduler.
//!
//! ## Features
//!
//! - `toml-config` *(default)*: TOML configuration files
//! - `yaml-config`: YAML configuration files
//! - `json-log`: JSON log output format

pub mod config;
pub mod error;
pub mod logging;
pub mod runtime;

pub use error::{RuntimeError, RuntimeResult};
pub use runtime::HeraldRuntime;
