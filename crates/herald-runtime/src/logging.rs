//! Logging setup for the Herald runtime.
//!
//! A thin builder over `tracing-subscriber`, driven by
//! [`LoggingConfig`](crate::config::LoggingConfig).
//!
//! # Configuration-Based Initialization
//!
//! ```rust,ignore
//! use herald_runtime::{config::HeraldConfig, logging};
//!
//! let config = HeraldConfig::load()?;
//! logging::init_from_config(&config.logging);
//! ```
//!
//! # Manual Initialization
//!
//! ```rust,ignore
//! use herald_runtime::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .level("debug")
//!     .directive("herald_framework=trace")
//!     .init();
//! ```

use std::io;
use std::path::PathBuf;

use tracing::warn;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LogFormat, LogOutput, LoggingConfig};

/// Initialize logging from a [`LoggingConfig`].
///
/// Uses `try_init` under the hood, so calling it twice (common in tests)
/// is harmless.
pub fn init_from_config(config: &LoggingConfig) {
    let _ = LoggingBuilder::from_config(config).try_init();
}

/// A builder for configuring the global tracing subscriber.
pub struct LoggingBuilder {
    level: String,
    directives: Vec<String>,
    format: LogFormat,
    output: LogOutput,
    file_directory: PathBuf,
    file_prefix: String,
    with_target: bool,
    with_thread_ids: bool,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    /// Creates a builder with compact stdout output at info level.
    pub fn new() -> Self {
        Self {
            level: "info".to_string(),
            directives: Vec::new(),
            format: LogFormat::Compact,
            output: LogOutput::Stdout,
            file_directory: PathBuf::from("logs"),
            file_prefix: "herald".to_string(),
            with_target: true,
            with_thread_ids: false,
        }
    }

    /// Creates a builder from a [`LoggingConfig`].
    pub fn from_config(config: &LoggingConfig) -> Self {
        let mut builder = Self::new();
        builder.level.clone_from(&config.level);
        builder.format = config.format;
        builder.output = config.output;
        builder.file_directory = PathBuf::from(&config.file_directory);
        builder.file_prefix.clone_from(&config.file_prefix);
        builder
    }

    /// Sets the base log level.
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Adds a filter directive, e.g. `"herald_framework=debug"`.
    pub fn directive(mut self, directive: impl Into<String>) -> Self {
        self.directives.push(directive.into());
        self
    }

    /// Sets the output format.
    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the output destination.
    pub fn output(mut self, output: LogOutput) -> Self {
        self.output = output;
        self
    }

    /// Include the target (module path) in log output.
    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }

    /// Include thread IDs in log output.
    pub fn with_thread_ids(mut self, enabled: bool) -> Self {
        self.with_thread_ids = enabled;
        self
    }

    /// Installs the subscriber, panicking if one is already set.
    pub fn init(self) {
        self.try_init().expect("logging already initialized");
    }

    /// Installs the subscriber, returning an error if one is already set.
    pub fn try_init(self) -> Result<(), TryInitError> {
        match self.output {
            LogOutput::Stdout => self.init_with_writer(io::stdout),
            LogOutput::Stderr => self.init_with_writer(io::stderr),
            LogOutput::File => {
                let appender =
                    tracing_appender::rolling::daily(&self.file_directory, &self.file_prefix);
                self.init_with_writer(appender)
            }
        }
    }

    fn init_with_writer<W>(self, writer: W) -> Result<(), TryInitError>
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let filter = self.build_filter();
        let registry = tracing_subscriber::registry().with(filter);
        let layer = fmt::layer()
            .with_writer(writer)
            .with_target(self.with_target)
            .with_thread_ids(self.with_thread_ids);

        match self.format {
            LogFormat::Full => registry.with(layer).try_init(),
            LogFormat::Compact => registry.with(layer.compact()).try_init(),
            LogFormat::Pretty => registry.with(layer.pretty()).try_init(),
            #[cfg(feature = "json-log")]
            LogFormat::Json => registry.with(layer.json()).try_init(),
        }
    }

    fn build_filter(&self) -> EnvFilter {
        let mut filter = EnvFilter::new(&self.level);
        for directive in &self.directives {
            match directive.parse() {
                Ok(parsed) => filter = filter.add_directive(parsed),
                Err(err) => warn!(directive = %directive, error = %err, "ignoring bad directive"),
            }
        }
        filter
    }
}
