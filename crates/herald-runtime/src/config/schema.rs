//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HeraldConfig {
    /// Bot-facing settings (prefix, credential, presence).
    #[serde(default)]
    pub bot: BotSettings,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Bot-facing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotSettings {
    /// The prefix that marks a message as a command invocation.
    /// It does not have to be a single character.
    #[serde(default = "default_prefix")]
    pub command_prefix: String,

    /// The chat-platform credential. Keep this secret; prefer the
    /// `HERALD_BOT__TOKEN` environment variable over the config file.
    #[serde(default)]
    pub token: String,

    /// Optional "now playing" status string. Leave unset to disable it.
    #[serde(default)]
    pub now_playing: Option<String>,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            command_prefix: default_prefix(),
            token: String::new(),
            now_playing: None,
        }
    }
}

fn default_prefix() -> String {
    "!".to_string()
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Base log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Output destination.
    #[serde(default)]
    pub output: LogOutput,

    /// Directory for rolling log files (used when `output = "file"`).
    #[serde(default = "default_log_directory")]
    pub file_directory: String,

    /// File name prefix for rolling log files.
    #[serde(default = "default_log_prefix")]
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            output: LogOutput::default(),
            file_directory: default_log_directory(),
            file_prefix: default_log_prefix(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> String {
    "logs".to_string()
}

fn default_log_prefix() -> String {
    "herald".to_string()
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default single-line format.
    Full,
    /// Abbreviated single-line format.
    #[default]
    Compact,
    /// Multi-line human-oriented format.
    Pretty,
    /// Newline-delimited JSON (requires the `json-log` feature).
    #[cfg(feature = "json-log")]
    Json,
}

/// Log output destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// Standard output.
    #[default]
    Stdout,
    /// Standard error.
    Stderr,
    /// Daily-rolling file under `file_directory`.
    File,
}
