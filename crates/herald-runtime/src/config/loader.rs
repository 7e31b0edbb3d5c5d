//! Configuration loader using figment.
//!
//! Supports layered configuration from multiple sources; later sources
//! override earlier ones.
//!
//! # Feature Flags
//!
//! - `toml-config` *(default)*: enables TOML configuration files
//! - `yaml-config`: enables YAML configuration files
//!
//! Both can be enabled simultaneously; both file formats are then searched.
//!
//! # Configuration Priority (lowest to highest)
//!
//! 1. Built-in defaults
//! 2. Main config file (`herald.toml` / `herald.yaml`)
//! 3. Profile config file (`herald.{profile}.toml` / `.yaml`)
//! 4. Environment variables (`HERALD_*`)
//!
//! # Environment Variable Mapping
//!
//! Variables use the `HERALD_` prefix with `__` as the nesting separator:
//!
//! - `HERALD_BOT__COMMAND_PREFIX=?` → `bot.command_prefix = "?"`
//! - `HERALD_BOT__TOKEN=xxx` → `bot.token = "xxx"`
//! - `HERALD_LOGGING__LEVEL=debug` → `logging.level = "debug"`
//!
//! # Example
//!
//! ```rust,ignore
//! use herald_runtime::config::ConfigLoader;
//!
//! // Search the current directory and the user config dir
//! let config = ConfigLoader::new().with_current_dir().load()?;
//!
//! // Load a specific file with a profile
//! let config = ConfigLoader::new()
//!     .file("config/herald.toml")
//!     .profile("production")
//!     .load()?;
//! ```

use std::path::{Path, PathBuf};

use figment::Figment;
#[cfg(any(feature = "toml-config", feature = "yaml-config"))]
use figment::providers::Format;
#[cfg(feature = "toml-config")]
use figment::providers::Toml;
#[cfg(feature = "yaml-config")]
use figment::providers::Yaml;
use figment::providers::{Env, Serialized};
use tracing::debug;

use super::error::{ConfigError, ConfigResult};
use super::schema::HeraldConfig;
use super::validation;

/// Base name of the configuration files searched in directories.
const CONFIG_STEM: &str = "herald";

/// Layered configuration loader.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    files: Vec<PathBuf>,
    profile: Option<String>,
    search_dirs: Vec<PathBuf>,
    skip_env: bool,
}

impl ConfigLoader {
    /// Creates a loader with defaults and environment variables enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an explicit configuration file. Missing explicit files are an
    /// error, unlike searched directories.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Selects a profile; `herald.{profile}.toml` overrides the main file.
    pub fn profile(mut self, name: impl Into<String>) -> Self {
        self.profile = Some(name.into());
        self
    }

    /// Searches the current working directory for config files.
    pub fn with_current_dir(mut self) -> Self {
        self.search_dirs.push(PathBuf::from("."));
        self
    }

    /// Searches the user configuration directory (`~/.config/herald` on
    /// Linux) for config files.
    pub fn with_config_dir(mut self) -> Self {
        if let Some(dir) = dirs::config_dir() {
            self.search_dirs.push(dir.join(CONFIG_STEM));
        }
        self
    }

    /// Disables the `HERALD_*` environment variable layer.
    pub fn without_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Loads, merges, extracts, and validates the configuration.
    pub fn load(self) -> ConfigResult<HeraldConfig> {
        let mut figment = Figment::from(Serialized::defaults(HeraldConfig::default()));

        for file in &self.files {
            if !file.exists() {
                return Err(ConfigError::FileNotFound(file.clone()));
            }
            figment = merge_file(figment, file);
        }

        for dir in &self.search_dirs {
            figment = self.merge_dir(figment, dir);
        }

        if !self.skip_env {
            figment = figment.merge(Env::prefixed("HERALD_").split("__"));
        }

        let config: HeraldConfig = figment.extract()?;
        validation::validate(&config)?;

        debug!(
            prefix = %config.bot.command_prefix,
            log_level = %config.logging.level,
            "configuration loaded"
        );
        Ok(config)
    }

    fn merge_dir(&self, mut figment: Figment, dir: &Path) -> Figment {
        for name in self.candidate_names() {
            let path = dir.join(name);
            if path.exists() {
                figment = merge_file(figment, &path);
            }
        }
        figment
    }

    /// Main file first, profile file second, so the profile wins.
    fn candidate_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for ext in enabled_extensions() {
            names.push(format!("{CONFIG_STEM}.{ext}"));
        }
        if let Some(profile) = &self.profile {
            for ext in enabled_extensions() {
                names.push(format!("{CONFIG_STEM}.{profile}.{ext}"));
            }
        }
        names
    }
}

fn enabled_extensions() -> &'static [&'static str] {
    &[
        #[cfg(feature = "toml-config")]
        "toml",
        #[cfg(feature = "yaml-config")]
        "yaml",
        #[cfg(feature = "yaml-config")]
        "yml",
    ]
}

fn merge_file(figment: Figment, path: &Path) -> Figment {
    debug!(path = %path.display(), "merging configuration file");
    match path.extension().and_then(|e| e.to_str()) {
        #[cfg(feature = "toml-config")]
        Some("toml") => figment.merge(Toml::file(path)),
        #[cfg(feature = "yaml-config")]
        Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
        _ => figment,
    }
}
