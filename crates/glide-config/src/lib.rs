//! Glide configuration system
//!
//! This crate provides centralized configuration for the transition engine,
//! loading settings from `glide.toml` with environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure for Glide
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlideConfig {
    /// Request-level transition defaults
    pub transition: TransitionConfig,
    /// Turn queue settings
    pub scheduler: SchedulerConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Defaults applied to every request that does not override them
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Default duration as a CSS time literal (e.g. "400ms")
    pub duration: String,
    /// Default delay as a CSS time literal (e.g. "0s")
    pub delay: String,
    /// Default timing function (e.g. "ease")
    pub timing_function: String,
    /// Continue interrupted properties from their current computed value
    pub begin_from_current_value: bool,
}

/// Turn queue configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Upper bound on turns run by a single `run_until_idle` call
    pub max_turns: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// `env_logger` filter directive (e.g. "glide_engine=debug")
    pub filter: Option<String>,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: "400ms".to_string(),
            delay: "0s".to_string(),
            timing_function: "ease".to_string(),
            begin_from_current_value: true,
        }
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self { max_turns: 1000 }
    }
}

impl GlideConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default location (glide.toml in the current directory)
    /// or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("glide.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(duration) = std::env::var("GLIDE_DURATION") {
            self.transition.duration = duration;
        }
        if let Ok(delay) = std::env::var("GLIDE_DELAY") {
            self.transition.delay = delay;
        }
        if let Ok(timing) = std::env::var("GLIDE_TIMING_FUNCTION") {
            self.transition.timing_function = timing;
        }
        if let Ok(val) = std::env::var("GLIDE_BEGIN_FROM_CURRENT") {
            self.transition.begin_from_current_value =
                val == "1" || val.eq_ignore_ascii_case("true");
        }
        if let Ok(val) = std::env::var("GLIDE_MAX_TURNS") {
            if let Ok(turns) = val.parse::<usize>() {
                self.scheduler.max_turns = turns;
            }
        }
        if let Ok(filter) = std::env::var("GLIDE_LOG") {
            self.logging.filter = Some(filter);
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from glide.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
