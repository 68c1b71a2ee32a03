use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

use crate::error::Result;
use crate::models::MatchLimits;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct Settings {
    #[serde(default)]
    #[validate(nested)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MatchingSettings {
    #[serde(default = "default_top_n")]
    #[validate(range(min = 1))]
    pub top_n: usize,
    #[serde(default = "default_distribution_window")]
    #[validate(range(min = 1))]
    pub distribution_window: usize,
    #[serde(default = "default_score_denominator")]
    #[validate(range(min = 1))]
    pub score_denominator: u8,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            distribution_window: default_distribution_window(),
            score_denominator: default_score_denominator(),
        }
    }
}

fn default_top_n() -> usize { 5 }
fn default_distribution_window() -> usize { 15 }
fn default_score_denominator() -> u8 { 6 }

impl MatchingSettings {
    pub fn limits(&self) -> MatchLimits {
        MatchLimits {
            top_n: self.top_n,
            distribution_window: self.distribution_window,
            score_denominator: self.score_denominator,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

/// How the binary renders a match result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PATHMATCH)
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PATHMATCH__MATCHING__TOP_N -> matching.top_n
            .add_source(env_source())
            .build()?;

        Self::finish(config)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        Self::finish(config)
    }

    fn finish(config: Config) -> Result<Self> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("PATHMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
