//! Load — config loading from file and environment variables.

use std::path::Path;
use std::fs;

use super::model::{AnalyzerConfig, ConfigError, DEFAULT_CONFIG_PATH};

impl AnalyzerConfig {
    /// Load configuration from file or defaults, then apply environment overrides
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = std::env::var("GCLOG_CONFIG_FILE")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::debug!("Config file not found at {}, using defaults", config_path);
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_string(), e))?;
        Self::from_toml(path, &contents)
    }

    pub fn from_toml(origin: &str, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Toml(origin.to_string(), e))
    }

    /// Apply `GCLOG_*` overrides; unparseable values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filter) = lookup("GCLOG_LOG_FILTER") {
            self.log_filter = filter;
        }
        if let Some(pretty) = lookup("GCLOG_PRETTY").and_then(|s| s.parse().ok()) {
            self.pretty = pretty;
        }
        if let Some(stats) = lookup("GCLOG_INCLUDE_STATS").and_then(|s| s.parse().ok()) {
            self.include_stats = stats;
        }
        if let Some(max) = lookup("GCLOG_MAX_INPUT_BYTES").and_then(|s| s.parse().ok()) {
            self.max_input_bytes = max;
        }
    }
}
