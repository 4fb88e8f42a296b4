//! Model — configuration structs, defaults and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_LOG_FILTER: &str = "gclog=info";
pub const DEFAULT_CONFIG_PATH: &str = "gclog.toml";
/// Default ceiling on the size of a log we are willing to read (256 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 256 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// tracing filter used when RUST_LOG is unset
    pub log_filter: String,
    /// Pretty-print the JSON written to stdout
    pub pretty: bool,
    /// Emit `{ result, stats }` instead of the bare result
    pub include_stats: bool,
    pub max_input_bytes: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Io(String, #[source] std::io::Error),

    #[error("Invalid config file {0}: {1}")]
    Toml(String, #[source] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl AnalyzerConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log_filter must not be empty".to_string()));
        }
        if self.max_input_bytes == 0 {
            return Err(ConfigError::Invalid("max_input_bytes must be > 0".to_string()));
        }
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            pretty: false,
            include_stats: false,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(AnalyzerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_log_filter() {
        let config = AnalyzerConfig {
            log_filter: "  ".to_string(),
            ..AnalyzerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("log_filter"));
    }

    #[test]
    fn test_validate_zero_input_limit() {
        let config = AnalyzerConfig {
            max_input_bytes: 0,
            ..AnalyzerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_input_bytes"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AnalyzerConfig = toml::from_str("pretty = true").unwrap();
        assert!(config.pretty);
        assert!(!config.include_stats);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
    }
}
