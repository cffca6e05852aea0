//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use brandcheck_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Base URL used when nothing else is configured (the service's dev port)
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("base_url must be an absolute http(s) URL, got {0:?}")]
    InvalidBaseUrl(String),

    #[error("tick_rate_ms cannot be 0")]
    InvalidTickRate,
}

/// Analysis service connection from TOML (`[api]` section)
///
/// # Example
///
/// ```toml
/// [api]
/// base_url = "https://names.example.com"
/// timeout_seconds = 60
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Service root; `/analyze-name` is appended
    pub base_url: String,
    /// Per-request timeout. Unset means wait indefinitely.
    pub timeout_seconds: Option<u64>,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format for one-shot mode (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// TUI configuration from TOML (`[tui]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Redraw interval while idle, also drives the spinner
    pub tick_rate_ms: u64,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 120 }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Analysis service settings
    pub api: FileApiConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.api.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        match reqwest::Url::parse(&self.api.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
            _ => {
                return Err(ConfigValidationError::InvalidBaseUrl(
                    self.api.base_url.clone(),
                ));
            }
        }

        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigValidationError::InvalidTickRate);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[api]
base_url = "https://names.example.com/v1"
timeout_seconds = 30

[output]
format = "json"
color = false

[tui]
tick_rate_ms = 200
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "https://names.example.com/v1");
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(config.tui.tick_rate_ms, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[api]
timeout_seconds = 5
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_seconds, Some(5));
        // Defaults should apply
        assert!(config.output.color);
        assert_eq!(config.tui.tick_rate_ms, 120);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert!(config.api.timeout().is_none());
        assert!(config.output.format.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let toml_str = r#"
[api]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        for bad in ["", "localhost:5000", "ftp://example.com", "not a url"] {
            let mut config = FileConfig::default();
            config.api.base_url = bad.to_string();
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigValidationError::InvalidBaseUrl(_))
                ),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_validate_zero_tick_rate() {
        let mut config = FileConfig::default();
        config.tui.tick_rate_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTickRate)
        ));
    }
}
