//! Configuration file loading for brandcheck
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Command-line overrides (`--api-url`, `--timeout`)
//! 2. Environment: `BRANDCHECK_API_URL`, `BRANDCHECK_TIMEOUT_SECONDS`
//! 3. `--config <path>` specified file
//! 4. Project root: `./brandcheck.toml` or `./.brandcheck.toml`
//! 5. XDG config: `$XDG_CONFIG_HOME/brandcheck/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BASE_URL, FileApiConfig, FileConfig, FileOutputConfig,
    FileTuiConfig,
};
pub use loader::{ConfigLoader, ConfigOverrides, ENV_API_URL, ENV_TIMEOUT_SECONDS};
