//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Environment variable holding the service base URL
pub const ENV_API_URL: &str = "BRANDCHECK_API_URL";

/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT_SECONDS: &str = "BRANDCHECK_TIMEOUT_SECONDS";

const PROJECT_FILES: [&str; 2] = ["brandcheck.toml", ".brandcheck.toml"];

/// Values given on the command line; they beat every other source
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Command-line overrides
    /// 2. Environment variables
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./brandcheck.toml` or `./.brandcheck.toml`
    /// 5. XDG config: `$XDG_CONFIG_HOME/brandcheck/config.toml`
    /// 6. Default values
    pub fn load(
        config_path: Option<&PathBuf>,
        overrides: &ConfigOverrides,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        // Add project-level config file (first name found wins)
        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::finish(figment, overrides)
    }

    /// Load defaults plus environment and overrides (for --no-config)
    pub fn load_defaults(overrides: &ConfigOverrides) -> Result<FileConfig, Box<figment::Error>> {
        let figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        Self::finish(figment, overrides)
    }

    fn finish(
        mut figment: Figment,
        overrides: &ConfigOverrides,
    ) -> Result<FileConfig, Box<figment::Error>> {
        figment = figment.merge(Self::env_provider());

        if let Some(url) = &overrides.base_url {
            figment = figment.merge(Serialized::default("api.base_url", url));
        }
        if let Some(seconds) = overrides.timeout_seconds {
            figment = figment.merge(Serialized::default("api.timeout_seconds", seconds));
        }

        figment.extract().map_err(Box::new)
    }

    /// Map the two supported environment variables onto their config keys
    fn env_provider() -> Env {
        Env::raw()
            .only(&[ENV_API_URL, ENV_TIMEOUT_SECONDS])
            .map(|key| {
                if key.as_str().eq_ignore_ascii_case(ENV_API_URL) {
                    "api.base_url".into()
                } else {
                    "api.timeout_seconds".into()
                }
            })
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/brandcheck/config.toml if set,
    /// otherwise falls back to ~/.config/brandcheck/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("brandcheck").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        println!(
            "  [{}] Environment: {}, {}",
            if std::env::var_os(ENV_API_URL).is_some() || std::env::var_os(ENV_TIMEOUT_SECONDS).is_some() {
                "FOUND"
            } else {
                "     "
            },
            ENV_API_URL,
            ENV_TIMEOUT_SECONDS
        );

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./brandcheck.toml or ./.brandcheck.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
