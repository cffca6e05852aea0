//! CLI command definitions

use brandcheck_domain::OutputFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Rendered analysis with terminal styles
    Styled,
    /// Rendered analysis as plain text
    Plain,
    /// JSON object with the name, status, markdown and render tree
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Styled => OutputFormat::Styled,
            OutputArg::Plain => OutputFormat::Plain,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for brandcheck
#[derive(Parser, Debug)]
#[command(name = "brandcheck")]
#[command(author, version, about = "Check Your Brand Name - cultural analysis of a candidate brand name")]
#[command(long_about = r#"
brandcheck sends a candidate brand name to an analysis service and shows
the cultural significance and potential implications it reports.

Without a NAME an interactive terminal UI starts. With a NAME the analysis
is printed once and the exit code reports success (0), a failed analysis (1)
or an empty name (2).

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./brandcheck.toml or ./.brandcheck.toml   Project-level config
3. ~/.config/brandcheck/config.toml          Global config

Environment: BRANDCHECK_API_URL, BRANDCHECK_TIMEOUT_SECONDS

Example:
  brandcheck
  brandcheck Nike
  brandcheck --api-url https://names.example.com --output json "Acme Co"
"#)]
pub struct Cli {
    /// Brand name to analyze (omit to start the interactive UI)
    pub name: Option<String>,

    /// Base URL of the analysis service
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Output format for one-shot mode
    #[arg(short, long, value_enum)]
    pub output: Option<OutputArg>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether to start the interactive UI
    pub fn is_interactive(&self) -> bool {
        self.name.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_name_is_interactive() {
        let cli = Cli::parse_from(["brandcheck"]);
        assert!(cli.is_interactive());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_one_shot_flags() {
        let cli = Cli::parse_from([
            "brandcheck",
            "--api-url",
            "http://example.com",
            "--timeout",
            "30",
            "-o",
            "json",
            "-vv",
            "Acme Co",
        ]);
        assert!(!cli.is_interactive());
        assert_eq!(cli.name.as_deref(), Some("Acme Co"));
        assert_eq!(cli.api_url.as_deref(), Some("http://example.com"));
        assert_eq!(cli.timeout, Some(30));
        assert_eq!(cli.output, Some(OutputArg::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_output_arg_maps_to_domain() {
        assert_eq!(OutputFormat::from(OutputArg::Plain), OutputFormat::Plain);
    }

    #[test]
    fn test_rejects_non_numeric_timeout() {
        assert!(Cli::try_parse_from(["brandcheck", "--timeout", "soon"]).is_err());
    }
}
