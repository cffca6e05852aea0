//! CLI entrypoint for brandcheck
//!
//! This is the main binary that wires together all layers using
//! dependency injection: configuration, the HTTP gateway, and either the
//! interactive TUI or the one-shot runner.

use anyhow::{Context, Result};
use brandcheck_domain::OutputFormat;
use brandcheck_infrastructure::{ConfigLoader, ConfigOverrides, FileConfig, HttpAnalysisGateway};
use brandcheck_presentation::{Cli, OneShotRunner, TuiApp};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // Held until exit so buffered log lines reach the file
    let _log_guard = init_logging(cli.verbose, cli.is_interactive());

    info!("Starting brandcheck");

    let config = load_config(&cli)?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    // Create infrastructure adapter (HTTP gateway)
    let gateway = Arc::new(
        HttpAnalysisGateway::from_config(&config.api).context("Failed to create HTTP client")?,
    );
    info!("Analysis endpoint: {}", gateway.endpoint());

    match cli.name {
        // One-shot mode
        Some(name) => {
            let format = cli
                .output
                .map(OutputFormat::from)
                .or(config.output.format)
                .unwrap_or_default();

            let runner = OneShotRunner::new(gateway, format).with_progress(!cli.quiet);
            let outcome = runner
                .run(&name, &mut std::io::stdout(), &mut std::io::stderr())
                .await?;

            Ok(ExitCode::from(outcome.exit_code()))
        }
        // Interactive mode
        None => {
            let mut app = TuiApp::new(gateway)
                .with_tick_rate(Duration::from_millis(config.tui.tick_rate_ms))
                .with_service_url(config.api.base_url.clone());
            app.run().await.context("Terminal UI failed")?;

            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load and validate configuration with CLI flags applied on top
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let overrides = ConfigOverrides {
        base_url: cli.api_url.clone(),
        timeout_seconds: cli.timeout,
    };

    let config = if cli.no_config {
        ConfigLoader::load_defaults(&overrides)
    } else {
        ConfigLoader::load(cli.config.as_ref(), &overrides)
    }
    .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Initialize logging based on verbosity level.
///
/// The TUI owns the terminal, so in interactive mode logs go to a daily
/// rolling file under the cache directory instead of stderr.
fn init_logging(verbose: u8, interactive: bool) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if !interactive {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return None;
    }

    let dir = log_dir();
    match RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("brandcheck")
        .filename_suffix("log")
        .build(&dir)
    {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            info!("Logging to {}", dir.display());
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init();
            warn!("Log file unavailable in {}: {}", dir.display(), e);
            None
        }
    }
}

fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("brandcheck")
}
