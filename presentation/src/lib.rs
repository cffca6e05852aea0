//! Presentation layer for brandcheck
//!
//! This crate contains the CLI definition, the interactive TUI, the
//! one-shot runner with its console formatter and spinner, and the line
//! layout both surfaces use to draw a rendered analysis.

pub mod cli;
pub mod layout;
pub mod oneshot;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputArg};
pub use oneshot::{OneShotOutcome, OneShotRunner};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
pub use tui::TuiApp;
