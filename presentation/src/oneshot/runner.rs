//! One-shot runner
//!
//! Drives the same [`InteractionController`] as the TUI through exactly
//! one edit and one submit, then writes the outcome.

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use brandcheck_application::{AnalysisGateway, InteractionController, SubmitOutcome, UiEvent};
use brandcheck_domain::{NameQuery, OutputFormat, Status};
use std::io::{self, Write};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// How a one-shot run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneShotOutcome {
    Succeeded,
    /// The analysis call failed
    Failed,
    /// The name was empty after trimming; nothing was sent
    Rejected,
}

impl OneShotOutcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> u8 {
        match self {
            OneShotOutcome::Succeeded => 0,
            OneShotOutcome::Failed => 1,
            OneShotOutcome::Rejected => 2,
        }
    }
}

/// Runs a single analysis and prints it
pub struct OneShotRunner {
    gateway: Arc<dyn AnalysisGateway>,
    formatter: ConsoleFormatter,
    show_progress: bool,
}

impl OneShotRunner {
    pub fn new(gateway: Arc<dyn AnalysisGateway>, format: OutputFormat) -> Self {
        Self {
            gateway,
            formatter: ConsoleFormatter::new(format),
            show_progress: true,
        }
    }

    /// Set whether to show the spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Analyze `name`, writing results to `out` and diagnostics to `err`.
    ///
    /// JSON output always goes to `out`, failures included, so scripts can
    /// parse a single stream.
    pub async fn run<O: Write, E: Write>(
        &self,
        name: &str,
        out: &mut O,
        err: &mut E,
    ) -> io::Result<OneShotOutcome> {
        let json = self.formatter.output_format() == OutputFormat::Json;
        let reporter = if self.show_progress && !json {
            ProgressReporter::new()
        } else {
            ProgressReporter::hidden()
        };

        let (ui_tx, mut ui_rx) = mpsc::unbounded_channel::<UiEvent>();
        let (mut controller, mut outcomes) = InteractionController::new(self.gateway.clone(), ui_tx);

        controller.on_query_change(name);
        if let SubmitOutcome::Rejected(message) = controller.on_submit_intent() {
            let text = self.formatter.format_error(None, &message);
            if json {
                writeln!(out, "{}", text)?;
            } else {
                writeln!(err, "{}", text)?;
            }
            return Ok(OneShotOutcome::Rejected);
        }

        drain(&mut ui_rx, &reporter);
        controller.run_to_completion(&mut outcomes).await;
        drain(&mut ui_rx, &reporter);

        let state = controller.state();
        debug!("One-shot run finished: {}", state.status().label());

        // The submit was accepted, so the query is a valid name
        let query = NameQuery::parse(state.query()).map_err(io::Error::other)?;

        match (state.status(), state.result(), state.error()) {
            (Status::Succeeded, Some(result), _) => {
                write!(out, "{}", self.formatter.format_result(&query, result))?;
                if json {
                    writeln!(out)?;
                }
                Ok(OneShotOutcome::Succeeded)
            }
            (Status::Failed, _, Some(detail)) => {
                let text = self.formatter.format_failure(&query, detail);
                if json {
                    writeln!(out, "{}", text)?;
                } else {
                    writeln!(err, "{}", text)?;
                }
                Ok(OneShotOutcome::Failed)
            }
            // The outcome channel closed before resolving
            _ => {
                let text = self
                    .formatter
                    .format_error(Some(&query), "Analysis did not complete");
                writeln!(err, "{}", text)?;
                Ok(OneShotOutcome::Failed)
            }
        }
    }
}

fn drain(rx: &mut mpsc::UnboundedReceiver<UiEvent>, reporter: &ProgressReporter) {
    while let Ok(event) = rx.try_recv() {
        reporter.on_event(&event);
    }
}
