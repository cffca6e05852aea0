//! Spinner shown on stderr while an analysis is in flight

use brandcheck_application::UiEvent;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Drives an indicatif spinner from [`UiEvent`]s
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        Self { bar }
    }

    /// Reporter that draws nothing (`--quiet`, JSON output, tests)
    pub fn hidden() -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden());
        Self { bar }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.magenta} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Update the spinner for one controller event
    pub fn on_event(&self, event: &UiEvent) {
        match event {
            UiEvent::AnalysisStarting { name, .. } => {
                self.bar
                    .set_message(format!("Analyzing {}...", name.as_str().bold()));
                self.bar.enable_steady_tick(Duration::from_millis(100));
            }
            UiEvent::AnalysisCompleted { .. } => {
                self.bar.finish_and_clear();
            }
            UiEvent::AnalysisFailed { .. } => {
                self.bar.finish_and_clear();
            }
            UiEvent::ValidationFailed { .. } | UiEvent::SubmitIgnored => {}
        }
    }

    pub fn message(&self) -> String {
        self.bar.message()
    }

    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}
