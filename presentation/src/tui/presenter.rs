//! TUI Presenter - Converts Application Events to TUI State
//!
//! ```text
//! InteractionController (UiEvent)
//!         ↓
//!   TuiPresenter (this module)
//!         ↓
//!   TuiState (view state) → widgets
//! ```

use super::state::TuiState;
use crate::layout::layout;
use brandcheck_application::UiEvent;
use brandcheck_domain::render;

/// Applies [`UiEvent`]s to the view state
#[derive(Debug, Default)]
pub struct TuiPresenter;

impl TuiPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, state: &mut TuiState, event: &UiEvent) {
        match event {
            UiEvent::AnalysisStarting { name, .. } => {
                state.clear_analysis();
                state.set_flash(format!("Analyzing {}...", name));
            }
            UiEvent::AnalysisCompleted { result, .. } => {
                state.set_analysis(layout(&render(result.markdown())));
                state.set_flash("Analysis complete");
            }
            UiEvent::AnalysisFailed { error, .. } => {
                state.clear_analysis();
                state.set_flash(format!("Analysis failed ({})", error.kind()));
            }
            // Shown inline under the input
            UiEvent::ValidationFailed { .. } => {}
            UiEvent::SubmitIgnored => {
                state.set_flash("Analysis already in progress");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandcheck_domain::{
        AnalysisResult, Effect, ErrorDetail, Intent, InteractionState, NameQuery, RequestId,
    };

    fn request() -> RequestId {
        let mut state = InteractionState::new();
        state.reduce(Intent::Edit("Nike".into()));
        match state.reduce(Intent::Submit) {
            Effect::Dispatch { request, .. } => request,
            other => panic!("Expected dispatch, got {:?}", other),
        }
    }

    fn flash(state: &TuiState) -> &str {
        state
            .flash_message
            .as_ref()
            .map(|(text, _)| text.as_str())
            .unwrap_or("")
    }

    #[test]
    fn test_completed_lays_out_analysis() {
        let presenter = TuiPresenter::new();
        let mut state = TuiState::new();

        presenter.apply(
            &mut state,
            &UiEvent::AnalysisCompleted {
                request: request(),
                result: AnalysisResult::new("**Nike** means victory."),
            },
        );

        assert_eq!(state.analysis.len(), 1);
        assert_eq!(state.analysis[0].text(), "Nike means victory.");
        assert_eq!(flash(&state), "Analysis complete");
    }

    #[test]
    fn test_starting_clears_previous_analysis() {
        let presenter = TuiPresenter::new();
        let mut state = TuiState::new();
        state.set_analysis(crate::layout::layout(&render("old")));

        presenter.apply(
            &mut state,
            &UiEvent::AnalysisStarting {
                request: request(),
                name: NameQuery::parse("Nike").unwrap(),
            },
        );

        assert!(state.analysis.is_empty());
        assert_eq!(flash(&state), "Analyzing Nike...");
    }

    #[test]
    fn test_failed_clears_analysis() {
        let presenter = TuiPresenter::new();
        let mut state = TuiState::new();
        state.set_analysis(crate::layout::layout(&render("old")));

        presenter.apply(
            &mut state,
            &UiEvent::AnalysisFailed {
                request: request(),
                error: ErrorDetail::transport(),
            },
        );

        assert!(state.analysis.is_empty());
        assert_eq!(flash(&state), "Analysis failed (transport)");
    }

    #[test]
    fn test_submit_ignored_flashes() {
        let presenter = TuiPresenter::new();
        let mut state = TuiState::new();
        presenter.apply(&mut state, &UiEvent::SubmitIgnored);
        assert_eq!(flash(&state), "Analysis already in progress");
    }
}
