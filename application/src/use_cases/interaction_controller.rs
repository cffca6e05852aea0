//! Interaction Controller
//!
//! Owns the session's [`InteractionState`] and carries out the effects its
//! reducer asks for. A dispatched request runs on a spawned task; its
//! outcome comes back through a channel and is applied by whoever drives
//! the controller (the TUI loop or [`run_to_completion`]).
//!
//! ```text
//! surface ──on_query_change / on_submit_intent──▶ controller ──submit──▶ state
//!                                                    │
//!                           SubmitEffect::Dispatch   ▼
//!                                     tokio::spawn(use_case.execute)
//!                                                    │
//! surface ◀──UiEvent── controller ◀──apply_outcome── outcome channel
//! ```
//!
//! [`run_to_completion`]: InteractionController::run_to_completion

use crate::ports::analysis_gateway::AnalysisGateway;
use crate::ports::ui_event::UiEvent;
use crate::use_cases::analyze_name::AnalyzeNameUseCase;
use brandcheck_domain::{
    Intent, InteractionState, RequestId, Resolution, ResolveEffect, Status, SubmitEffect,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Result of a finished request, delivered back to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub request: RequestId,
    pub resolution: Resolution,
}

/// What happened to a submit intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// One request was issued
    Dispatched(RequestId),
    /// Rejected by validation; carries the inline message
    Rejected(String),
    /// A request is already in flight; nothing was issued
    Ignored,
}

/// Session controller: the only writer of [`InteractionState`]
///
/// Exposes the presentation surface contract (`on_query_change`,
/// `on_submit_intent`) and emits [`UiEvent`]s for every committed
/// transition.
pub struct InteractionController {
    state: InteractionState,
    use_case: AnalyzeNameUseCase,
    /// Sender cloned into each request task
    outcome_tx: mpsc::UnboundedSender<AnalysisOutcome>,
    /// Channel sender for UI events
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl InteractionController {
    /// Create a controller and the receiver its request outcomes arrive on
    pub fn new(
        gateway: Arc<dyn AnalysisGateway>,
        tx: mpsc::UnboundedSender<UiEvent>,
    ) -> (Self, mpsc::UnboundedReceiver<AnalysisOutcome>) {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let controller = Self {
            state: InteractionState::new(),
            use_case: AnalyzeNameUseCase::new(gateway),
            outcome_tx,
            tx,
        };
        (controller, outcome_rx)
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// The user edited the query
    pub fn on_query_change(&mut self, text: impl Into<String>) {
        self.state.reduce(Intent::Edit(text.into()));
    }

    /// The user asked to analyze the current query.
    ///
    /// Must be called from within a tokio runtime, since an accepted
    /// submit spawns the request task.
    pub fn on_submit_intent(&mut self) -> SubmitOutcome {
        match self.state.submit() {
            SubmitEffect::Dispatch { request, query } => {
                info!("Dispatching request {} for {}", request, query);
                let _ = self.tx.send(UiEvent::AnalysisStarting {
                    request,
                    name: query.clone(),
                });

                let use_case = self.use_case.clone();
                let outcome_tx = self.outcome_tx.clone();
                tokio::spawn(async move {
                    let resolution = Resolution::from(use_case.execute(&query).await);
                    // Receiver gone means the session ended; nothing to apply
                    let _ = outcome_tx.send(AnalysisOutcome {
                        request,
                        resolution,
                    });
                });

                SubmitOutcome::Dispatched(request)
            }
            SubmitEffect::Rejected(err) => {
                let message = err.to_string();
                debug!("Submit rejected: {}", message);
                let _ = self.tx.send(UiEvent::ValidationFailed {
                    message: message.clone(),
                });
                SubmitOutcome::Rejected(message)
            }
            SubmitEffect::Ignored => {
                debug!("Submit ignored: request already in flight");
                let _ = self.tx.send(UiEvent::SubmitIgnored);
                SubmitOutcome::Ignored
            }
        }
    }

    /// Apply a request outcome. Returns the resulting status, or `None`
    /// when the outcome was stale and dropped.
    pub fn apply_outcome(&mut self, outcome: AnalysisOutcome) -> Option<Status> {
        let AnalysisOutcome {
            request,
            resolution,
        } = outcome;

        let event = match &resolution {
            Resolution::Success(result) => UiEvent::AnalysisCompleted {
                request,
                result: result.clone(),
            },
            Resolution::Failure(error) => UiEvent::AnalysisFailed {
                request,
                error: error.clone(),
            },
        };

        match self.state.resolve(request, resolution) {
            ResolveEffect::Resolved(status) => {
                info!("Request {} resolved: {}", request, status.label());
                let _ = self.tx.send(event);
                Some(status)
            }
            ResolveEffect::Stale(request) => {
                debug!("Dropping stale outcome for request {}", request);
                None
            }
        }
    }

    /// Wait for the in-flight request (if any) and apply its outcome.
    ///
    /// There is no timeout at this level: if the gateway never returns,
    /// neither does this.
    pub async fn run_to_completion(
        &mut self,
        outcomes: &mut mpsc::UnboundedReceiver<AnalysisOutcome>,
    ) -> &InteractionState {
        while self.state.is_pending() {
            match outcomes.recv().await {
                Some(outcome) => {
                    self.apply_outcome(outcome);
                }
                None => break,
            }
        }
        &self.state
    }
}
