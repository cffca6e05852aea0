//! UI event types emitted by InteractionController for presentation layer rendering
//!
//! These events form the output port from the application layer to the
//! presentation layer. They describe transitions that were just committed;
//! the authoritative state is always [`InteractionController::state`].
//!
//! [`InteractionController::state`]: crate::InteractionController::state

use brandcheck_domain::{AnalysisResult, ErrorDetail, NameQuery, RequestId};

/// Events emitted by InteractionController for presentation layer to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A request was dispatched for `name`
    AnalysisStarting { request: RequestId, name: NameQuery },
    /// The pending request returned an analysis
    AnalysisCompleted {
        request: RequestId,
        result: AnalysisResult,
    },
    /// The pending request failed
    AnalysisFailed {
        request: RequestId,
        error: ErrorDetail,
    },
    /// Submit rejected by input validation
    ValidationFailed { message: String },
    /// Submit ignored because a request is already in flight
    SubmitIgnored,
}
