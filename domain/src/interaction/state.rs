//! InteractionState entity and its reducer

use super::intent::{Effect, Intent, Resolution, ResolveEffect, SubmitEffect};
use crate::analysis::{error_detail::ErrorDetail, result::AnalysisResult};
use crate::core::name_query::NameQuery;

/// Identifies one dispatched analysis request within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Request lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A request is in flight
    Pending(RequestId),
    /// Last request returned an analysis
    Succeeded,
    /// Last request failed
    Failed,
}

impl Status {
    pub fn is_pending(&self) -> bool {
        matches!(self, Status::Pending(_))
    }

    /// Short label for logs and status lines
    pub fn label(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Pending(_) => "pending",
            Status::Succeeded => "succeeded",
            Status::Failed => "failed",
        }
    }
}

/// Session-scoped interaction state (Entity)
///
/// Invariants, upheld by [`reduce`](Self::reduce):
/// - `Pending` has neither result nor error
/// - `Succeeded` has a result and no error
/// - `Failed` has an error and no result
///
/// The validation message lives apart from the error so a rejected submit
/// never disturbs those invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    query: String,
    status: Status,
    result: Option<AnalysisResult>,
    error: Option<ErrorDetail>,
    validation_message: Option<String>,
    issued: u64,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorDetail> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(ErrorDetail::message)
    }

    pub fn validation_message(&self) -> Option<&str> {
        self.validation_message.as_deref()
    }

    /// The message a surface should show under the input, if any.
    ///
    /// A validation message wins over a request error since it is the
    /// response to the most recent user action.
    pub fn inline_message(&self) -> Option<&str> {
        self.validation_message().or_else(|| self.error_message())
    }

    /// Number of requests dispatched so far in this session
    pub fn requests_issued(&self) -> u64 {
        self.issued
    }

    /// Apply one intent and report what happened.
    ///
    /// [`submit`](Self::submit) and [`resolve`](Self::resolve) are the same
    /// transitions with a narrower result; there is no other way to change
    /// the state.
    pub fn reduce(&mut self, intent: Intent) -> Effect {
        match intent {
            Intent::Edit(text) => {
                self.query = text;
                Effect::Edited
            }
            Intent::Submit => self.submit().into(),
            Intent::Resolve {
                request,
                resolution,
            } => self.resolve(request, resolution).into(),
        }
    }

    /// [`Intent::Submit`]
    pub fn submit(&mut self) -> SubmitEffect {
        if self.status.is_pending() {
            return SubmitEffect::Ignored;
        }

        let query = match NameQuery::parse(&self.query) {
            Ok(query) => query,
            Err(err) => {
                self.validation_message = Some(err.to_string());
                return SubmitEffect::Rejected(err);
            }
        };

        self.issued += 1;
        let request = RequestId(self.issued);
        self.status = Status::Pending(request);
        self.result = None;
        self.error = None;
        self.validation_message = None;

        SubmitEffect::Dispatch { request, query }
    }

    /// [`Intent::Resolve`]
    pub fn resolve(&mut self, request: RequestId, resolution: Resolution) -> ResolveEffect {
        if self.status != Status::Pending(request) {
            return ResolveEffect::Stale(request);
        }

        match resolution {
            Resolution::Success(analysis) => {
                self.status = Status::Succeeded;
                self.result = Some(analysis);
                self.error = None;
            }
            Resolution::Failure(detail) => {
                self.status = Status::Failed;
                self.result = None;
                self.error = Some(detail);
            }
        }

        ResolveEffect::Resolved(self.status)
    }
}
