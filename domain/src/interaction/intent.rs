//! Inputs and outputs of the interaction reducer

use super::state::{RequestId, Status};
use crate::analysis::{error_detail::ErrorDetail, result::AnalysisResult};
use crate::core::{error::DomainError, name_query::NameQuery};

/// Everything that can change an [`InteractionState`](super::state::InteractionState)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// The user edited the query text
    Edit(String),
    /// The user asked for the current query to be analyzed
    Submit,
    /// The request issued for `request` finished
    Resolve {
        request: RequestId,
        resolution: Resolution,
    },
}

/// How an analysis request finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Success(AnalysisResult),
    Failure(ErrorDetail),
}

impl From<Result<AnalysisResult, ErrorDetail>> for Resolution {
    fn from(result: Result<AnalysisResult, ErrorDetail>) -> Self {
        match result {
            Ok(analysis) => Resolution::Success(analysis),
            Err(detail) => Resolution::Failure(detail),
        }
    }
}

/// What the caller must do (or may report) after a reduction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Query text updated, nothing else happened
    Edited,
    /// Issue exactly one analysis call for `query`, tagged with `request`
    Dispatch { request: RequestId, query: NameQuery },
    /// Submit rejected locally; status unchanged
    Rejected(DomainError),
    /// Submit ignored because a request is already in flight
    Ignored,
    /// A pending request was resolved into the given terminal status
    Resolved(Status),
    /// Resolution for a request that is not the pending one; dropped
    Stale(RequestId),
}

/// Outcome of [`Intent::Submit`] alone
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitEffect {
    Dispatch { request: RequestId, query: NameQuery },
    Rejected(DomainError),
    Ignored,
}

/// Outcome of [`Intent::Resolve`] alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveEffect {
    Resolved(Status),
    Stale(RequestId),
}

impl From<SubmitEffect> for Effect {
    fn from(effect: SubmitEffect) -> Self {
        match effect {
            SubmitEffect::Dispatch { request, query } => Effect::Dispatch { request, query },
            SubmitEffect::Rejected(err) => Effect::Rejected(err),
            SubmitEffect::Ignored => Effect::Ignored,
        }
    }
}

impl From<ResolveEffect> for Effect {
    fn from(effect: ResolveEffect) -> Self {
        match effect {
            ResolveEffect::Resolved(status) => Effect::Resolved(status),
            ResolveEffect::Stale(request) => Effect::Stale(request),
        }
    }
}
