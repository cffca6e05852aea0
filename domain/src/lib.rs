//! Domain layer for brandcheck
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Name Query
//!
//! A [`NameQuery`] is a candidate brand name that has been trimmed and
//! validated. Only a `NameQuery` can be handed to the analysis service.
//!
//! ## Interaction State
//!
//! [`InteractionState`] is the single source of truth for one session:
//! the text being edited, whether a request is in flight, and the last
//! result or error. It only changes through [`InteractionState::reduce`].
//!
//! ## Rendering
//!
//! [`render`] turns the service's markdown answer into a tree of
//! [`RenderNode`]s that carry inert text only.

pub mod analysis;
pub mod config;
pub mod core;
pub mod interaction;
pub mod render;

// Re-export commonly used types
pub use analysis::{
    error_detail::{ErrorDetail, FailureKind, GENERIC_FAILURE_MESSAGE, INVALID_RESPONSE_MESSAGE},
    result::AnalysisResult,
};
pub use config::OutputFormat;
pub use core::{
    error::{DomainError, EMPTY_NAME_MESSAGE},
    name_query::NameQuery,
};
pub use interaction::{
    intent::{Effect, Intent, Resolution, ResolveEffect, SubmitEffect},
    state::{InteractionState, RequestId, Status},
};
pub use render::{flatten, node::RenderNode, render};
