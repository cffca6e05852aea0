//! Application layer for brandcheck
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    analysis_gateway::{AnalysisGateway, GatewayError},
    ui_event::UiEvent,
};
pub use use_cases::{
    analyze_name::AnalyzeNameUseCase,
    interaction_controller::{AnalysisOutcome, InteractionController, SubmitOutcome},
};
