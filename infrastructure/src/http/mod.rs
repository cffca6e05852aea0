//! HTTP adapter for the name analysis service
//!
//! Implements AnalysisGateway with a single JSON `POST {base}/analyze-name`.

pub mod error;
pub mod gateway;
pub mod protocol;
