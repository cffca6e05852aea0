//! Infrastructure layer for brandcheck
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigOverrides, ConfigValidationError, DEFAULT_BASE_URL, FileApiConfig,
    FileConfig, FileOutputConfig, FileTuiConfig,
};
pub use http::{
    error::{HttpGatewayError, Result},
    gateway::HttpAnalysisGateway,
};
