//! Error types for the HTTP adapter

use thiserror::Error;

/// Result type alias for HTTP adapter construction
pub type Result<T> = std::result::Result<T, HttpGatewayError>;

/// Errors raised while building the HTTP gateway.
///
/// Failures of an individual call are reported as
/// `GatewayError` through the port instead.
#[derive(Error, Debug)]
pub enum HttpGatewayError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
