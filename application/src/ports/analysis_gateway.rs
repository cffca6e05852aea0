//! Analysis Gateway port
//!
//! Defines the interface for reaching the remote name analysis service.

use async_trait::async_trait;
use brandcheck_domain::{AnalysisResult, ErrorDetail, NameQuery};
use thiserror::Error;

/// Errors that can occur while calling the analysis service
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Service unreachable, or the request could not be built or sent
    #[error("Transport error: {0}")]
    Transport(String),

    /// Service answered with a non-success status
    #[error("Service returned status {status}")]
    Response {
        status: u16,
        /// `error` field of the response body, when present
        message: Option<String>,
    },

    /// Success status but the body did not carry an analysis
    #[error("Invalid response body: {0}")]
    Parse(String),
}

impl GatewayError {
    /// Convert into the user-facing failure detail.
    ///
    /// Only a service-provided message is shown verbatim; transport and
    /// parse causes are for logs.
    pub fn into_detail(self) -> ErrorDetail {
        match self {
            GatewayError::Transport(_) => ErrorDetail::transport(),
            GatewayError::Response { message, .. } => ErrorDetail::response(message),
            GatewayError::Parse(_) => ErrorDetail::parse(),
        }
    }
}

/// Gateway to the name analysis service
///
/// Implementations (adapters) live in the infrastructure layer. An
/// implementation makes exactly one attempt per call: no retries.
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    /// Request an analysis of `name`
    async fn analyze(&self, name: &NameQuery) -> Result<AnalysisResult, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandcheck_domain::{FailureKind, GENERIC_FAILURE_MESSAGE, INVALID_RESPONSE_MESSAGE};

    #[test]
    fn test_transport_hides_cause() {
        let detail = GatewayError::Transport("connection refused".into()).into_detail();
        assert_eq!(detail.kind(), FailureKind::Transport);
        assert_eq!(detail.message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_response_uses_service_message() {
        let detail = GatewayError::Response {
            status: 400,
            message: Some("Name too short".into()),
        }
        .into_detail();
        assert_eq!(detail.kind(), FailureKind::Response);
        assert_eq!(detail.message(), "Name too short");
    }

    #[test]
    fn test_response_without_message_falls_back() {
        let detail = GatewayError::Response {
            status: 500,
            message: None,
        }
        .into_detail();
        assert_eq!(detail.message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_parse_error_message() {
        let detail = GatewayError::Parse("missing field `analysis`".into()).into_detail();
        assert_eq!(detail.kind(), FailureKind::Parse);
        assert_eq!(detail.message(), INVALID_RESPONSE_MESSAGE);
    }
}
