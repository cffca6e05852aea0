//! Failure details surfaced to the user after a failed analysis

use serde::{Deserialize, Serialize};

/// Fallback message when the service gives no usable explanation
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to analyze name";

/// Message for a success response whose body could not be understood
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response from analysis service";

/// Where an analysis call went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Service unreachable or the request could not be built
    Transport,
    /// Service answered with a non-success status
    Response,
    /// Success status but the body was missing or malformed
    Parse,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::Response => "response",
            FailureKind::Parse => "parse",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable failure with its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    kind: FailureKind,
    message: String,
}

impl ErrorDetail {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Unreachable service; the user only sees the generic message
    pub fn transport() -> Self {
        Self::new(FailureKind::Transport, GENERIC_FAILURE_MESSAGE)
    }

    /// Service-reported failure, using its message when it sent a non-blank one
    pub fn response(message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
        Self::new(FailureKind::Response, message)
    }

    pub fn parse() -> Self {
        Self::new(FailureKind::Parse, INVALID_RESPONSE_MESSAGE)
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_uses_generic_message() {
        let detail = ErrorDetail::transport();
        assert_eq!(detail.kind(), FailureKind::Transport);
        assert_eq!(detail.message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_response_prefers_service_message() {
        let detail = ErrorDetail::response(Some("Name too short".to_string()));
        assert_eq!(detail.kind(), FailureKind::Response);
        assert_eq!(detail.message(), "Name too short");
    }

    #[test]
    fn test_response_falls_back_when_missing_or_blank() {
        assert_eq!(ErrorDetail::response(None).message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(
            ErrorDetail::response(Some("  ".to_string())).message(),
            GENERIC_FAILURE_MESSAGE
        );
    }

    #[test]
    fn test_display_is_message_only() {
        let detail = ErrorDetail::parse();
        assert_eq!(detail.to_string(), INVALID_RESPONSE_MESSAGE);
    }
}
