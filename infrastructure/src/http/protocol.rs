//! Wire types for the `/analyze-name` endpoint.
//!
//! ```text
//! POST /analyze-name   {"name": "<query>"}
//! 200                  {"name": "<query>", "analysis": "<markdown>"}
//! 4xx/5xx              {"error": "<message>"}   (body optional)
//! ```

use serde::{Deserialize, Serialize};

/// Path appended to the configured base URL
pub const ANALYZE_PATH: &str = "analyze-name";

/// Request body
#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub name: &'a str,
}

/// Success body. `name` is echoed back by the service but not relied on.
#[derive(Debug, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Error body
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Parse leniently: anything that is not the expected JSON yields no message
    pub fn parse(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let body = serde_json::to_string(&AnalyzeRequest { name: "Nike" }).unwrap();
        assert_eq!(body, r#"{"name":"Nike"}"#);
    }

    #[test]
    fn test_response_without_echoed_name() {
        let response: AnalyzeResponse =
            serde_json::from_str(r#"{"analysis":"**Nike** means victory."}"#).unwrap();
        assert_eq!(response.analysis, "**Nike** means victory.");
        assert!(response.name.is_none());
    }

    #[test]
    fn test_response_missing_analysis_is_error() {
        assert!(serde_json::from_str::<AnalyzeResponse>(r#"{"name":"Nike"}"#).is_err());
    }

    #[test]
    fn test_error_body_lenient() {
        assert_eq!(
            ErrorBody::parse(br#"{"error":"Name too short"}"#).error.as_deref(),
            Some("Name too short")
        );
        assert!(ErrorBody::parse(b"<html>Bad Gateway</html>").error.is_none());
        assert!(ErrorBody::parse(b"").error.is_none());
        assert!(ErrorBody::parse(br#"{"detail":"x"}"#).error.is_none());
    }
}
