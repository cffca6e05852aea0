//! HTTP gateway implementation

use super::error::{HttpGatewayError, Result};
use super::protocol::{ANALYZE_PATH, AnalyzeRequest, AnalyzeResponse, ErrorBody};
use crate::config::FileApiConfig;
use async_trait::async_trait;
use brandcheck_application::{AnalysisGateway, GatewayError};
use brandcheck_domain::{AnalysisResult, NameQuery};
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, warn};

/// Gateway to the analysis service over HTTP
///
/// One attempt per call. A configured timeout bounds the whole exchange
/// and surfaces as a transport failure.
#[derive(Debug, Clone)]
pub struct HttpAnalysisGateway {
    client: Client,
    endpoint: Url,
}

impl HttpAnalysisGateway {
    /// Create a gateway for `base_url`; `/analyze-name` is appended
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let endpoint = Self::endpoint_for(base_url)?;

        let mut builder = Client::builder().user_agent(concat!(
            "brandcheck/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    /// Create a gateway from the `[api]` config section
    pub fn from_config(config: &FileApiConfig) -> Result<Self> {
        Self::new(&config.base_url, config.timeout())
    }

    /// Full URL the gateway posts to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn endpoint_for(base_url: &str) -> Result<Url> {
        let invalid = || HttpGatewayError::InvalidBaseUrl(base_url.to_string());

        let base = Url::parse(base_url).map_err(|_| invalid())?;
        if !matches!(base.scheme(), "http" | "https") || !base.has_host() {
            return Err(invalid());
        }

        let joined = format!("{}/{}", base.as_str().trim_end_matches('/'), ANALYZE_PATH);
        Url::parse(&joined).map_err(|_| invalid())
    }
}

#[async_trait]
impl AnalysisGateway for HttpAnalysisGateway {
    async fn analyze(&self, name: &NameQuery) -> std::result::Result<AnalysisResult, GatewayError> {
        debug!(endpoint = %self.endpoint, name = %name, "Sending analysis request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&AnalyzeRequest {
                name: name.as_str(),
            })
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = ErrorBody::parse(&body).error;
            warn!(
                status = status.as_u16(),
                message = message.as_deref().unwrap_or("<none>"),
                "Analysis service returned an error"
            );
            return Err(GatewayError::Response {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: AnalyzeResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "Analysis response did not match the expected shape");
            GatewayError::Parse(e.to_string())
        })?;

        debug!(
            bytes = parsed.analysis.len(),
            echoed = parsed.name.as_deref().unwrap_or(""),
            "Received analysis"
        );
        Ok(AnalysisResult::new(parsed.analysis))
    }
}
