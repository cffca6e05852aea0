//! Analyze Name use case.
//!
//! One analysis request for one validated name. Failures come back as a
//! user-facing [`ErrorDetail`]; the technical cause is logged here and
//! goes no further.

use crate::ports::analysis_gateway::AnalysisGateway;
use brandcheck_domain::{AnalysisResult, ErrorDetail, NameQuery};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for analyzing a single brand name.
#[derive(Clone)]
pub struct AnalyzeNameUseCase {
    gateway: Arc<dyn AnalysisGateway>,
}

impl AnalyzeNameUseCase {
    pub fn new(gateway: Arc<dyn AnalysisGateway>) -> Self {
        Self { gateway }
    }

    /// Issue exactly one call to the gateway.
    pub async fn execute(&self, name: &NameQuery) -> Result<AnalysisResult, ErrorDetail> {
        info!("Analyzing name: {}", name);

        match self.gateway.analyze(name).await {
            Ok(result) => {
                debug!(
                    "Analysis for {} received ({} bytes)",
                    name,
                    result.markdown().len()
                );
                Ok(result)
            }
            Err(err) => {
                warn!("Analysis for {} failed: {}", name, err);
                Err(err.into_detail())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::analysis_gateway::GatewayError;
    use async_trait::async_trait;
    use brandcheck_domain::{FailureKind, GENERIC_FAILURE_MESSAGE};
    use std::sync::Mutex;

    struct RecordingGateway {
        names: Mutex<Vec<String>>,
        fail_with_status: Option<u16>,
    }

    impl RecordingGateway {
        fn ok() -> Self {
            Self {
                names: Mutex::new(Vec::new()),
                fail_with_status: None,
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                names: Mutex::new(Vec::new()),
                fail_with_status: Some(status),
            }
        }
    }

    #[async_trait]
    impl AnalysisGateway for RecordingGateway {
        async fn analyze(&self, name: &NameQuery) -> Result<AnalysisResult, GatewayError> {
            self.names.lock().unwrap().push(name.to_string());
            match self.fail_with_status {
                Some(status) => Err(GatewayError::Response {
                    status,
                    message: None,
                }),
                None => Ok(AnalysisResult::new(format!("**{}** is fine.", name))),
            }
        }
    }

    #[tokio::test]
    async fn test_execute_passes_trimmed_name_once() {
        let gateway = Arc::new(RecordingGateway::ok());
        let use_case = AnalyzeNameUseCase::new(gateway.clone());

        let name = NameQuery::parse("  Nike ").unwrap();
        let result = use_case.execute(&name).await.unwrap();

        assert_eq!(result.markdown(), "**Nike** is fine.");
        assert_eq!(*gateway.names.lock().unwrap(), vec!["Nike".to_string()]);
    }

    #[tokio::test]
    async fn test_execute_maps_failure_to_detail() {
        let gateway = Arc::new(RecordingGateway::failing(500));
        let use_case = AnalyzeNameUseCase::new(gateway.clone());

        let err = use_case
            .execute(&NameQuery::parse("Acme").unwrap())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), FailureKind::Response);
        assert_eq!(err.message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(gateway.names.lock().unwrap().len(), 1);
    }
}
