//! Analysis-service transport

use crate::error::InsightError;
use crate::report::ConnectionInsight;
use async_trait::async_trait;
use netpulse_core::SpeedResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Time allowed for one analysis request
pub const DEFAULT_ANALYZE_TIMEOUT: Duration = Duration::from_secs(15);

/// Request payload sent to the analysis endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightRequest {
    /// Recent measurement window, oldest first
    pub history: Vec<SpeedResult>,
    /// The sample that triggered this request
    pub latest: SpeedResult,
}

/// Seam over the analysis service
#[async_trait]
pub trait InsightProvider: Send + Sync + fmt::Debug {
    /// Ask the service to assess the given measurement window
    async fn analyze(&self, request: &InsightRequest) -> Result<ConnectionInsight, InsightError>;
}

/// Analysis client POSTing the measurement window as JSON
#[derive(Debug, Clone)]
pub struct HttpInsightProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpInsightProvider {
    /// Create a provider for the given endpoint URL
    pub fn new(endpoint: &str) -> Result<Self, InsightError> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_ANALYZE_TIMEOUT)
            .build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Create a provider reusing an existing client
    pub fn with_client(client: reqwest::Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }

    /// Endpoint this provider reports to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InsightProvider for HttpInsightProvider {
    async fn analyze(&self, request: &InsightRequest) -> Result<ConnectionInsight, InsightError> {
        debug!(
            "Requesting assessment for {} samples from {}",
            request.history.len(),
            self.endpoint
        );
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        let insight = response.json::<ConnectionInsight>().await?;
        Ok(insight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::InsightStatus;

    fn create_test_result(timestamp: i64) -> SpeedResult {
        SpeedResult {
            timestamp,
            download: 94.25,
            upload: 18.6,
            latency: 23.4,
            jitter: 4.1,
        }
    }

    #[derive(Debug)]
    struct CannedProvider;

    #[async_trait]
    impl InsightProvider for CannedProvider {
        async fn analyze(
            &self,
            request: &InsightRequest,
        ) -> Result<ConnectionInsight, InsightError> {
            Ok(ConnectionInsight {
                status: InsightStatus::Good,
                summary: format!("{} samples look fine.", request.history.len()),
                recommendations: Vec::new(),
            })
        }
    }

    #[tokio::test]
    async fn test_analyze_through_trait_object() {
        let provider: Box<dyn InsightProvider> = Box::new(CannedProvider);
        let request = InsightRequest {
            history: vec![create_test_result(1), create_test_result(2)],
            latest: create_test_result(2),
        };

        let insight = provider.analyze(&request).await.unwrap();
        assert_eq!(insight.status, InsightStatus::Good);
        assert_eq!(insight.summary, "2 samples look fine.");
    }

    #[test]
    fn test_request_serializes_window_and_latest() {
        let request = InsightRequest {
            history: vec![create_test_result(1), create_test_result(2)],
            latest: create_test_result(2),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["history"].as_array().unwrap().len(), 2);
        assert_eq!(value["latest"]["timestamp"], 2);
        assert_eq!(value["latest"]["download"], 94.25);
    }

    #[test]
    fn test_provider_keeps_endpoint() {
        let provider = HttpInsightProvider::new("https://insight.example/api/analyze").unwrap();
        assert_eq!(provider.endpoint(), "https://insight.example/api/analyze");
    }
}
