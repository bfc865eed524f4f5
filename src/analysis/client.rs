use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};

use super::error::AnalysisError;
use super::types::{AnalysisRequest, AnalysisResult};

/// Remote analysis endpoint as seen by the request controller.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError>;
}

/// POSTs `{"text": ...}` as JSON to a fixed webhook URL.
///
/// No request timeout and no retries: a call runs until the server answers
/// or the connection fails.
pub struct HttpAnalysisClient {
    client: Client,
    endpoint: Url,
}

impl HttpAnalysisClient {
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Analysis endpoint rejected request");
            return Err(AnalysisError::ServerRejected {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let result: AnalysisResult = serde_json::from_slice(&body)?;
        tracing::debug!(
            sentiment = ?result.sentiment(),
            extra_fields = result.extra.len(),
            "Analysis response parsed"
        );
        Ok(result)
    }
}
