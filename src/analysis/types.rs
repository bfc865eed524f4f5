use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of the outbound analysis call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Successful response from the analysis service.
///
/// Any JSON object is accepted. Missing or `null` fields stay `None` and
/// render with the fallback presentation. Fields the client does not know
/// about are kept in `extra` so the stored result matches what the server sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub sentiment_result: Option<String>,
    #[serde(default)]
    pub summary_result: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalysisResult {
    pub fn new(sentiment: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            sentiment_result: Some(sentiment.into()),
            summary_result: Some(summary.into()),
            extra: Map::new(),
        }
    }

    /// Sentiment label as sent by the server.
    pub fn sentiment(&self) -> Option<&str> {
        self.sentiment_result.as_deref()
    }

    /// Summary text, empty when the server sent none.
    pub fn summary(&self) -> &str {
        self.summary_result.as_deref().unwrap_or_default()
    }
}
