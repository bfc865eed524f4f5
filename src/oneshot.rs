//! Non-interactive mode: analyze one text, print the outcome, exit.

use std::io::{self, Write};

use crate::analysis::AnalysisService;
use crate::ui::page::{RequestController, SubmissionState};
use crate::ui::presentation::Sentiment;

/// Submit `text` once and write the outcome to `out`.
///
/// Validation errors and failures are written as `Error: <message>` lines.
/// Returns `Ok(true)` only when the analysis succeeded.
pub async fn run_once<W: Write>(
    text: String,
    service: &dyn AnalysisService,
    out: &mut W,
) -> io::Result<bool> {
    let mut controller = RequestController::default();
    controller.set_text(text);
    let succeeded = controller.submit(service).await;

    let state = controller.state();
    if let Some(message) = state.validation_message() {
        writeln!(out, "Error: {}", message)?;
        return Ok(false);
    }

    match &state.submission {
        SubmissionState::Succeeded(result) => {
            let label = result.sentiment();
            let icon = Sentiment::from_label(label).presentation().icon.glyph();
            writeln!(out, "Sentiment: {} {}", icon, label.unwrap_or("Unknown"))?;
            writeln!(out, "Summary: {}", result.summary())?;
        }
        SubmissionState::Failed { reason } => {
            writeln!(out, "Error: {}", reason)?;
        }
        other => {
            writeln!(out, "Error: analysis ended in state '{}'", other.label())?;
        }
    }
    Ok(succeeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisError, AnalysisRequest, AnalysisResult, EMPTY_INPUT_MESSAGE};
    use async_trait::async_trait;

    struct Canned(Result<AnalysisResult, AnalysisError>);

    #[async_trait]
    impl AnalysisService for Canned {
        async fn analyze(
            &self,
            _request: &AnalysisRequest,
        ) -> Result<AnalysisResult, AnalysisError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn prints_sentiment_and_summary() {
        let service = Canned(Ok(AnalysisResult::new("Positive", "Loved it.")));
        let mut out = Vec::new();
        let ok = run_once("I love this".into(), &service, &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(ok);
        assert!(text.contains("Sentiment: 🙂 Positive"));
        assert!(text.contains("Summary: Loved it."));
    }

    #[tokio::test]
    async fn missing_label_prints_unknown() {
        let result: AnalysisResult = serde_json::from_str(r#"{"summaryResult":"x"}"#).unwrap();
        let service = Canned(Ok(result));
        let mut out = Vec::new();
        let ok = run_once("hmm".into(), &service, &mut out).await.unwrap();
        assert!(ok);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Sentiment: 😐 Unknown\nSummary: x\n"
        );
    }

    #[tokio::test]
    async fn prints_validation_error_for_blank_text() {
        let service = Canned(Ok(AnalysisResult::new("Positive", "unused")));
        let mut out = Vec::new();
        let ok = run_once("  ".into(), &service, &mut out).await.unwrap();
        assert!(!ok);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Error: {}\n", EMPTY_INPUT_MESSAGE)
        );
    }

    #[tokio::test]
    async fn prints_failure_reason() {
        let service = Canned(Err(AnalysisError::Transport("Network down".into())));
        let mut out = Vec::new();
        let ok = run_once("hello".into(), &service, &mut out).await.unwrap();
        assert!(!ok);
        assert_eq!(String::from_utf8(out).unwrap(), "Error: Network down\n");
    }
}
