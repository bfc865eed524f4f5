use crate::analysis::{validate, AnalysisError, AnalysisRequest, AnalysisResult, AnalysisService};
use crate::notify::{Notification, ToastQueue};
use crate::ui::mvi::Reducer;
use crate::ui::presentation::{map_sentiment, SentimentPresentation};

use super::intent::PageIntent;
use super::reducer::PageReducer;
use super::state::AnalysisPageState;

/// A request accepted by [`RequestController::begin_submit`] and not yet
/// completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub generation: u64,
    pub request: AnalysisRequest,
    /// Generation of the in-flight request this one replaces, if any.
    pub superseded: Option<u64>,
}

/// Owns the page state and drives one submission at a time through it.
///
/// Overlapping submissions are allowed. Each accepted submit supersedes the
/// previous one, and a completion for a superseded submission is dropped
/// without touching state or raising a toast.
pub struct RequestController {
    state: AnalysisPageState,
    toasts: ToastQueue,
}

impl RequestController {
    pub fn new(toasts: ToastQueue) -> Self {
        Self {
            state: AnalysisPageState::default(),
            toasts,
        }
    }

    pub fn state(&self) -> &AnalysisPageState {
        &self.state
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastQueue {
        &mut self.toasts
    }

    /// Display configuration for the stored result, if there is one.
    pub fn presentation(&self) -> Option<SentimentPresentation> {
        self.state
            .result()
            .map(|result| map_sentiment(result.sentiment()))
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.dispatch(PageIntent::TextChanged { text: text.into() });
    }

    pub fn insert_str(&mut self, fragment: &str) {
        let mut text = self.state.text.clone();
        text.push_str(fragment);
        self.set_text(text);
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut text = self.state.text.clone();
        text.push(ch);
        self.set_text(text);
    }

    pub fn delete_backward(&mut self) {
        let mut text = self.state.text.clone();
        if text.pop().is_some() {
            self.set_text(text);
        }
    }

    /// Validate the current text and, if it passes, move to `InFlight`.
    ///
    /// Returns the request to send, or `None` when validation failed. A
    /// validation failure leaves the submission state as it was and raises
    /// no notification.
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        // Read before dispatch: `SubmitRequested` wraps `InFlight` in `Validating`.
        let superseded = self.state.is_loading().then_some(self.state.generation);
        self.dispatch(PageIntent::SubmitRequested);

        if let Err(error) = validate(&self.state.text) {
            tracing::debug!("Submission rejected: {}", error);
            self.dispatch(PageIntent::ValidationFailed { error });
            return None;
        }

        if let Some(generation) = superseded {
            tracing::info!(
                superseded = generation,
                "Submitting while a request is in flight"
            );
        }
        self.dispatch(PageIntent::RequestStarted);

        let pending = PendingSubmission {
            generation: self.state.generation,
            request: AnalysisRequest::new(self.state.text.clone()),
            superseded,
        };
        tracing::info!(
            generation = pending.generation,
            chars = pending.request.text.chars().count(),
            "Submitting text for analysis"
        );
        Some(pending)
    }

    /// Apply the outcome of the request tagged `generation`.
    ///
    /// Returns `false` when the outcome was stale and ignored.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) -> bool {
        if !self.state.accepts(generation) {
            tracing::debug!(
                generation,
                current = self.state.generation,
                "Dropping stale analysis outcome"
            );
            return false;
        }

        match outcome {
            Ok(result) => {
                tracing::info!(generation, sentiment = ?result.sentiment(), "Analysis complete");
                self.dispatch(PageIntent::RequestSucceeded { generation, result });
                self.toasts.push(Notification::analysis_complete());
            }
            Err(error) => {
                let reason = error.reason();
                tracing::warn!(generation, error = ?error, "Analysis failed");
                self.dispatch(PageIntent::RequestFailed {
                    generation,
                    reason: reason.clone(),
                });
                self.toasts.push(Notification::analysis_failed(reason));
            }
        }
        true
    }

    /// Run one full submission against `service`.
    ///
    /// Returns `true` when the call was made and ended in `Succeeded`.
    pub async fn submit(&mut self, service: &dyn AnalysisService) -> bool {
        let Some(pending) = self.begin_submit() else {
            return false;
        };
        let outcome = service.analyze(&pending.request).await;
        let succeeded = outcome.is_ok();
        self.complete(pending.generation, outcome) && succeeded
    }

    fn dispatch(&mut self, intent: PageIntent) {
        self.state = PageReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}

impl Default for RequestController {
    fn default() -> Self {
        Self::new(ToastQueue::default())
    }
}
