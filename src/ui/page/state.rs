//! State of the analysis page.

use crate::analysis::{AnalysisResult, ValidationError};
use crate::ui::mvi::UiState;

/// Where the current submission stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// Input is being checked. Remembers what to fall back to if it fails.
    Validating { previous: Box<SubmissionState> },

    /// Waiting on the analysis endpoint.
    InFlight,

    /// The latest submission returned a result.
    Succeeded(AnalysisResult),

    /// The latest submission failed.
    Failed { reason: String },
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    /// Short label for the header.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Ready",
            Self::Validating { .. } => "Checking",
            Self::InFlight => "Analyzing",
            Self::Succeeded(_) => "Done",
            Self::Failed { .. } => "Failed",
        }
    }
}

/// Everything the controller owns for one page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisPageState {
    /// Text being edited.
    pub text: String,
    pub submission: SubmissionState,
    pub validation_error: Option<ValidationError>,
    /// Bumped on every submission that passes validation. Completions tagged
    /// with an older value are stale.
    pub generation: u64,
}

impl UiState for AnalysisPageState {}

impl AnalysisPageState {
    pub fn is_loading(&self) -> bool {
        self.submission.is_in_flight()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.submission.result()
    }

    pub fn validation_message(&self) -> Option<String> {
        self.validation_error.as_ref().map(ToString::to_string)
    }

    /// True when a completion for `generation` should still be applied.
    pub fn accepts(&self, generation: u64) -> bool {
        self.is_loading() && self.generation == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_default() {
        let state = AnalysisPageState::default();
        assert_eq!(state.submission, SubmissionState::Idle);
        assert!(state.text.is_empty());
        assert!(state.validation_error.is_none());
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn result_only_when_succeeded() {
        let ok = SubmissionState::Succeeded(AnalysisResult::new("Positive", "Good"));
        assert_eq!(ok.result().map(|r| r.sentiment()), Some("Positive"));
        assert!(SubmissionState::InFlight.result().is_none());
        assert!(SubmissionState::Failed { reason: "x".into() }.result().is_none());
    }

    #[test]
    fn failure_reason_only_when_failed() {
        assert_eq!(
            SubmissionState::Failed { reason: "boom".into() }.failure_reason(),
            Some("boom")
        );
        assert_eq!(SubmissionState::Idle.failure_reason(), None);
    }

    #[test]
    fn accepts_requires_loading_and_matching_generation() {
        let mut state = AnalysisPageState {
            submission: SubmissionState::InFlight,
            generation: 2,
            ..Default::default()
        };
        assert!(state.accepts(2));
        assert!(!state.accepts(1));

        state.submission = SubmissionState::Idle;
        assert!(!state.accepts(2));
    }

    #[test]
    fn validation_message_renders_error() {
        let state = AnalysisPageState {
            validation_error: Some(ValidationError::EmptyInput),
            ..Default::default()
        };
        assert_eq!(
            state.validation_message().as_deref(),
            Some("Please enter some text to analyze")
        );
    }
}
