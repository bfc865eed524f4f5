//! Reducer for the analysis page.

use crate::ui::mvi::Reducer;

use super::intent::PageIntent;
use super::state::{AnalysisPageState, SubmissionState};

/// Submission lifecycle transitions.
///
/// Pure: the HTTP call and notifications are handled by the controller
/// around the dispatch.
pub struct PageReducer;

impl Reducer for PageReducer {
    type State = AnalysisPageState;
    type Intent = PageIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PageIntent::TextChanged { text } => {
                state.text = text;
                state.validation_error = None;
            }

            PageIntent::SubmitRequested => {
                state.validation_error = None;
                state.submission = match state.submission {
                    validating @ SubmissionState::Validating { .. } => validating,
                    previous => SubmissionState::Validating {
                        previous: Box::new(previous),
                    },
                };
            }

            PageIntent::ValidationFailed { error } => {
                state.validation_error = Some(error);
                if let SubmissionState::Validating { previous } = state.submission {
                    state.submission = *previous;
                }
            }

            PageIntent::RequestStarted => {
                // Dropping the previous state here also drops any old result.
                state.submission = SubmissionState::InFlight;
                state.generation = state.generation.wrapping_add(1);
            }

            PageIntent::RequestSucceeded { generation, result } => {
                if state.accepts(generation) {
                    state.submission = SubmissionState::Succeeded(result);
                }
            }

            PageIntent::RequestFailed { generation, reason } => {
                if state.accepts(generation) {
                    state.submission = SubmissionState::Failed { reason };
                }
            }
        }
        state
    }
}
