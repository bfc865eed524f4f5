//! Intents for the analysis page.

use crate::analysis::{AnalysisResult, ValidationError};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PageIntent {
    /// The input text was edited.
    TextChanged { text: String },

    /// Submit was triggered. Clears the inline error and starts validation.
    SubmitRequested,

    /// Validation rejected the input.
    ValidationFailed { error: ValidationError },

    /// Validation passed and the request is about to be sent.
    RequestStarted,

    /// The endpoint returned a result for `generation`.
    RequestSucceeded {
        generation: u64,
        result: AnalysisResult,
    },

    /// The call for `generation` failed.
    RequestFailed { generation: u64, reason: String },
}

impl Intent for PageIntent {}
