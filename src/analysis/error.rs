use thiserror::Error;

/// Inline message for blank input.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to analyze";

/// Reason reported for any non-2xx response.
pub const SERVER_REJECTED_MESSAGE: &str = "Failed to get analysis from server";

/// Reason reported when a failure carries no message of its own.
pub const FALLBACK_FAILURE_MESSAGE: &str =
    "Failed to analyze text. Please check your connection and try again.";

/// Local input validation failure. Rendered inline, never notified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter some text to analyze")]
    EmptyInput,
}

/// Failure of a submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The request never produced a response (connect, TLS, body read).
    #[error("{0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Failed to get analysis from server")]
    ServerRejected { status: u16 },

    /// 2xx status but the body is not a valid result payload.
    #[error("{0}")]
    MalformedResponse(String),
}

impl AnalysisError {
    /// User-facing reason stored in the failed state and shown in the toast.
    pub fn reason(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        AnalysisError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_matches_constant() {
        assert_eq!(ValidationError::EmptyInput.to_string(), EMPTY_INPUT_MESSAGE);
    }

    #[test]
    fn transport_reason_is_the_message() {
        let err = AnalysisError::Transport("Network down".into());
        assert_eq!(err.reason(), "Network down");
    }

    #[test]
    fn server_rejection_uses_fixed_message() {
        let err = AnalysisError::ServerRejected { status: 500 };
        assert_eq!(err.reason(), SERVER_REJECTED_MESSAGE);
        let err = AnalysisError::ServerRejected { status: 404 };
        assert_eq!(err.reason(), SERVER_REJECTED_MESSAGE);
    }

    #[test]
    fn empty_message_falls_back() {
        assert_eq!(
            AnalysisError::Transport(String::new()).reason(),
            FALLBACK_FAILURE_MESSAGE
        );
        assert_eq!(
            AnalysisError::MalformedResponse("  ".into()).reason(),
            FALLBACK_FAILURE_MESSAGE
        );
    }

    #[test]
    fn json_errors_become_malformed() {
        let err: AnalysisError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }
}
