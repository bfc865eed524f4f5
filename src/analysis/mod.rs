//! Submission lifecycle against the remote analysis endpoint.
//!
//! - `types.rs` - request/response payloads
//! - `error.rs` - validation and analysis failures
//! - `client.rs` - service seam and the HTTP implementation
//! - `validation.rs` - local input checks

mod client;
mod error;
mod types;
mod validation;

pub use client::{AnalysisService, HttpAnalysisClient};
pub use validation::validate;
pub use error::{
    AnalysisError, ValidationError, EMPTY_INPUT_MESSAGE, FALLBACK_FAILURE_MESSAGE,
    SERVER_REJECTED_MESSAGE,
};
pub use types::{AnalysisRequest, AnalysisResult};
