//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use sentiview::analysis::{AnalysisError, AnalysisRequest, AnalysisResult, AnalysisService};
use sentiview::notify::ToastQueue;
use sentiview::ui::page::RequestController;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// In-memory analysis service that replays scripted outcomes and records
/// every request it receives.
#[derive(Default)]
pub struct FakeService {
    outcomes: Mutex<VecDeque<Result<AnalysisResult, AnalysisError>>>,
    requests: Mutex<Vec<AnalysisRequest>>,
}

impl FakeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning(outcome: Result<AnalysisResult, AnalysisError>) -> Self {
        let service = Self::new();
        service.push(outcome);
        service
    }

    pub fn push(&self, outcome: Result<AnalysisResult, AnalysisError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn requests(&self) -> Vec<AnalysisRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl AnalysisService for FakeService {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AnalysisError::Transport("no scripted outcome".into())))
    }
}

/// Controller whose toast queue keeps everything long enough to inspect.
pub fn make_controller() -> RequestController {
    RequestController::new(ToastQueue::new(16, Duration::from_secs(600)))
}

pub fn positive_result() -> AnalysisResult {
    AnalysisResult::new("Positive", "The user expresses strong approval.")
}
