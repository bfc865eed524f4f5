use std::time::Instant;

use crate::analysis::{AnalysisError, AnalysisResult};
use crate::ui::page::{PendingSubmission, RequestController};

pub struct App {
    should_quit: bool,
    controller: RequestController,
    endpoint: String,
    /// Spinner frame counter.
    animation_tick: u8,
}

impl App {
    pub fn new(controller: RequestController, endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            controller,
            endpoint: endpoint.into(),
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn controller(&self) -> &RequestController {
        &self.controller
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.controller.state().is_loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
        self.controller.toasts_mut().expire(now);
    }

    pub fn on_char(&mut self, ch: char) {
        self.controller.insert_char(ch);
    }

    pub fn on_newline(&mut self) {
        self.controller.insert_char('\n');
    }

    pub fn on_backspace(&mut self) {
        self.controller.delete_backward();
    }

    pub fn on_paste(&mut self, text: &str) {
        self.controller.insert_str(text);
    }

    pub fn clear_text(&mut self) {
        self.controller.set_text(String::new());
    }

    pub fn dismiss_toasts(&mut self) {
        self.controller.toasts_mut().dismiss_all();
    }

    /// Submit the current text. Loading does not block a new submission.
    pub fn submit(&mut self) -> Option<PendingSubmission> {
        let pending = self.controller.begin_submit();
        if pending.is_some() {
            self.animation_tick = 0;
        }
        pending
    }

    pub fn on_analysis_finished(
        &mut self,
        generation: u64,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) {
        self.controller.complete(generation, outcome);
    }
}
