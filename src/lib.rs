//! Terminal client for a remote sentiment-analysis service.
//!
//! The [`ui::page::RequestController`] owns the submission lifecycle and the
//! [`ui::presentation`] module maps returned labels to display colors. Both the
//! interactive TUI and the one-shot mode drive the same controller.

pub mod analysis;
pub mod config;
pub mod logging;
pub mod notify;
pub mod oneshot;
pub mod ui;
