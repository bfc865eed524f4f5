//! The analysis page: text input, submission lifecycle, result card.
//!
//! MVI layout:
//! - `state.rs` - page and submission state
//! - `intent.rs` - edits, submit, request outcomes
//! - `reducer.rs` - state transitions
//! - `view.rs` - rendering
//! - `controller.rs` - validation, the network call and toasts around the reducer

mod controller;
mod intent;
mod reducer;
mod state;
mod view;

pub use controller::{PendingSubmission, RequestController};
pub use intent::PageIntent;
pub use reducer::PageReducer;
pub use state::{AnalysisPageState, SubmissionState};
pub use view::render_page;
