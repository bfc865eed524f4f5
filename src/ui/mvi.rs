//! Model-View-Intent primitives.
//!
//! ```text
//! key / network event ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Reducers are pure. Side effects (HTTP calls, toasts) happen in the caller
//! around the dispatch.

/// Snapshot of everything a view needs to paint itself.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// A user action or a system event fed to a reducer.
pub trait Intent: Send + 'static {}

/// The only place state transitions happen: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
