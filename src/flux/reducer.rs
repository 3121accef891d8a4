//! Reducer trait.

use super::action::Action;
use super::state::State;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The action type this reducer handles.
    type Action: Action;

    /// Compute the successor state for an action.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
