//! Reducer for the counter store.

use crate::flux::Reducer;

use super::action::CounterAction;
use super::state::CounterState;

/// Reducer for counter state transitions.
///
/// Pure function — printing and logging happen at the call site, never here.
/// Arithmetic wraps on overflow.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            CounterAction::Increment { amount } => {
                CounterState::with_value(state.value().wrapping_add(amount))
            }
            CounterAction::Decrement { amount } => {
                CounterState::with_value(state.value().wrapping_sub(amount))
            }
        }
    }
}
