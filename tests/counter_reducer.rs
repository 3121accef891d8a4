use tally::counter::{CounterAction, CounterReducer, CounterState};
use tally::flux::Reducer;

#[test]
fn increment_from_zero() {
    let state = CounterReducer::reduce(
        CounterState::default(),
        CounterAction::Increment { amount: 3 },
    );
    assert_eq!(state.value(), 3);
}

#[test]
fn increment_accumulates() {
    let state = CounterState::default();
    let state = CounterReducer::reduce(state, CounterAction::Increment { amount: 3 });
    let state = CounterReducer::reduce(state, CounterAction::Increment { amount: 3 });
    assert_eq!(state.value(), 6);
}

#[test]
fn decrement_goes_below_zero() {
    let state = CounterReducer::reduce(
        CounterState::default(),
        CounterAction::Decrement { amount: 4 },
    );
    assert_eq!(state.value(), -4);
}

#[test]
fn walkthrough_sequence() {
    // INCREMENT:3, INCREMENT:3, DECREMENT:4 observes 3, 6, 2.
    let state = CounterState::default();
    let state = CounterReducer::reduce(state, CounterAction::Increment { amount: 3 });
    assert_eq!(state.value(), 3);
    let state = CounterReducer::reduce(state, CounterAction::Increment { amount: 3 });
    assert_eq!(state.value(), 6);
    let state = CounterReducer::reduce(state, CounterAction::Decrement { amount: 4 });
    assert_eq!(state.value(), 2);
}

#[test]
fn reduce_is_deterministic() {
    let a = CounterReducer::reduce(
        CounterState::default(),
        CounterAction::Increment { amount: 17 },
    );
    let b = CounterReducer::reduce(
        CounterState::default(),
        CounterAction::Increment { amount: 17 },
    );
    assert_eq!(a, b);
}

#[test]
fn increment_and_decrement_cancel() {
    let state = CounterState::default();
    let state = CounterReducer::reduce(state, CounterAction::Increment { amount: 9 });
    let state = CounterReducer::reduce(state, CounterAction::Decrement { amount: 9 });
    assert_eq!(state.value(), 0);
}
