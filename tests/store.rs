use std::thread;

use tally::counter::{CounterAction, CounterReducer};
use tally::flux::{SharedStore, Store};

#[test]
fn fresh_store_starts_at_zero() {
    let store = Store::<CounterReducer>::new();
    assert_eq!(store.state().value(), 0);
}

#[test]
fn state_is_stable_without_dispatch() {
    let mut store = Store::<CounterReducer>::new();
    store.dispatch(CounterAction::Increment { amount: 5 });
    assert_eq!(store.state().value(), 5);
    assert_eq!(store.state().value(), 5);
    assert_eq!(store.state().value(), 5);
}

#[test]
fn dispatch_folds_actions_in_order() {
    let actions = [
        CounterAction::Increment { amount: 3 },
        CounterAction::Decrement { amount: 1 },
        CounterAction::Increment { amount: 10 },
        CounterAction::Decrement { amount: 7 },
    ];

    let mut store = Store::<CounterReducer>::new();
    let mut expected = 0i64;
    for action in actions {
        store.dispatch(action);
        expected = match action {
            CounterAction::Increment { amount } => expected + amount,
            CounterAction::Decrement { amount } => expected - amount,
        };
        assert_eq!(store.state().value(), expected);
    }
    assert_eq!(store.state().value(), 5);
}

#[test]
fn stores_do_not_share_state() {
    let mut a = Store::<CounterReducer>::new();
    let mut b = Store::<CounterReducer>::new();

    a.dispatch(CounterAction::Increment { amount: 100 });
    assert_eq!(b.state().value(), 0);

    b.dispatch(CounterAction::Decrement { amount: 1 });
    assert_eq!(a.state().value(), 100);
    assert_eq!(b.state().value(), -1);
}

#[test]
fn shared_store_survives_concurrent_dispatches() {
    let store = SharedStore::<CounterReducer>::new();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    store.dispatch(CounterAction::Increment { amount: 1 });
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("dispatch thread panicked");
    }

    assert_eq!(store.state().value(), 400);
}
