//! Actions accepted by the counter reducer.

use crate::flux::Action;

/// The closed set of mutations the counter understands.
///
/// Tags outside this set never reach the reducer; the envelope layer drops
/// (or, in strict mode, rejects) them before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    /// Add `amount` to the counter.
    Increment { amount: i64 },

    /// Subtract `amount` from the counter.
    Decrement { amount: i64 },
}

impl Action for CounterAction {}
