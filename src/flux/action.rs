//! Base trait for actions dispatched to a store.

/// Marker trait for action objects.
///
/// Actions describe a mutation without performing it. They are constructed
/// by the caller, handed to [`Store::dispatch`](super::Store::dispatch), and
/// consumed by the reducer; the store does not retain them afterwards.
pub trait Action: Send + 'static {}
