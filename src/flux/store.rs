//! Store container: private state, mutated only through dispatch.

use std::marker::PhantomData;
use std::sync::{Arc, RwLock};

use super::reducer::Reducer;

/// Holds one value of `R::State`, readable through [`Store::state`] and
/// replaceable only through [`Store::dispatch`].
///
/// The reducer is fixed by the type parameter at construction time. The
/// state field is private; nothing outside this type can assign to it.
/// Each instance is independent, so any number of stores with separate
/// lifetimes may coexist.
pub struct Store<R: Reducer> {
    state: R::State,
    _reducer: PhantomData<R>,
}

impl<R: Reducer> Store<R> {
    /// Fresh store holding `R::State::default()`.
    pub fn new() -> Self {
        Self {
            state: R::State::default(),
            _reducer: PhantomData,
        }
    }

    /// Current state. Stable between dispatches.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Run the reducer and replace the stored state with its output.
    ///
    /// Synchronous: the replacement completes before this returns, and
    /// exactly one replacement happens per call.
    pub fn dispatch(&mut self, action: R::Action) {
        self.state = R::reduce(std::mem::take(&mut self.state), action);
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clone-able handle to a store shared between threads.
///
/// The plain [`Store`] assumes a single caller; this wrapper serializes
/// concurrent dispatches through a write lock. Reads return a snapshot
/// rather than a reference so the lock is never held by callers.
pub struct SharedStore<R: Reducer> {
    inner: Arc<RwLock<Store<R>>>,
}

impl<R: Reducer> Clone for SharedStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> SharedStore<R> {
    /// Fresh shared store holding `R::State::default()`.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Store::new())),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.inner.read().expect("store lock poisoned").state().clone()
    }

    /// Dispatch through the write lock.
    pub fn dispatch(&self, action: R::Action) {
        self.inner
            .write()
            .expect("store lock poisoned")
            .dispatch(action);
    }
}

impl<R: Reducer> Default for SharedStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
