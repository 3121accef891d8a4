//! Unidirectional-data-flow primitives.
//!
//! This module provides the base traits and the store container for
//! reducer-driven state management.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State
//!    ↑                     │
//!    └───── dispatch ──────┘
//! ```
//!
//! - **State**: immutable value held privately by a [`Store`]
//! - **Action**: a discrete request to change state
//! - **Reducer**: pure function that transforms state based on actions

mod action;
mod reducer;
mod state;
mod store;

pub use action::Action;
pub use reducer::Reducer;
pub use state::State;
pub use store::{SharedStore, Store};
