//! Base trait for store-held state.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq for detecting changes)
/// - Default (the value a freshly constructed store starts from)
pub trait State: Clone + PartialEq + Default + Send + 'static {}
