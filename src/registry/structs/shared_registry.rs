use std::sync::Arc;
use parking_lot::RwLock;
use crate::registry::structs::registry::Registry;

/// Cloneable handle to a registry that can be swapped at runtime.
///
/// Clones share the same snapshot. Readers take an `Arc` of the current
/// snapshot, so a reload never invalidates a lookup already in flight.
#[derive(Debug, Clone)]
pub struct SharedRegistry {
    pub(crate) current: Arc<RwLock<Arc<Registry>>>,
}
