//! Descriptor structures.

/// Descriptor with its one-shot handle slot.
pub mod descriptor;
