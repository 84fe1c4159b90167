//! Implementation blocks for backend types.

/// BackendKind implementation: Display and labels.
pub mod backend_kind;

/// Descriptor implementation: the lazy connector.
pub mod descriptor;
