//! Backend enumeration types.

/// Supported backend kinds.
pub mod backend_kind;
