//! Backend trait definitions.

/// Capability interface implemented once per backend kind.
pub mod backend_settings;
