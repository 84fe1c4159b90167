//! Common utilities and shared functionality.
//!
//! Helpers used by every backend: environment placeholder expansion,
//! password redaction for logged connection strings and serde predicates.

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
