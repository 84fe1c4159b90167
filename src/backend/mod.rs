//! Backend descriptor and lazy connector.
//!
//! Every configured instance is held in a [`structs::descriptor::Descriptor`],
//! generic over the backend's settings type. The descriptor owns a one-shot
//! gate: the first caller of `ensure_connected` expands placeholders,
//! validates, applies defaults, builds the connection string and calls the
//! client library; every other caller, concurrent or later, gets the same
//! recorded outcome.
//!
//! # Architecture
//!
//! - `BackendSettings` trait: the per-kind capability (validation, defaults,
//!   connection string, client call)
//! - `Descriptor<S>`: settings plus the gated handle slot
//! - `ConnectError`: the cached failure outcome
//!
//! # Example
//!
//! ```rust,ignore
//! use dbconnect::backend::structs::descriptor::Descriptor;
//!
//! let descriptor = Descriptor::new(pq_config, true);
//! let pool = descriptor.ensure_connected().await?;
//! ```

/// Backend kind enumeration (redis, pq, cockroachdb, mongo).
pub mod enums;

/// Error types for connect attempts.
pub mod errors;

/// Implementation blocks for descriptors.
pub mod impls;

/// Descriptor data structures.
pub mod structs;

/// Backend capability trait definitions.
pub mod traits;

#[cfg(test)]
mod tests;
