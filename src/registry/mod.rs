//! Identifier-indexed registry of lazily connected backends.
//!
//! A [`structs::registry::Registry`] is built from one configuration
//! document. Every entry of every section becomes a
//! [`crate::backend::structs::descriptor::Descriptor`] keyed by its `id`;
//! nothing is dialed until an accessor asks for the instance.
//!
//! Two lifecycles are offered:
//!
//! - **Instance-scoped**: own a `Registry` value. Several can coexist, each
//!   with its own handles.
//! - **Process-wide**: share a [`structs::shared_registry::SharedRegistry`]
//!   between the parts of a program. `reload` swaps the whole snapshot;
//!   handles obtained before the swap remain usable.
//!
//! # Example
//!
//! ```rust,ignore
//! use dbconnect::registry::structs::shared_registry::SharedRegistry;
//!
//! let registry = SharedRegistry::default();
//! registry.reload_file("databases.toml")?;
//! let pool = registry.pq("main").await?;
//! let row: (i64,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await?;
//! ```

/// Borrowed view of one descriptor, whatever its kind.
pub mod enums;

/// Error types for registry lookups.
pub mod errors;

/// Implementation blocks for lookup, accessors and reload.
pub mod impls;

/// Registry data structures.
pub mod structs;
