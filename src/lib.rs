//! # dbconnect
//!
//! A registry of named connections to Redis, PostgreSQL, CockroachDB and
//! MongoDB, driven by one JSON or TOML document.
//!
//! ## Overview
//!
//! Each entry of the document is a named backend instance. The registry
//! indexes them by identifier and connects each one lazily: the first
//! caller pays for the connect, every later or concurrent caller gets the
//! same handle (or the same error). Nothing is retried; reloading the
//! registry is the way to start over.
//!
//! ## Features
//!
//! - **Lazy, exactly-once connect** per instance, safe under concurrent first access
//! - **Two lifecycles**: an owned `Registry`, or a cloneable `SharedRegistry` with reload
//! - **JSON and TOML** documents, picked by file extension
//! - **Environment placeholders** (`$NAME`, `${NAME}`) in string fields
//! - **Redacted logging** of connection strings through the `log` facade
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dbconnect::registry::structs::registry::Registry;
//!
//! let registry = Registry::load_file("databases.toml")?;
//! let pool = registry.pq("main").await?;
//! let cache = registry.redis_pool("sessions").await?;
//! let events = registry.mongo_database("docs", None).await?;
//! ```
//!
//! ## Modules
//!
//! - [`backend`] - Backend kinds, descriptors and the lazy connector
//! - [`cache`] - Redis settings and the connection pool handed out for them
//! - [`common`] - Placeholder expansion, URL encoding and redaction helpers
//! - [`config`] - Configuration document loading and saving
//! - [`database`] - PostgreSQL and CockroachDB settings
//! - [`document`] - MongoDB settings
//! - [`logging`] - `fern` based logger setup
//! - [`registry`] - Identifier lookup, accessors and reload

/// Backend kinds, the settings trait and the lazily connected descriptor.
pub mod backend;

/// Redis cache-store backend.
///
/// Builds a bounded pool of multiplexed async connections for each
/// configured instance; connections are dialed on checkout.
pub mod cache;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
///
/// Decodes the connection document from JSON or TOML into one in-memory
/// shape and writes it back out.
pub mod config;

/// PostgreSQL and CockroachDB backends, both served by `sqlx::PgPool`.
pub mod database;

/// MongoDB backend.
pub mod document;

/// Logger setup.
pub mod logging;

/// Identifier-indexed registry with per-kind accessors.
///
/// Offers an instance-scoped `Registry` and a process-wide
/// `SharedRegistry` whose snapshot can be reloaded.
pub mod registry;
