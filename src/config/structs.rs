//! Configuration data structures.
//!
//! Each backend kind has its own settings struct; the root `Configuration`
//! holds one list per kind in document order.

/// Root configuration structure containing all backend sections.
pub mod configuration;

/// Redis (cache-store) connection settings.
pub mod redis_config;

/// PostgreSQL (relational) connection settings.
pub mod pq_config;

/// CockroachDB (distributed-SQL) connection settings.
pub mod roach_config;

/// CockroachDB `options` startup parameters.
pub mod roach_options;

/// MongoDB (document-store) connection settings.
pub mod mongo_config;
