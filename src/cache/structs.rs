//! Redis pool structures.

/// Connection pool handed out as the cache-store handle.
pub mod redis_pool;

/// Pool limits and timeouts derived from the resolved settings.
pub mod redis_pool_settings;

/// Connection checked out of the pool.
pub mod pooled_connection;
