//! Redis cache-store backend.
//!
//! The handle for a `redis` descriptor is a [`structs::redis_pool::RedisPool`]:
//! a bounded pool of multiplexed async connections with the sizing knobs
//! of the configuration document (`max_active`, `max_idle`, `wait`,
//! `idle_timeout_mins`, `max_conn_lifetime_seconds`). Building the pool does
//! not dial; connections are dialed on checkout.
//!
//! # Side channels
//!
//! - `RedisPool::get` checks out a [`structs::pooled_connection::PooledConnection`];
//!   dropping it hands the connection back to the pool.
//! - `RedisPool::pubsub` dials a dedicated publish/subscribe connection that
//!   the pool does not track.
//!
//! # Example
//!
//! ```rust,ignore
//! let pool = registry.redis_pool("cache").await?;
//! let mut conn = pool.get().await?;
//! let pong: String = conn.query(&redis::cmd("PING")).await?;
//! ```

/// Error types for pool operations.
pub mod errors;

/// Implementation blocks for the pool and the redis settings.
pub mod impls;

/// Data structures for pooled connections.
pub mod structs;
