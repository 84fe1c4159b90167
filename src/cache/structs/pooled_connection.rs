use std::sync::Arc;
use std::time::Instant;
use redis::aio::MultiplexedConnection;
use tokio::sync::OwnedSemaphorePermit;
use crate::cache::structs::redis_pool::RedisPoolInner;

/// A connection checked out of a [`crate::cache::structs::redis_pool::RedisPool`].
///
/// The caller owns it until it is dropped; dropping returns it to the pool
/// and frees its `max_active` slot. A connection whose command failed or
/// timed out is marked broken and closed on drop instead.
pub struct PooledConnection {
    pub(crate) pool: Arc<RedisPoolInner>,
    pub(crate) connection: MultiplexedConnection,
    pub(crate) created: Instant,
    pub(crate) broken: bool,
    pub(crate) _permit: Option<OwnedSemaphorePermit>,
}
