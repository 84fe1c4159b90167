use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use parking_lot::Mutex;
use redis::aio::MultiplexedConnection;
use tokio::sync::Semaphore;
use crate::cache::structs::redis_pool_settings::RedisPoolSettings;

#[derive(Clone)]
pub struct RedisPool {
    pub(crate) inner: Arc<RedisPoolInner>,
}

pub struct RedisPoolInner {
    pub(crate) client: redis::Client,
    pub(crate) settings: RedisPoolSettings,
    pub(crate) idle: Mutex<VecDeque<IdleConnection>>,
    pub(crate) active: Option<Arc<Semaphore>>,
}

pub struct IdleConnection {
    pub(crate) connection: MultiplexedConnection,
    pub(crate) created: Instant,
    pub(crate) returned: Instant,
}
