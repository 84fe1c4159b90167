use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoolError {
    #[error("connection pool exhausted")]
    Exhausted,

    #[error("connection pool closed")]
    Closed,

    #[error("dial timed out after {0:?}")]
    DialTimeout(Duration),

    #[error("command timed out after {0:?}")]
    CommandTimeout(Duration),

    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),
}
