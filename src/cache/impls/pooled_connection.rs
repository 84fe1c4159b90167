use std::fmt;
use std::ops::{Deref, DerefMut};
use redis::aio::MultiplexedConnection;
use redis::FromRedisValue;
use crate::cache::errors::PoolError;
use crate::cache::structs::pooled_connection::PooledConnection;

impl fmt::Debug for PooledConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PooledConnection")
            .field("connection", &"<redis::aio::MultiplexedConnection>")
            .field("age", &self.created.elapsed())
            .field("bounded", &self._permit.is_some())
            .field("broken", &self.broken)
            .finish()
    }
}

impl PooledConnection {
    /// Runs a command bounded by the pool's read plus write timeout.
    pub async fn query<T: FromRedisValue>(&mut self, cmd: &redis::Cmd) -> Result<T, PoolError> {
        let timeout = self.pool.settings.command_timeout;
        let result = match tokio::time::timeout(timeout, cmd.query_async::<T>(&mut self.connection)).await {
            Ok(result) => result.map_err(PoolError::from),
            Err(_) => Err(PoolError::CommandTimeout(timeout)),
        };
        if result.is_err() {
            self.mark_broken();
        }
        result
    }

    /// Keeps the connection out of the idle list once dropped. Call it after
    /// a failed command issued through the raw connection.
    pub fn mark_broken(&mut self) {
        self.broken = true;
    }

    pub fn is_broken(&self) -> bool {
        self.broken
    }

    pub async fn ping(&mut self) -> Result<(), PoolError> {
        self.query::<String>(&redis::cmd("PING")).await?;
        Ok(())
    }
}

impl Deref for PooledConnection {
    type Target = MultiplexedConnection;

    fn deref(&self) -> &Self::Target {
        &self.connection
    }
}

impl DerefMut for PooledConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.connection
    }
}

impl Drop for PooledConnection {
    fn drop(&mut self) {
        self.pool.release(self.connection.clone(), self.created, self.broken);
    }
}
