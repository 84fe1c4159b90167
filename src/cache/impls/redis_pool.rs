use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use log::debug;
use parking_lot::Mutex;
use redis::aio::{MultiplexedConnection, PubSub};
use tokio::sync::Semaphore;
use crate::cache::errors::PoolError;
use crate::cache::structs::pooled_connection::PooledConnection;
use crate::cache::structs::redis_pool::{IdleConnection, RedisPool, RedisPoolInner};
use crate::cache::structs::redis_pool_settings::RedisPoolSettings;

impl fmt::Debug for RedisPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisPool")
            .field("client", &"<redis::Client>")
            .field("settings", &self.inner.settings)
            .field("idle", &self.idle_count())
            .finish()
    }
}

impl RedisPool {
    /// Builds the pool without dialing.
    pub fn new(url: &str, settings: RedisPoolSettings) -> Result<RedisPool, PoolError> {
        let client = redis::Client::open(url)?;
        let active = (settings.max_active > 0).then(|| Arc::new(Semaphore::new(settings.max_active)));
        Ok(RedisPool {
            inner: Arc::new(RedisPoolInner {
                client,
                settings,
                idle: Mutex::new(VecDeque::new()),
                active,
            }),
        })
    }

    pub fn settings(&self) -> &RedisPoolSettings {
        &self.inner.settings
    }

    pub fn client(&self) -> &redis::Client {
        &self.inner.client
    }

    pub fn idle_count(&self) -> usize {
        self.inner.idle.lock().len()
    }

    /// Connections currently checked out; always zero for an unbounded pool.
    pub fn active_count(&self) -> usize {
        match &self.inner.active {
            Some(semaphore) => self.inner.settings.max_active - semaphore.available_permits(),
            None => 0,
        }
    }

    /// Checks out a connection, reusing an idle one when possible.
    ///
    /// With `max_active` reached this waits for a release when `wait` is set
    /// and fails with [`PoolError::Exhausted`] otherwise.
    pub async fn get(&self) -> Result<PooledConnection, PoolError> {
        let permit = match &self.inner.active {
            None => None,
            Some(semaphore) if self.inner.settings.wait => Some(
                semaphore.clone().acquire_owned().await.map_err(|_| PoolError::Closed)?,
            ),
            Some(semaphore) => Some(
                semaphore.clone().try_acquire_owned().map_err(|_| PoolError::Exhausted)?,
            ),
        };

        if let Some(idle) = self.inner.take_idle() {
            return Ok(PooledConnection {
                pool: self.inner.clone(),
                connection: idle.connection,
                created: idle.created,
                broken: false,
                _permit: permit,
            });
        }

        let connection = self.inner.dial().await?;
        Ok(PooledConnection {
            pool: self.inner.clone(),
            connection,
            created: Instant::now(),
            broken: false,
            _permit: permit,
        })
    }

    /// Dials a dedicated publish/subscribe connection. It is not counted
    /// against `max_active` and never returns to the pool.
    pub async fn pubsub(&self) -> Result<PubSub, PoolError> {
        let timeout = self.inner.settings.dial_timeout;
        match tokio::time::timeout(timeout, self.inner.client.get_async_pubsub()).await {
            Ok(pubsub) => Ok(pubsub?),
            Err(_) => Err(PoolError::DialTimeout(timeout)),
        }
    }
}

impl RedisPoolInner {
    pub(crate) async fn dial(&self) -> Result<MultiplexedConnection, PoolError> {
        let timeout = self.settings.dial_timeout;
        match tokio::time::timeout(timeout, self.client.get_multiplexed_async_connection()).await {
            Ok(connection) => Ok(connection?),
            Err(_) => Err(PoolError::DialTimeout(timeout)),
        }
    }

    pub(crate) fn take_idle(&self) -> Option<IdleConnection> {
        let now = Instant::now();
        let mut idle = self.idle.lock();
        while let Some(candidate) = idle.pop_back() {
            if !self.settings.is_stale(candidate.created, candidate.returned, now) {
                return Some(candidate);
            }
            debug!("[Redis] Discarding stale idle connection");
        }
        None
    }

    pub(crate) fn release(&self, connection: MultiplexedConnection, created: Instant, broken: bool) {
        let now = Instant::now();
        if !self.settings.is_reusable(broken, created, now) {
            if broken {
                debug!("[Redis] Closing broken connection");
            }
            return;
        }
        let mut idle = self.idle.lock();
        if idle.len() >= self.settings.max_idle {
            idle.pop_front();
        }
        idle.push_back(IdleConnection {
            connection,
            created,
            returned: now,
        });
    }
}
