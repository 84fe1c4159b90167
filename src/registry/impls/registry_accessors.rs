use log::info;
use mongodb::options::DatabaseOptions;
use mongodb::{Client, Database};
use redis::aio::PubSub;
use sqlx::PgPool;
use crate::backend::traits::backend_settings::BackendSettings;
use crate::cache::structs::pooled_connection::PooledConnection;
use crate::cache::structs::redis_pool::RedisPool;
use crate::registry::errors::RegistryError;
use crate::registry::impls::registry::find;
use crate::registry::structs::registry::Registry;

impl Registry {
    pub async fn redis_pool(&self, id: &str) -> Result<RedisPool, RegistryError> {
        Ok(find(&self.redis, id)?.ensure_connected().await?)
    }

    pub fn redis_config(&self, id: &str) -> Result<String, RegistryError> {
        self.encode(find(&self.redis, id)?)
    }

    /// Checks a connection out of the pool. Drop it once done; it goes back
    /// to the pool and frees its slot.
    pub async fn redis_conn(&self, id: &str) -> Result<PooledConnection, RegistryError> {
        let connection = self.redis_pool(id).await?.get().await?;
        info!("[Redis] Handed out a connection for {}, drop it after your work is done", id);
        Ok(connection)
    }

    pub async fn redis_pubsub(&self, id: &str) -> Result<PubSub, RegistryError> {
        Ok(self.redis_pool(id).await?.pubsub().await?)
    }

    pub async fn pq(&self, id: &str) -> Result<PgPool, RegistryError> {
        Ok(find(&self.pq, id)?.ensure_connected().await?)
    }

    pub fn pq_config(&self, id: &str) -> Result<String, RegistryError> {
        self.encode(find(&self.pq, id)?)
    }

    pub async fn roach(&self, id: &str) -> Result<PgPool, RegistryError> {
        Ok(find(&self.cockroachdb, id)?.ensure_connected().await?)
    }

    pub fn roach_config(&self, id: &str) -> Result<String, RegistryError> {
        self.encode(find(&self.cockroachdb, id)?)
    }

    pub async fn mongo_client(&self, id: &str) -> Result<Client, RegistryError> {
        Ok(find(&self.mongo, id)?.ensure_connected().await?)
    }

    pub fn mongo_config(&self, id: &str) -> Result<String, RegistryError> {
        self.encode(find(&self.mongo, id)?)
    }

    /// Database named by the descriptor's `db`, on its shared client. An
    /// empty name is rejected before any connect.
    pub async fn mongo_database(&self, id: &str, options: Option<DatabaseOptions>) -> Result<Database, RegistryError> {
        let descriptor = find(&self.mongo, id)?;
        let resolved = descriptor.prepare()?;
        if resolved.db.is_empty() {
            return Err(resolved.validation_error("empty database name").into());
        }
        let client = descriptor.ensure_connected().await?;
        Ok(match options {
            Some(options) => client.database_with_options(&resolved.db, options),
            None => client.database(&resolved.db),
        })
    }
}
