use std::path::Path;
use std::sync::Arc;
use log::info;
use mongodb::options::DatabaseOptions;
use mongodb::{Client, Database};
use parking_lot::RwLock;
use redis::aio::PubSub;
use sqlx::PgPool;
use crate::backend::enums::backend_kind::BackendKind;
use crate::cache::structs::pooled_connection::PooledConnection;
use crate::cache::structs::redis_pool::RedisPool;
use crate::config::enums::config_format::ConfigFormat;
use crate::registry::errors::RegistryError;
use crate::registry::structs::registry::Registry;
use crate::registry::structs::shared_registry::SharedRegistry;

impl Default for SharedRegistry {
    fn default() -> Self {
        SharedRegistry::init(Registry::empty())
    }
}

impl SharedRegistry {
    pub fn init(registry: Registry) -> SharedRegistry {
        SharedRegistry {
            current: Arc::new(RwLock::new(Arc::new(registry))),
        }
    }

    /// Replaces every table at once. Returns the snapshot that was active.
    pub fn reload(&self, registry: Registry) -> Arc<Registry> {
        let registry = Arc::new(registry);
        let previous = std::mem::replace(&mut *self.current.write(), registry);
        info!("[REGISTRY] Reloaded");
        previous
    }

    pub fn reload_from(&self, data: &[u8], format: ConfigFormat) -> Result<Arc<Registry>, RegistryError> {
        Ok(self.reload(Registry::load(data, format)?))
    }

    /// On a decode error the current snapshot stays in place.
    pub fn reload_file<P: AsRef<Path>>(&self, path: P) -> Result<Arc<Registry>, RegistryError> {
        Ok(self.reload(Registry::load_file(path)?))
    }

    pub fn current(&self) -> Arc<Registry> {
        self.current.read().clone()
    }

    pub fn ids(&self, kind: BackendKind) -> Vec<String> {
        self.current().ids(kind)
    }

    pub async fn redis_pool(&self, id: &str) -> Result<RedisPool, RegistryError> {
        self.current().redis_pool(id).await
    }

    pub fn redis_config(&self, id: &str) -> Result<String, RegistryError> {
        self.current().redis_config(id)
    }

    pub async fn redis_conn(&self, id: &str) -> Result<PooledConnection, RegistryError> {
        self.current().redis_conn(id).await
    }

    pub async fn redis_pubsub(&self, id: &str) -> Result<PubSub, RegistryError> {
        self.current().redis_pubsub(id).await
    }

    pub async fn pq(&self, id: &str) -> Result<PgPool, RegistryError> {
        self.current().pq(id).await
    }

    pub fn pq_config(&self, id: &str) -> Result<String, RegistryError> {
        self.current().pq_config(id)
    }

    pub async fn roach(&self, id: &str) -> Result<PgPool, RegistryError> {
        self.current().roach(id).await
    }

    pub fn roach_config(&self, id: &str) -> Result<String, RegistryError> {
        self.current().roach_config(id)
    }

    pub async fn mongo_client(&self, id: &str) -> Result<Client, RegistryError> {
        self.current().mongo_client(id).await
    }

    pub fn mongo_config(&self, id: &str) -> Result<String, RegistryError> {
        self.current().mongo_config(id)
    }

    pub async fn mongo_database(&self, id: &str, options: Option<DatabaseOptions>) -> Result<Database, RegistryError> {
        self.current().mongo_database(id, options).await
    }
}
