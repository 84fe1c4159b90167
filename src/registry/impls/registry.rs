use std::path::Path;
use ahash::AHashMap;
use log::{debug, info};
use crate::backend::enums::backend_kind::BackendKind;
use crate::backend::structs::descriptor::Descriptor;
use crate::backend::traits::backend_settings::BackendSettings;
use crate::config::enums::config_format::ConfigFormat;
use crate::config::structs::configuration::Configuration;
use crate::registry::enums::descriptor_ref::DescriptorRef;
use crate::registry::errors::RegistryError;
use crate::registry::structs::registry::Registry;

impl Registry {
    /// Indexes every section of the document. Nothing is dialed here.
    pub fn new(config: Configuration, format: ConfigFormat) -> Registry {
        let expand_env = config.expand_env_enabled();
        let registry = Registry {
            format,
            redis: index(config.redis, expand_env),
            pq: index(config.pq, expand_env),
            cockroachdb: index(config.cockroachdb, expand_env),
            mongo: index(config.mongo, expand_env),
        };
        info!(
            "[REGISTRY] Indexed {} redis, {} pq, {} cockroachdb, {} mongo",
            registry.redis.len(),
            registry.pq.len(),
            registry.cockroachdb.len(),
            registry.mongo.len()
        );
        registry
    }

    pub fn empty() -> Registry {
        Registry::new(Configuration::default(), ConfigFormat::json)
    }

    pub fn load(data: &[u8], format: ConfigFormat) -> Result<Registry, RegistryError> {
        let config = Configuration::load(data, format)?;
        Ok(Registry::new(config, format))
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Registry, RegistryError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let config = Configuration::load_file(path)?;
        Ok(Registry::new(config, format))
    }

    /// Format the document was decoded from; descriptors are serialized back
    /// in the same one.
    pub fn format(&self) -> ConfigFormat {
        self.format
    }

    /// Configured identifiers of one kind, sorted.
    pub fn ids(&self, kind: BackendKind) -> Vec<String> {
        let mut ids: Vec<String> = match kind {
            BackendKind::redis => self.redis.keys().cloned().collect(),
            BackendKind::pq => self.pq.keys().cloned().collect(),
            BackendKind::cockroachdb => self.cockroachdb.keys().cloned().collect(),
            BackendKind::mongo => self.mongo.keys().cloned().collect(),
        };
        ids.sort();
        ids
    }

    pub fn is_empty(&self) -> bool {
        self.redis.is_empty() && self.pq.is_empty() && self.cockroachdb.is_empty() && self.mongo.is_empty()
    }

    pub fn lookup(&self, kind: BackendKind, id: &str) -> Result<DescriptorRef<'_>, RegistryError> {
        Ok(match kind {
            BackendKind::redis => DescriptorRef::redis(find(&self.redis, id)?),
            BackendKind::pq => DescriptorRef::pq(find(&self.pq, id)?),
            BackendKind::cockroachdb => DescriptorRef::cockroachdb(find(&self.cockroachdb, id)?),
            BackendKind::mongo => DescriptorRef::mongo(find(&self.mongo, id)?),
        })
    }

    pub(crate) fn encode<S: BackendSettings>(&self, descriptor: &Descriptor<S>) -> Result<String, RegistryError> {
        self.format
            .encode(descriptor.settings())
            .map_err(|e| RegistryError::Serialization {
                kind: S::KIND,
                id: descriptor.id().to_string(),
                message: e.to_string(),
            })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::empty()
    }
}

/// Later entries with the same identifier replace earlier ones.
pub(crate) fn index<S: BackendSettings>(entries: Vec<S>, expand_env: bool) -> AHashMap<String, Descriptor<S>> {
    let mut table = AHashMap::with_capacity(entries.len());
    for settings in entries {
        let id = settings.id().to_string();
        if table.insert(id.clone(), Descriptor::new(settings, expand_env)).is_some() {
            debug!("[{}] Duplicate id \"{}\", the later entry wins", S::KIND.label(), id);
        }
    }
    table
}

pub(crate) fn find<'a, S: BackendSettings>(
    table: &'a AHashMap<String, Descriptor<S>>,
    id: &str,
) -> Result<&'a Descriptor<S>, RegistryError> {
    if table.is_empty() {
        return Err(RegistryError::NotConfigured(S::KIND));
    }
    table.get(id).ok_or_else(|| RegistryError::NotFound {
        kind: S::KIND,
        id: id.to_string(),
    })
}
