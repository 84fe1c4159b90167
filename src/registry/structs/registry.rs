use ahash::AHashMap;
use crate::backend::structs::descriptor::Descriptor;
use crate::config::enums::config_format::ConfigFormat;
use crate::config::structs::mongo_config::MongoConfig;
use crate::config::structs::pq_config::PqConfig;
use crate::config::structs::redis_config::RedisConfig;
use crate::config::structs::roach_config::RoachConfig;

/// One loaded configuration document, indexed by identifier per kind.
///
/// The tables are written once in [`Registry::new`] and never change; only
/// the one-shot slot inside each descriptor fills in later.
#[derive(Debug)]
pub struct Registry {
    pub(crate) format: ConfigFormat,
    pub(crate) redis: AHashMap<String, Descriptor<RedisConfig>>,
    pub(crate) pq: AHashMap<String, Descriptor<PqConfig>>,
    pub(crate) cockroachdb: AHashMap<String, Descriptor<RoachConfig>>,
    pub(crate) mongo: AHashMap<String, Descriptor<MongoConfig>>,
}
