use serde::{
    Deserialize,
    Serialize
};
use crate::config::structs::mongo_config::MongoConfig;
use crate::config::structs::pq_config::PqConfig;
use crate::config::structs::redis_config::RedisConfig;
use crate::config::structs::roach_config::RoachConfig;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Configuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand_env: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub redis: Vec<RedisConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pq: Vec<PqConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mongo: Vec<MongoConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cockroachdb: Vec<RoachConfig>,
}
