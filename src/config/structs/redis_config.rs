use serde::{
    Deserialize,
    Serialize
};
use crate::common::common::is_default;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RedisConfig {
    #[serde(skip_serializing_if = "is_default")]
    pub id: String,
    // "tcp" or "unix"; for "unix" the host is the socket path.
    #[serde(skip_serializing_if = "is_default")]
    pub network: String,
    #[serde(skip_serializing_if = "is_default")]
    pub host: String,
    #[serde(skip_serializing_if = "is_default")]
    pub port: u16,
    #[serde(skip_serializing_if = "is_default")]
    pub pwd: String,
    // Redis URI scheme; only used when no host is given.
    #[serde(skip_serializing_if = "is_default")]
    pub raw_url: String,
    #[serde(skip_serializing_if = "is_default")]
    pub dial_timeout_seconds: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub db: i64,
    #[serde(skip_serializing_if = "is_default")]
    pub keep_alive_mins: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub read_timeout_seconds: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub write_timeout_seconds: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub max_idle: usize,
    // Zero means no limit on checked-out connections.
    #[serde(skip_serializing_if = "is_default")]
    pub max_active: usize,
    #[serde(skip_serializing_if = "is_default")]
    pub idle_timeout_mins: u64,
    // Block for a free connection when max_active is reached instead of failing.
    #[serde(skip_serializing_if = "is_default")]
    pub wait: bool,
    // Zero keeps connections regardless of age.
    #[serde(skip_serializing_if = "is_default")]
    pub max_conn_lifetime_seconds: u64,
}
