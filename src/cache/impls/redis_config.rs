use async_trait::async_trait;
use crate::backend::enums::backend_kind::BackendKind;
use crate::backend::errors::ConnectError;
use crate::backend::traits::backend_settings::BackendSettings;
use crate::cache::structs::redis_pool::RedisPool;
use crate::cache::structs::redis_pool_settings::RedisPoolSettings;
use crate::common::common::{encode_component, expand_env_in_place, EnvLookup};
use crate::config::structs::redis_config::RedisConfig;

pub const REDIS_NETWORKS: [&str; 2] = ["tcp", "unix"];
pub const REDIS_DEFAULT_PORT: u16 = 6379;

impl RedisConfig {
    /// `host:port` for tcp, the socket path for unix, empty without a host.
    pub fn address(&self) -> String {
        if self.host.is_empty() {
            return String::new();
        }
        match self.network.as_str() {
            "unix" => self.host.clone(),
            _ => format!("{}:{}", self.host, self.port),
        }
    }

    /// `raw_url` with `pwd` and `db` filled in where the URL leaves them out.
    /// Values present in the URL win.
    pub fn raw_url_with_overrides(&self) -> String {
        let Some((scheme, rest)) = self.raw_url.split_once("://") else {
            return self.raw_url.clone();
        };
        if !matches!(scheme, "redis" | "rediss") {
            return self.raw_url.clone();
        }
        let (authority, tail) = rest.split_at(rest.find(['/', '?']).unwrap_or(rest.len()));
        let (path, query) = tail.split_at(tail.find('?').unwrap_or(tail.len()));

        let authority = if !self.pwd.is_empty() && !authority.contains('@') {
            format!(":{}@{}", encode_component(&self.pwd), authority)
        } else {
            authority.to_string()
        };
        let path = if self.db != 0 && matches!(path, "" | "/") {
            format!("/{}", self.db)
        } else {
            path.to_string()
        };
        format!("{}://{}{}{}", scheme, authority, path, query)
    }
}

#[async_trait]
impl BackendSettings for RedisConfig {
    type Handle = RedisPool;

    const KIND: BackendKind = BackendKind::redis;

    fn id(&self) -> &str {
        &self.id
    }

    fn secret(&self) -> &str {
        &self.pwd
    }

    fn expand_env(&mut self, lookup: EnvLookup) {
        expand_env_in_place(&mut self.network, lookup);
        expand_env_in_place(&mut self.host, lookup);
        expand_env_in_place(&mut self.pwd, lookup);
        expand_env_in_place(&mut self.raw_url, lookup);
    }

    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() && self.raw_url.is_empty() {
            return Err("both addr and raw_url cannot be empty".to_string());
        }
        if !self.network.is_empty() && !REDIS_NETWORKS.contains(&self.network.as_str()) {
            return Err(format!("invalid network: {}", self.network));
        }
        Ok(())
    }

    fn apply_defaults(&mut self) {
        if self.network.is_empty() {
            self.network = "tcp".to_string();
        }
        if self.port == 0 && !self.host.is_empty() && self.network == "tcp" {
            self.port = REDIS_DEFAULT_PORT;
        }
        if self.dial_timeout_seconds == 0 {
            self.dial_timeout_seconds = 5;
        }
        if self.keep_alive_mins == 0 {
            self.keep_alive_mins = 5;
        }
        if self.read_timeout_seconds == 0 {
            self.read_timeout_seconds = 3;
        }
        if self.write_timeout_seconds == 0 {
            self.write_timeout_seconds = if self.read_timeout_seconds != 0 {
                self.read_timeout_seconds
            } else {
                3
            };
        }
    }

    fn connection_string(&self) -> String {
        if self.host.is_empty() {
            return self.raw_url_with_overrides();
        }
        if self.network == "unix" {
            let mut url = format!("redis+unix://{}?db={}", self.host, self.db);
            if !self.pwd.is_empty() {
                url.push_str(&format!("&pass={}", encode_component(&self.pwd)));
            }
            return url;
        }
        let auth = if self.pwd.is_empty() {
            String::new()
        } else {
            format!(":{}@", encode_component(&self.pwd))
        };
        format!("redis://{}{}/{}", auth, self.address(), self.db)
    }

    async fn open(&self) -> Result<Self::Handle, ConnectError> {
        RedisPool::new(&self.connection_string(), RedisPoolSettings::from(self))
            .map_err(|e| self.connect_error(e))
    }
}
