use std::time::{Duration, Instant};
use crate::cache::structs::redis_pool_settings::RedisPoolSettings;
use crate::config::structs::redis_config::RedisConfig;

impl From<&RedisConfig> for RedisPoolSettings {
    fn from(config: &RedisConfig) -> Self {
        let minutes = |value: u64| Duration::from_secs(value).saturating_mul(60);
        Self {
            dial_timeout: Duration::from_secs(config.dial_timeout_seconds),
            command_timeout: Duration::from_secs(config.read_timeout_seconds)
                .saturating_add(Duration::from_secs(config.write_timeout_seconds)),
            keep_alive: minutes(config.keep_alive_mins),
            max_idle: config.max_idle,
            max_active: config.max_active,
            idle_timeout: (config.idle_timeout_mins > 0).then(|| minutes(config.idle_timeout_mins)),
            max_lifetime: (config.max_conn_lifetime_seconds > 0)
                .then(|| Duration::from_secs(config.max_conn_lifetime_seconds)),
            wait: config.wait,
        }
    }
}

impl RedisPoolSettings {
    pub fn is_expired(&self, created: Instant, now: Instant) -> bool {
        self.max_lifetime
            .is_some_and(|lifetime| now.saturating_duration_since(created) >= lifetime)
    }

    /// Whether a returned connection may go back to the idle list.
    pub fn is_reusable(&self, broken: bool, created: Instant, now: Instant) -> bool {
        !broken && self.max_idle > 0 && !self.is_expired(created, now)
    }

    pub fn is_stale(&self, created: Instant, returned: Instant, now: Instant) -> bool {
        self.is_expired(created, now)
            || self
                .idle_timeout
                .is_some_and(|timeout| now.saturating_duration_since(returned) >= timeout)
    }
}
