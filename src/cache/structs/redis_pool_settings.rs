use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisPoolSettings {
    pub dial_timeout: Duration,
    pub command_timeout: Duration,
    pub keep_alive: Duration,
    pub max_idle: usize,
    pub max_active: usize,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
    pub wait: bool,
}
