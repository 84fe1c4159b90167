use std::str::FromStr;
use std::time::Duration;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{ConnectOptions, PgPool};

pub const PQ_DEFAULT_PORT: u16 = 5432;
pub const PQ_DEFAULT_SSLMODE: &str = "disable";
/// Pool acquisition adds this to `Instant::now()`; larger values overflow.
pub const PQ_MAX_CONNECT_TIMEOUT: u64 = u32::MAX as u64;
pub const PQ_SSLMODES: [&str; 3] = ["disable", "verify-ca", "verify-full"];

pub const ROACH_DEFAULT_PORT: u16 = 26257;
pub const ROACH_DEFAULT_SSLMODE: &str = "verify-full";
pub const ROACH_SSLMODES: [&str; 6] = ["disable", "allow", "prefer", "require", "verify-ca", "verify-full"];

pub fn missing_required(host: &str, user: &str, db: &str) -> bool {
    host.is_empty() || user.is_empty() || db.is_empty()
}

pub fn parse_ssl_mode(sslmode: &str) -> Result<PgSslMode, String> {
    PgSslMode::from_str(sslmode).map_err(|_| format!("invalid sslmode: {}", sslmode))
}

/// Opens the pool, routing statement logging through `log` at debug.
pub async fn connect_pool(options: PgConnectOptions, acquire_timeout: Option<Duration>) -> Result<PgPool, sqlx::Error> {
    let options = options
        .log_statements(log::LevelFilter::Debug)
        .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
    let mut pool = PgPoolOptions::new();
    if let Some(timeout) = acquire_timeout {
        pool = pool.acquire_timeout(timeout);
    }
    pool.connect_with(options).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ssl_mode() {
        assert!(matches!(parse_ssl_mode("verify-full"), Ok(PgSslMode::VerifyFull)));
        assert!(matches!(parse_ssl_mode("disable"), Ok(PgSslMode::Disable)));
        assert_eq!(parse_ssl_mode("sometimes").unwrap_err(), "invalid sslmode: sometimes");
    }

    #[test]
    fn test_missing_required() {
        assert!(!missing_required("h", "u", "d"));
        assert!(missing_required("", "u", "d"));
        assert!(missing_required("h", "", "d"));
        assert!(missing_required("h", "u", ""));
    }

    #[test]
    fn test_sslmode_sets_are_asymmetric() {
        for mode in ["require", "allow", "prefer"] {
            assert!(ROACH_SSLMODES.contains(&mode));
            assert!(!PQ_SSLMODES.contains(&mode));
        }
        for mode in PQ_SSLMODES {
            assert!(ROACH_SSLMODES.contains(&mode));
        }
    }
}
