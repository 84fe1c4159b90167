use std::time::Duration;
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::PgPool;
use crate::backend::enums::backend_kind::BackendKind;
use crate::backend::errors::ConnectError;
use crate::backend::traits::backend_settings::BackendSettings;
use crate::common::common::{expand_env_in_place, EnvLookup};
use crate::config::structs::pq_config::PqConfig;
use crate::database::helpers::{
    connect_pool,
    missing_required,
    parse_ssl_mode,
    PQ_DEFAULT_PORT,
    PQ_DEFAULT_SSLMODE,
    PQ_MAX_CONNECT_TIMEOUT,
    PQ_SSLMODES
};

impl PqConfig {
    /// The sqlx equivalent of [`BackendSettings::connection_string`].
    ///
    /// libpq's `fallback_application_name` has no sqlx counterpart; it is
    /// sent as `application_name`, which is what the server ends up using
    /// when nothing else names the session.
    pub fn connect_options(&self) -> Result<PgConnectOptions, String> {
        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.db)
            .ssl_mode(parse_ssl_mode(&self.sslmode)?);
        if !self.pwd.is_empty() {
            options = options.password(&self.pwd);
        }
        if !self.fallback_application_name.is_empty() {
            options = options.application_name(&self.fallback_application_name);
        }
        if !self.sslcert.is_empty() {
            options = options.ssl_client_cert(&self.sslcert);
        }
        if !self.sslkey.is_empty() {
            options = options.ssl_client_key(&self.sslkey);
        }
        if !self.sslrootcert.is_empty() {
            options = options.ssl_root_cert(&self.sslrootcert);
        }
        Ok(options)
    }
}

#[async_trait]
impl BackendSettings for PqConfig {
    type Handle = PgPool;

    const KIND: BackendKind = BackendKind::pq;

    fn id(&self) -> &str {
        &self.id
    }

    fn secret(&self) -> &str {
        &self.pwd
    }

    fn expand_env(&mut self, lookup: EnvLookup) {
        expand_env_in_place(&mut self.host, lookup);
        expand_env_in_place(&mut self.user, lookup);
        expand_env_in_place(&mut self.pwd, lookup);
        expand_env_in_place(&mut self.db, lookup);
        expand_env_in_place(&mut self.sslmode, lookup);
        expand_env_in_place(&mut self.fallback_application_name, lookup);
        expand_env_in_place(&mut self.sslcert, lookup);
        expand_env_in_place(&mut self.sslkey, lookup);
        expand_env_in_place(&mut self.sslrootcert, lookup);
    }

    fn validate(&self) -> Result<(), String> {
        if missing_required(&self.host, &self.user, &self.db) {
            return Err("invalid host, user or database name".to_string());
        }
        if !self.sslmode.is_empty() && !PQ_SSLMODES.contains(&self.sslmode.as_str()) {
            return Err(format!("invalid sslmode: {}", self.sslmode));
        }
        if self.connect_timeout > PQ_MAX_CONNECT_TIMEOUT {
            return Err(format!("invalid connect_timeout: {}", self.connect_timeout));
        }
        Ok(())
    }

    fn apply_defaults(&mut self) {
        if self.port == 0 {
            self.port = PQ_DEFAULT_PORT;
        }
        if self.sslmode.is_empty() {
            self.sslmode = PQ_DEFAULT_SSLMODE.to_string();
        }
    }

    fn connection_string(&self) -> String {
        let mut dsn = format!(
            "user={} dbname={} host={} port={} sslmode={}",
            self.user, self.db, self.host, self.port, self.sslmode
        );
        if !self.pwd.is_empty() {
            dsn.push_str(&format!(" password={}", self.pwd));
        }
        if !self.fallback_application_name.is_empty() {
            dsn.push_str(&format!(" fallback_application_name={}", self.fallback_application_name));
        }
        if self.connect_timeout > 0 {
            dsn.push_str(&format!(" connect_timeout={}", self.connect_timeout));
        }
        if !self.sslcert.is_empty() {
            dsn.push_str(&format!(" sslcert={}", self.sslcert));
        }
        if !self.sslkey.is_empty() {
            dsn.push_str(&format!(" sslkey={}", self.sslkey));
        }
        if !self.sslrootcert.is_empty() {
            dsn.push_str(&format!(" sslrootcert={}", self.sslrootcert));
        }
        dsn
    }

    async fn open(&self) -> Result<Self::Handle, ConnectError> {
        let options = self.connect_options().map_err(|reason| self.validation_error(reason))?;
        let acquire_timeout = (self.connect_timeout > 0).then(|| Duration::from_secs(self.connect_timeout));
        connect_pool(options, acquire_timeout)
            .await
            .map_err(|e| self.connect_error(e))
    }
}
