use std::str::FromStr;
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::PgPool;
use crate::backend::enums::backend_kind::BackendKind;
use crate::backend::errors::ConnectError;
use crate::backend::traits::backend_settings::BackendSettings;
use crate::common::common::{encode_component, expand_env_in_place, EnvLookup};
use crate::config::structs::roach_config::RoachConfig;
use crate::database::helpers::{
    connect_pool,
    missing_required,
    ROACH_DEFAULT_PORT,
    ROACH_DEFAULT_SSLMODE,
    ROACH_SSLMODES
};

impl RoachConfig {
    /// Value of the `options` startup parameter, e.g.
    /// `--cluster_name=blue-1 -c statement_timeout=5s`.
    pub fn startup_options(&self) -> Option<String> {
        let mut options = Vec::new();
        if !self.options.cluster_name.is_empty() {
            options.push(format!("--cluster_name={}", self.options.cluster_name));
        }
        if !self.options.c.is_empty() {
            options.push(format!("-c {}", self.options.c));
        }
        (!options.is_empty()).then(|| options.join(" "))
    }
}

#[async_trait]
impl BackendSettings for RoachConfig {
    type Handle = PgPool;

    const KIND: BackendKind = BackendKind::cockroachdb;

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
        expand_env_in_place(&mut self.application_name, lookup);
        expand_env_in_place(&mut self.sslcert, lookup);
        expand_env_in_place(&mut self.sslkey, lookup);
        expand_env_in_place(&mut self.sslrootcert, lookup);
        expand_env_in_place(&mut self.options.cluster_name, lookup);
        expand_env_in_place(&mut self.options.c, lookup);
    }

    fn validate(&self) -> Result<(), String> {
        if missing_required(&self.host, &self.user, &self.db) {
            return Err("invalid host, user or database name".to_string());
        }
        // Unset is allowed here; defaults pick verify-full.
        if !self.sslmode.is_empty() && !ROACH_SSLMODES.contains(&self.sslmode.as_str()) {
            return Err(format!("invalid sslmode: {}", self.sslmode));
        }
        Ok(())
    }

    fn apply_defaults(&mut self) {
        if self.port == 0 {
            self.port = ROACH_DEFAULT_PORT;
        }
        if self.sslmode.is_empty() {
            self.sslmode = ROACH_DEFAULT_SSLMODE.to_string();
        }
    }

    fn connection_string(&self) -> String {
        let mut auth = String::new();
        if !self.user.is_empty() {
            auth.push_str(&encode_component(&self.user));
            if !self.pwd.is_empty() {
                auth.push(':');
                auth.push_str(&encode_component(&self.pwd));
            }
            auth.push('@');
        }

        let mut url = format!("postgresql://{}{}:{}", auth, self.host, self.port);
        if !self.db.is_empty() {
            url.push('/');
            url.push_str(&encode_component(&self.db));
        }

        let mut params = vec![format!("sslmode={}", self.sslmode)];
        if !self.sslcert.is_empty() {
            params.push(format!("sslcert={}", encode_component(&self.sslcert)));
        }
        if !self.sslkey.is_empty() {
            params.push(format!("sslkey={}", encode_component(&self.sslkey)));
        }
        if !self.sslrootcert.is_empty() {
            params.push(format!("sslrootcert={}", encode_component(&self.sslrootcert)));
        }
        if !self.application_name.is_empty() {
            params.push(format!("application_name={}", encode_component(&self.application_name)));
        }
        if let Some(options) = self.startup_options() {
            params.push(format!("options={}", encode_component(&options)));
        }

        format!("{}?{}", url, params.join("&"))
    }

    async fn open(&self) -> Result<Self::Handle, ConnectError> {
        let options = PgConnectOptions::from_str(&self.connection_string())
            .map_err(|e| self.connect_error(e))?;
        connect_pool(options, None)
            .await
            .map_err(|e| self.connect_error(e))
    }
}
