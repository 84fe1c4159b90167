use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;
use crate::backend::enums::backend_kind::BackendKind;
use crate::backend::errors::ConnectError;
use crate::backend::traits::backend_settings::BackendSettings;
use crate::common::common::{encode_component, expand_env_in_place, EnvLookup};
use crate::config::structs::mongo_config::MongoConfig;

pub const MONGO_DEFAULT_HOST: &str = "localhost";
pub const MONGO_DEFAULT_PORT: u16 = 27017;

#[async_trait]
impl BackendSettings for MongoConfig {
    type Handle = Client;

    const KIND: BackendKind = BackendKind::mongo;

    fn id(&self) -> &str {
        &self.id
    }

    fn secret(&self) -> &str {
        &self.pwd
    }

    fn expand_env(&mut self, lookup: EnvLookup) {
        expand_env_in_place(&mut self.db, lookup);
        expand_env_in_place(&mut self.user, lookup);
        expand_env_in_place(&mut self.pwd, lookup);
        expand_env_in_place(&mut self.auth_source, lookup);
        expand_env_in_place(&mut self.host, lookup);
        expand_env_in_place(&mut self.connection_string, lookup);
    }

    // Every field is optional.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    fn apply_defaults(&mut self) {
        if !self.connection_string.is_empty() {
            return;
        }
        if self.host.is_empty() {
            self.host = MONGO_DEFAULT_HOST.to_string();
        }
        if self.port == 0 {
            self.port = MONGO_DEFAULT_PORT;
        }
    }

    fn connection_string(&self) -> String {
        if !self.connection_string.is_empty() {
            return self.connection_string.clone();
        }
        let auth = match (self.user.is_empty(), self.pwd.is_empty()) {
            (true, _) => String::new(),
            (false, true) => format!("{}@", encode_component(&self.user)),
            (false, false) => format!("{}:{}@", encode_component(&self.user), encode_component(&self.pwd)),
        };
        let mut uri = format!("mongodb://{}{}:{}/{}", auth, self.host, self.port, self.db);
        if !self.auth_source.is_empty() {
            uri.push_str(&format!("?authSource={}", encode_component(&self.auth_source)));
        }
        uri
    }

    async fn open(&self) -> Result<Self::Handle, ConnectError> {
        let options = ClientOptions::parse(self.connection_string())
            .await
            .map_err(|e| self.connect_error(e))?;
        let client = Client::with_options(options).map_err(|e| self.connect_error(e))?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| self.probe_error(e))?;
        Ok(client)
    }
}
