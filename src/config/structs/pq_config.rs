use serde::{
    Deserialize,
    Serialize
};
use crate::common::common::is_default;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PqConfig {
    #[serde(skip_serializing_if = "is_default")]
    pub id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub host: String,
    #[serde(skip_serializing_if = "is_default")]
    pub port: u16,
    #[serde(skip_serializing_if = "is_default")]
    pub user: String,
    #[serde(skip_serializing_if = "is_default")]
    pub pwd: String,
    #[serde(skip_serializing_if = "is_default")]
    pub db: String,
    // disable | verify-ca | verify-full
    #[serde(skip_serializing_if = "is_default")]
    pub sslmode: String,
    #[serde(skip_serializing_if = "is_default")]
    pub fallback_application_name: String,
    // seconds
    #[serde(skip_serializing_if = "is_default")]
    pub connect_timeout: u64,
    // PEM encoded client certificate
    #[serde(skip_serializing_if = "is_default")]
    pub sslcert: String,
    // PEM encoded client key
    #[serde(skip_serializing_if = "is_default")]
    pub sslkey: String,
    // PEM encoded root certificate
    #[serde(skip_serializing_if = "is_default")]
    pub sslrootcert: String,
}
