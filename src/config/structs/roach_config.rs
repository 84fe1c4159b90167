use serde::{
    Deserialize,
    Serialize
};
use crate::common::common::is_default;
use crate::config::structs::roach_options::RoachOptions;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RoachConfig {
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
    // disable | allow | prefer | require | verify-ca | verify-full
    #[serde(skip_serializing_if = "is_default")]
    pub sslmode: String,
    #[serde(skip_serializing_if = "is_default")]
    pub application_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub sslcert: String,
    #[serde(skip_serializing_if = "is_default")]
    pub sslkey: String,
    #[serde(skip_serializing_if = "is_default")]
    pub sslrootcert: String,
    #[serde(skip_serializing_if = "is_default")]
    pub options: RoachOptions,
}
