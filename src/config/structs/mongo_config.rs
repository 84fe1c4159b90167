use serde::{
    Deserialize,
    Serialize
};
use crate::common::common::is_default;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MongoConfig {
    #[serde(skip_serializing_if = "is_default")]
    pub id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub db: String,
    #[serde(skip_serializing_if = "is_default")]
    pub user: String,
    #[serde(skip_serializing_if = "is_default")]
    pub pwd: String,
    #[serde(rename = "authSource", skip_serializing_if = "is_default")]
    pub auth_source: String,
    #[serde(skip_serializing_if = "is_default")]
    pub host: String,
    #[serde(skip_serializing_if = "is_default")]
    pub port: u16,
    // Used verbatim when set; host, port and credentials are then ignored.
    #[serde(rename = "connectionString", skip_serializing_if = "is_default")]
    pub connection_string: String,
}
