use serde::{
    Deserialize,
    Serialize
};
use crate::common::common::is_default;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RoachOptions {
    #[serde(skip_serializing_if = "is_default")]
    pub cluster_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub c: String,
}
