use thiserror::Error;
use crate::backend::enums::backend_kind::BackendKind;
use crate::backend::errors::ConnectError;
use crate::cache::errors::PoolError;
use crate::config::enums::configuration_error::ConfigurationError;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("{0}")]
    Configuration(#[from] ConfigurationError),

    #[error("possibly no {0} configurations provided")]
    NotConfigured(BackendKind),

    #[error("no {kind} configuration for ID: {id} found")]
    NotFound { kind: BackendKind, id: String },

    #[error("{0}")]
    Connect(#[from] ConnectError),

    #[error("{0}")]
    Pool(#[from] PoolError),

    #[error("error marshalling {kind} configuration [{id}]: {message}")]
    Serialization { kind: BackendKind, id: String, message: String },
}
