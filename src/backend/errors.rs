use thiserror::Error;
use crate::backend::enums::backend_kind::BackendKind;

/// Outcome of a failed connect attempt. Cloned to every caller that asks
/// the same descriptor afterwards.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectError {
    #[error("invalid {kind} configuration [{id}]: {reason}")]
    Validation { kind: BackendKind, id: String, reason: String },

    #[error("{kind} [{id}] connect error: {message}")]
    Connect { kind: BackendKind, id: String, message: String },

    #[error("{kind} [{id}] ping error: {message}")]
    Probe { kind: BackendKind, id: String, message: String },
}

impl ConnectError {
    pub fn kind(&self) -> BackendKind {
        match self {
            ConnectError::Validation { kind, .. }
            | ConnectError::Connect { kind, .. }
            | ConnectError::Probe { kind, .. } => *kind,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ConnectError::Validation { id, .. }
            | ConnectError::Connect { id, .. }
            | ConnectError::Probe { id, .. } => id,
        }
    }
}
