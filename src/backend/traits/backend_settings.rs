use std::fmt::Debug;
use async_trait::async_trait;
use serde::Serialize;
use crate::backend::enums::backend_kind::BackendKind;
use crate::backend::errors::ConnectError;
use crate::common::common::{redact, EnvLookup};

/// Connection parameters of one backend kind.
///
/// The lazy connector drives these hooks in order on a private copy of the
/// declared settings: `expand_env` (when enabled), `validate`,
/// `apply_defaults`, then `open`. Nothing here is called more than once per
/// descriptor.
#[async_trait]
pub trait BackendSettings: Clone + Debug + Serialize + Send + Sync + 'static {
    type Handle: Clone + Send + Sync + 'static;

    const KIND: BackendKind;

    fn id(&self) -> &str;

    /// Password or other secret that must never reach the logs.
    fn secret(&self) -> &str;

    fn expand_env(&mut self, lookup: EnvLookup);

    /// Checks required fields. Runs before defaults are applied.
    fn validate(&self) -> Result<(), String>;

    fn apply_defaults(&mut self);

    fn connection_string(&self) -> String;

    async fn open(&self) -> Result<Self::Handle, ConnectError>;

    fn redacted_connection_string(&self) -> String {
        redact(&self.connection_string(), self.secret())
    }

    fn validation_error(&self, reason: impl Into<String>) -> ConnectError {
        ConnectError::Validation {
            kind: Self::KIND,
            id: self.id().to_string(),
            reason: reason.into(),
        }
    }

    fn connect_error(&self, message: impl ToString) -> ConnectError {
        ConnectError::Connect {
            kind: Self::KIND,
            id: self.id().to_string(),
            message: message.to_string(),
        }
    }

    fn probe_error(&self, message: impl ToString) -> ConnectError {
        ConnectError::Probe {
            kind: Self::KIND,
            id: self.id().to_string(),
            message: message.to_string(),
        }
    }
}
