use std::sync::Arc;
use parking_lot::Mutex;
use tokio::sync::{watch, OnceCell};
use crate::backend::errors::ConnectError;
use crate::backend::traits::backend_settings::BackendSettings;

pub struct Descriptor<S: BackendSettings> {
    pub(crate) settings: S,
    pub(crate) expand_env: bool,
    pub(crate) slot: Arc<OnceCell<Result<Connection<S>, ConnectError>>>,
    /// Set once the connect task is spawned; flips to `true` when it is done.
    pub(crate) attempt: Mutex<Option<watch::Receiver<bool>>>,
}

pub struct Connection<S: BackendSettings> {
    pub(crate) resolved: S,
    pub(crate) handle: S::Handle,
}
